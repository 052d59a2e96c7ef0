use core::fmt;

use std::fs::{File, OpenOptions};
use std::path::Path;

use anyhow::{Context, Result, ensure};
use lofty::config::{ParseOptions, WriteOptions};
use lofty::file::AudioFile;
use lofty::flac::FlacFile;
use lofty::ogg::OggPictureStorage;
use lofty::picture::{Picture, PictureInformation, PictureType};

/// An embedded picture together with its image information.
pub(crate) type Entry = (Picture, PictureInformation);

/// Reason why a file was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Skip {
    /// The file has no embedded pictures.
    NoPictures,
    /// The file already has at least one front cover.
    AlreadyHasCover,
    /// None of the pictures are of type "other".
    NothingToChange,
}

impl fmt::Display for Skip {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::NoPictures => write!(f, "no pictures found"),
            Skip::AlreadyHasCover => write!(f, "cover image already exists"),
            Skip::NothingToChange => write!(f, "no 'other' type pictures found"),
        }
    }
}

/// The outcome of patching a single file.
#[derive(Debug)]
pub(crate) enum Outcome {
    /// Pictures were retyped and the file was saved.
    Modified { retyped: usize },
    /// The file was not written to.
    Skipped(Skip),
    /// The file could not be read or saved.
    Failed(anyhow::Error),
}

/// Retype every "other" picture as a front cover.
///
/// Returns the number of retyped pictures, or the reason nothing was done.
/// Nothing is retyped if any picture already is a front cover.
pub(crate) fn retype(pictures: &mut [Entry]) -> Result<usize, Skip> {
    if pictures.is_empty() {
        return Err(Skip::NoPictures);
    }

    if pictures
        .iter()
        .any(|(p, _)| p.pic_type() == PictureType::CoverFront)
    {
        return Err(Skip::AlreadyHasCover);
    }

    let mut retyped = 0;

    for (p, _) in pictures.iter_mut() {
        if p.pic_type() == PictureType::Other {
            p.set_pic_type(PictureType::CoverFront);
            retyped += 1;
        }
    }

    if retyped == 0 {
        return Err(Skip::NothingToChange);
    }

    Ok(retyped)
}

/// Patch the pictures of a single file.
pub(crate) fn patch(path: &Path) -> Outcome {
    match try_patch(path) {
        Ok(outcome) => outcome,
        Err(error) => Outcome::Failed(error),
    }
}

fn try_patch(path: &Path) -> Result<Outcome> {
    let mut flac = read(path)?;
    let mut pictures = flac.pictures().to_vec();

    let retyped = match retype(&mut pictures) {
        Ok(retyped) => retyped,
        Err(skip) => return Ok(Outcome::Skipped(skip)),
    };

    set_pictures(&mut flac, pictures)?;

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .context("opening file for writing")?;

    flac.save_to(&mut file, WriteOptions::default())
        .context("saving metadata")?;

    Ok(Outcome::Modified { retyped })
}

/// Read the metadata blocks of a FLAC file.
pub(crate) fn read(path: &Path) -> Result<FlacFile> {
    let mut file = File::open(path).context("opening file")?;

    let options = ParseOptions::new().read_properties(false);
    let flac = FlacFile::read_from(&mut file, options).context("reading metadata")?;
    Ok(flac)
}

/// Store the updated pictures, replacing each picture whose type changed at
/// the same index.
fn set_pictures(flac: &mut FlacFile, pictures: Vec<Entry>) -> Result<()> {
    let expected = flac.pictures().len();
    ensure!(
        pictures.len() == expected,
        "picture count changed from {expected} to {}",
        pictures.len()
    );

    for (index, (picture, info)) in pictures.into_iter().enumerate() {
        if flac.pictures()[index].0.pic_type() != picture.pic_type() {
            flac.set_picture(index, picture, info);
        }
    }

    let actual = flac.pictures().len();
    ensure!(
        actual == expected,
        "picture count changed from {expected} to {actual}"
    );

    Ok(())
}
