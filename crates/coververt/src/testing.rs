//! Synthesized FLAC fixtures.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::Result;

pub(crate) const OTHER: u32 = 0;
pub(crate) const ICON: u32 = 1;
pub(crate) const COVER_FRONT: u32 = 3;
pub(crate) const COVER_BACK: u32 = 4;

const STREAM_INFO: u8 = 0;
const PADDING: u8 = 1;
const PICTURE: u8 = 6;

/// Build a FLAC file without audio frames containing the given pictures in
/// order. Each picture is `(picture type, payload)`.
pub(crate) fn flac(pictures: &[(u32, &str)]) -> Vec<u8> {
    let mut out = b"fLaC".to_vec();

    let mut stream_info = Vec::new();
    // Min and max block size.
    stream_info.extend_from_slice(&4096u16.to_be_bytes());
    stream_info.extend_from_slice(&4096u16.to_be_bytes());
    // Min and max frame size, unknown.
    stream_info.extend_from_slice(&[0; 6]);
    // Sample rate (20 bits), channels - 1 (3 bits), bits per sample - 1 (5
    // bits) and total samples (36 bits).
    let packed = (44100u64 << 44) | (1 << 41) | (15 << 36);
    stream_info.extend_from_slice(&packed.to_be_bytes());
    // MD5 signature.
    stream_info.extend_from_slice(&[0; 16]);

    block(&mut out, STREAM_INFO, false, &stream_info);

    for &(ty, payload) in pictures {
        let mut picture = Vec::new();
        picture.extend_from_slice(&ty.to_be_bytes());
        push_string(&mut picture, "image/png");
        push_string(&mut picture, "");
        // Width, height, color depth and number of indexed colors.
        for n in [1u32, 1, 24, 0] {
            picture.extend_from_slice(&n.to_be_bytes());
        }
        push_string(&mut picture, payload);
        block(&mut out, PICTURE, false, &picture);
    }

    block(&mut out, PADDING, true, &[0; 64]);
    out
}

/// Write a synthesized FLAC file into `dir`, creating parent directories.
pub(crate) fn write(
    dir: impl AsRef<Path>,
    name: &str,
    pictures: &[(u32, &str)],
) -> Result<PathBuf> {
    let path = dir.as_ref().join(name);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&path, flac(pictures))?;
    Ok(path)
}

fn block(out: &mut Vec<u8>, ty: u8, last: bool, content: &[u8]) {
    let len = u32::try_from(content.len()).expect("block too large");
    out.push(if last { 0x80 | ty } else { ty });
    out.extend_from_slice(&len.to_be_bytes()[1..]);
    out.extend_from_slice(content);
}

fn push_string(out: &mut Vec<u8>, s: &str) {
    let len = u32::try_from(s.len()).expect("string too large");
    out.extend_from_slice(&len.to_be_bytes());
    out.extend_from_slice(s.as_bytes());
}

/// Make the file at `path` read-only.
///
/// Returns `false` if the file can still be opened for writing, which is the
/// case when running with elevated privileges.
pub(crate) fn make_read_only(path: &Path) -> Result<bool> {
    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_readonly(true);
    fs::set_permissions(path, permissions)?;
    Ok(OpenOptions::new().write(true).open(path).is_err())
}
