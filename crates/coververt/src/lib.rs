//! [<img alt="github" src="https://img.shields.io/badge/github-udoprog/mediavert-8da0cb?style=for-the-badge&logo=github" height="20">](https://github.com/udoprog/mediavert)
//! [<img alt="crates.io" src="https://img.shields.io/crates/v/coververt.svg?style=for-the-badge&color=fc8d62&logo=rust" height="20">](https://crates.io/crates/coververt)
//! [<img alt="docs.rs" src="https://img.shields.io/badge/docs.rs-coververt-66c2a5?style=for-the-badge&logoColor=white&logo=data:image/svg+xml;base64,PHN2ZyByb2xlPSJpbWciIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyIgdmlld0JveD0iMCAwIDUxMiA1MTIiPjxwYXRoIGZpbGw9IiNmNWY1ZjUiIGQ9Ik00ODguNiAyNTAuMkwzOTIgMjE0VjEwNS41YzAtMTUtOS4zLTI4LjQtMjMuNC0zMy43bC0xMDAtMzcuNWMtOC4xLTMuMS0xNy4xLTMuMS0yNS4zIDBsLTEwMCAzNy41Yy0xNC4xIDUuMy0yMy40IDE4LjctMjMuNCAzMy43VjIxNGwtOTYuNiAzNi4yQzkuMyAyNTUuNSAwIDI2OC45IDAgMjgzLjlWMzk0YzAgMTMuNiA3LjcgMjYuMSAxOS45IDMyLjJsMTAwIDUwYzEwLjEgNS4xIDIyLjEgNS4xIDMyLjIgMGwxMDMuOS01MiAxMDMuOSA1MmMxMC4xIDUuMSAyMi4xIDUuMSAzMi4yIDBsMTAwLTUwYzEyLjItNi4xIDE5LjktMTguNiAxOS45LTMyLjJWMjgzLjljMC0xNS05LjMtMjguNC0yMy40LTMzLjd6TTM1OCAyMTQuOGwtODUgMzEuOXYtNjguMmw4NS0zN3Y3My4zek0xNTQgMTA0LjFsMTAyLTM4LjIgMTAyIDM4LjJ2LjZsLTEwMiA0MS40LTEwMi00MS40di0uNnptODQgMjkxLjFsLTg1IDQyLjV2LTc5LjFsODUtMzguOHY3NS40em0wLTExMmwtMTAyIDQxLjQtMTAyLTQxLjR2LS42bDEwMi0zOC4yIDEwMiAzOC4ydi42em0yNDAgMTEybC04NSA0Mi41di03OS4xbDg1LTM4Ljh2NzUuNHptMC0xMTJsLTEwMiA0MS40LTEwMi00MS40di0uNmwxMDItMzguMiAxMDIgMzguMnYuNnoiPjwvcGF0aD48L3N2Zz4K" height="20">](https://docs.rs/coververt)
//!
//! A tool to promote embedded pictures in FLAC files to front covers.
//!
//! The current directory is recursively scanned for `.flac` files (matched
//! ignoring case). For each file, any embedded picture with the type "other"
//! is retyped as "front cover", leaving the picture data untouched.
//!
//! Files are left alone if they:
//! * Have no embedded pictures.
//! * Already have a front cover, even if they also have "other" pictures.
//! * Have no "other" pictures.
//!
//! Running the tool again over the same files is therefore a no-op.
//!
//! Every decision is appended to `coververt.log` in the current directory,
//! while progress and a summary of the modified directories is printed to
//! standard output.
//!
//! <br>
//!
//! ## Usage
//!
//! ```sh
//! cd music
//! coververt
//! ```
//!
//! Use `--verbose` to also print skipped and failed files:
//!
//! ```sh
//! coververt --verbose
//! ```

pub mod cli;
mod log;
mod out;
mod patch;
mod shell;
mod summary;
#[cfg(test)]
mod testing;
mod walk;
