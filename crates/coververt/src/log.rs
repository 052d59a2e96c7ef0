use core::fmt;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use jiff::Zoned;
use tracing::Level;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

/// Name of the log file written to the working directory.
pub(crate) const LOG_FILE: &str = "coververt.log";

/// Timestamps in local time.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", Zoned::now().strftime("%Y-%m-%d %H:%M:%S"))
    }
}

/// Install a subscriber appending to the log file at `path`.
pub(crate) fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| anyhow!("Opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_timer(LocalTime)
        .with_max_level(Level::INFO)
        .try_init()
        .map_err(|e| anyhow!(e))
        .context("Installing log subscriber")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::fmt::format::Writer;
    use tracing_subscriber::fmt::time::FormatTime;

    use super::LocalTime;

    #[test]
    fn local_time_format() {
        let mut s = String::new();
        LocalTime
            .format_time(&mut Writer::new(&mut s))
            .expect("formatting time");

        let b = s.as_bytes();
        assert_eq!(b.len(), 19, "{s}");
        assert_eq!((b[4], b[7], b[10], b[13], b[16]), (b'-', b'-', b' ', b':', b':'));
    }
}
