//! Build version stamp.
//!
//! `build:game` stamps the working tree with the UTC time of the export so
//! shipped clients can report which build they are. One file, overwritten
//! every build, no history.

use std::io;
use std::path::Path;

use chrono::{SecondsFormat, Utc};

/// Default name of the stamp file in the working directory
pub const VERSION_FILE: &str = "version";

/// Write the current UTC time (RFC 3339, microsecond precision) to `path`.
///
/// Returns the stamp that was written.
pub fn write_stamp(path: &Path) -> io::Result<String> {
    let stamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    std::fs::write(path, &stamp)?;
    Ok(stamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn stamp_is_current_utc_time() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(VERSION_FILE);

        let written = write_stamp(&path).unwrap();
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, on_disk);

        let parsed = DateTime::parse_from_rfc3339(&on_disk).unwrap();
        let age = Utc::now().signed_duration_since(parsed);
        assert!(age.num_seconds().abs() < 5, "stamp too far from now: {age}");
    }

    #[test]
    fn stamp_is_overwritten_not_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(VERSION_FILE);

        write_stamp(&path).unwrap();
        let second = write_stamp(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), second);
    }
}
