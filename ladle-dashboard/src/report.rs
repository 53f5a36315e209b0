//! Completed-orders report download
//!
//! The backend streams the report as a JSON blob; it is saved client-side
//! under a timestamped file name.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

/// File name for a report downloaded at `now`
pub fn report_file_name(now: DateTime<Utc>) -> String {
    format!(
        "completed-orders-report-{}.json",
        now.format("%Y%m%d-%H%M%S")
    )
}

/// Write the report blob into `dir`, returning the full path
pub fn save_report(dir: &Path, bytes: &[u8]) -> io::Result<PathBuf> {
    let path = dir.join(report_file_name(Utc::now()));
    std::fs::write(&path, bytes)?;
    Ok(path)
}
