#![allow(dead_code)]

use std::io::{Error, Write};
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

pub const SITEDATA: &str = r#"{
    "token1": "C598-ECF9-F0F7-881A",
    "token2": "C598-ECF9-F0F7-881B",
    "retries": 3,
    "enabled": true
}"#;

/// Writes `contents` to a `sitedata.json` inside a fresh temp directory.
pub fn sitedata_dir(contents: &str) -> Result<(TempDir, PathBuf), Error> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("sitedata.json");
    std::fs::write(&path, contents)?;
    Ok((dir, path))
}

/// Writes payment requests as a `payment, amount` CSV.
pub fn requests_csv(rows: &[(&str, &str)]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "payment, amount")?;
    for (payment, amount) in rows {
        writeln!(file, "{}, {}", payment, amount)?;
    }
    file.flush()?;
    Ok(file)
}
