//! Loading the CSV member out of an eBird "Download My Data" archive.
//!
//! A missing member is reported as `Ok(None)`; only unreadable files and
//! corrupt archives are errors.

use crate::config::ArchiveConfig;
use crate::error::{MyDataError, Result};
use std::io::{Cursor, Read};
use std::path::PathBuf;
use tokio::task;
use tracing::{debug, info, warn};
use zip::ZipArchive;
use zip::result::ZipError;

const UTF8_BOM: char = '\u{feff}';

/// Where an export archive comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl DataSource {
    fn describe(&self) -> PathBuf {
        match self {
            DataSource::Path(path) => path.clone(),
            DataSource::Bytes(_) => PathBuf::from("<memory>"),
        }
    }
}

impl From<PathBuf> for DataSource {
    fn from(path: PathBuf) -> Self {
        DataSource::Path(path)
    }
}

impl From<&std::path::Path> for DataSource {
    fn from(path: &std::path::Path) -> Self {
        DataSource::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for DataSource {
    fn from(bytes: Vec<u8>) -> Self {
        DataSource::Bytes(bytes)
    }
}

/// Text of `member_name` inside a ZIP archive held in memory
pub fn extract_member(bytes: &[u8], member_name: &str) -> Result<Option<String>> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    debug!("Opened archive with {} members", archive.len());

    let mut file = match archive.by_name(member_name) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => return Ok(None),
        Err(error) => return Err(error.into()),
    };

    let mut raw = Vec::new();
    file.read_to_end(&mut raw)?;
    let text = String::from_utf8_lossy(&raw);
    Ok(Some(text.trim_start_matches(UTF8_BOM).to_string()))
}

/// Load the export CSV using the default member name
pub async fn load_data_file(source: impl Into<DataSource>) -> Result<Option<String>> {
    load_data_file_with(source, &ArchiveConfig::default()).await
}

/// Load the configured CSV member from an archive file or buffer
pub async fn load_data_file_with(
    source: impl Into<DataSource>,
    config: &ArchiveConfig,
) -> Result<Option<String>> {
    let source = source.into();
    let label = source.describe();
    info!("Loading eBird data from ZIP file {}", label.display());

    let bytes = match source {
        DataSource::Path(path) => tokio::fs::read(&path).await?,
        DataSource::Bytes(bytes) => bytes,
    };

    let member_name = config.member_name.clone();
    let content = task::spawn_blocking(move || extract_member(&bytes, &member_name))
        .await
        .map_err(|e| MyDataError::ArchiveReadFailed {
            path: label.clone(),
            reason: format!("Failed to join extraction task: {}", e),
        })??;

    match &content {
        Some(text) => debug!("Extracted {} bytes of CSV text", text.len()),
        None => warn!(
            "Archive {} has no member named {}",
            label.display(),
            config.member_name
        ),
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn build_zip(members: &[(&str, &str)]) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, content) in members {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_extract_member_found() {
        let bytes = build_zip(&[("MyEBirdData.csv", "Common Name\nMallard\n")]);
        let text = extract_member(&bytes, "MyEBirdData.csv").unwrap();
        assert_eq!(text.as_deref(), Some("Common Name\nMallard\n"));
    }

    #[test]
    fn test_extract_member_missing_is_none() {
        let bytes = build_zip(&[("README.txt", "hello")]);
        assert_eq!(extract_member(&bytes, "MyEBirdData.csv").unwrap(), None);
    }

    #[test]
    fn test_extract_member_strips_bom() {
        let bytes = build_zip(&[("MyEBirdData.csv", "\u{feff}Common Name\n")]);
        let text = extract_member(&bytes, "MyEBirdData.csv").unwrap().unwrap();
        assert!(text.starts_with("Common Name"));
    }

    #[test]
    fn test_extract_member_rejects_garbage() {
        let result = extract_member(b"definitely not a zip archive", "MyEBirdData.csv");
        assert!(matches!(result, Err(MyDataError::Archive(_))));
    }

    #[tokio::test]
    async fn test_load_data_file_from_bytes_with_custom_member() {
        let bytes = build_zip(&[("export.csv", "Common Name\n")]);
        let config = ArchiveConfig {
            member_name: "export.csv".to_string(),
        };
        let text = load_data_file_with(bytes.clone(), &config).await.unwrap();
        assert_eq!(text.as_deref(), Some("Common Name\n"));

        assert_eq!(load_data_file(bytes).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_load_data_file_missing_path_is_io_error() {
        let result = load_data_file(PathBuf::from("/nonexistent/ebird.zip")).await;
        assert!(matches!(result, Err(MyDataError::Io(_))));
    }
}
