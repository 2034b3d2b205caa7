use std::{
    fmt,
    path::{Component, Path, PathBuf},
};

use tokio::{fs, io::AsyncWriteExt};
use tracing::debug;

use crate::error::{CaptionError, Result};

const DATA_URI_PREFIX: &str = "data:text/plain;charset=utf-8,";

/// Where a saver put the content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveLocation {
    File(PathBuf),
    Stdout,
    DataUri(String),
}

impl fmt::Display for SaveLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveLocation::File(path) => write!(f, "{}", path.display()),
            SaveLocation::Stdout => f.write_str("<stdout>"),
            SaveLocation::DataUri(uri) => f.write_str(uri),
        }
    }
}

/// Capability to persist rendered text under a file name
pub trait FileSaver {
    async fn save(&self, filename: &str, content: &str) -> Result<SaveLocation>;
}

/// Hand `text` to `saver` under `filename`
pub async fn download<S: FileSaver>(saver: &S, filename: &str, text: &str) -> Result<SaveLocation> {
    let location = saver.save(filename, text).await?;
    debug!(filename, bytes = text.len(), %location, "saved");
    Ok(location)
}

/// Percent-encode UTF-8 text into a `text/plain` data URI
pub fn data_uri(text: &str) -> String {
    format!("{}{}", DATA_URI_PREFIX, urlencoding::encode(text))
}

/// Writes files into a directory, creating it on first use
pub struct DirectorySaver {
    dir: PathBuf,
}

impl DirectorySaver {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

fn is_plain_filename(filename: &str) -> bool {
    let mut components = Path::new(filename).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !filename.contains(['/', '\\'])
}

impl FileSaver for DirectorySaver {
    async fn save(&self, filename: &str, content: &str) -> Result<SaveLocation> {
        if !is_plain_filename(filename) {
            return Err(CaptionError::InvalidFilename {
                filename: filename.to_string(),
            });
        }

        fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(filename);
        fs::write(&path, content).await?;
        Ok(SaveLocation::File(path))
    }
}

pub struct StdoutSaver;

impl FileSaver for StdoutSaver {
    async fn save(&self, _filename: &str, content: &str) -> Result<SaveLocation> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(content.as_bytes()).await?;
        stdout.flush().await?;
        Ok(SaveLocation::Stdout)
    }
}

/// Builds the link a browser download would use; nothing is written
pub struct DataUriSaver;

impl FileSaver for DataUriSaver {
    async fn save(&self, _filename: &str, content: &str) -> Result<SaveLocation> {
        Ok(SaveLocation::DataUri(data_uri(content)))
    }
}
