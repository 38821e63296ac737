#[cfg(test)]
#[path = "file_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Field;
use crate::domain::models::FieldName;

/// Code field backed by the local file the user edits. A missing file reads
/// as an absent field rather than an error.
pub struct FileField {
    path: path::PathBuf,
}

impl Default for FileField {
    fn default() -> FileField {
        return FileField::new(path::PathBuf::from(Config::get(ConfigKey::CodeFile)));
    }
}

impl FileField {
    pub fn new(path: path::PathBuf) -> FileField {
        return FileField { path };
    }
}

#[async_trait]
impl Field for FileField {
    fn name(&self) -> FieldName {
        return FieldName::File;
    }

    #[allow(clippy::implicit_return)]
    async fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).await?;
        return Ok(Some(content));
    }

    #[allow(clippy::implicit_return)]
    async fn write(&self, content: &str) -> Result<()> {
        let mut file = fs::File::create(&self.path).await?;
        file.write_all(content.as_bytes()).await?;
        return Ok(());
    }
}
