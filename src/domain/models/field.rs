use std::fmt;

use anyhow::Result;
use async_trait::async_trait;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldName {
    File,
    None,
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldName::File => return write!(f, "file"),
            FieldName::None => return write!(f, "none"),
        }
    }
}

#[async_trait]
pub trait Field {
    /// Returns the name of the field implementation.
    fn name(&self) -> FieldName;

    /// Reads the full current content of the code field. `None` means the
    /// field is absent, in which case draft persistence is skipped entirely.
    async fn read(&self) -> Result<Option<String>>;

    /// Replaces the full content of the code field.
    async fn write(&self, content: &str) -> Result<()>;
}

pub type FieldBox = Box<dyn Field + Send + Sync>;
