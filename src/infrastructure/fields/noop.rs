use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::Field;
use crate::domain::models::FieldName;

/// Stands in when no code file is configured. Reads as an absent field so
/// draft persistence is skipped without erroring.
#[derive(Default)]
pub struct NoopField {}

#[async_trait]
impl Field for NoopField {
    fn name(&self) -> FieldName {
        return FieldName::None;
    }

    #[allow(clippy::implicit_return)]
    async fn read(&self) -> Result<Option<String>> {
        return Ok(None);
    }

    #[allow(clippy::implicit_return)]
    async fn write(&self, _content: &str) -> Result<()> {
        return Ok(());
    }
}
