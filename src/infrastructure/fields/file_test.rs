use std::env;
use std::path;

use anyhow::Result;

use super::FileField;
use crate::domain::models::Field;

fn temp_path() -> path::PathBuf {
    return env::temp_dir().join(format!("pctrack-field-{}.py", uuid::Uuid::new_v4()));
}

#[tokio::test]
async fn it_reads_none_when_the_file_is_missing() -> Result<()> {
    let field = FileField::new(temp_path());
    assert_eq!(field.read().await?, None);
    return Ok(());
}

#[tokio::test]
async fn it_writes_and_reads_back_content() -> Result<()> {
    let file_path = temp_path();
    let field = FileField::new(file_path.clone());

    field.write("x = 1\n").await?;
    assert_eq!(field.read().await?, Some("x = 1\n".to_string()));

    tokio::fs::remove_file(file_path).await?;
    return Ok(());
}
