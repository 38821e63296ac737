use std::env;

use anyhow::Result;

use super::Drafts;

fn temp_store() -> Drafts {
    let cache_dir = env::temp_dir().join(format!("pctrack-drafts-{}", uuid::Uuid::new_v4()));
    return Drafts::new(cache_dir);
}

#[test]
fn it_derives_storage_keys() {
    assert_eq!(Drafts::storage_key("42"), "pc_code_42");
}

#[tokio::test]
async fn it_reads_back_the_last_write() -> Result<()> {
    let drafts = temp_store();

    drafts.save("42", "print(0)").await?;
    drafts.save("42", "print(1)").await?;
    assert_eq!(drafts.load("42").await?, Some("print(1)".to_string()));

    drafts.delete_all().await?;
    return Ok(());
}

#[tokio::test]
async fn it_loads_none_for_missing_drafts() -> Result<()> {
    let drafts = temp_store();
    assert_eq!(drafts.load("42").await?, None);
    return Ok(());
}

#[tokio::test]
async fn it_lists_and_deletes_drafts() -> Result<()> {
    let drafts = temp_store();

    drafts.save("7", "a").await?;
    drafts.save("42", "b").await?;
    assert_eq!(drafts.list().await?, vec!["42".to_string(), "7".to_string()]);

    drafts.delete("7").await?;
    assert_eq!(drafts.list().await?, vec!["42".to_string()]);

    drafts.delete_all().await?;
    assert_eq!(drafts.list().await?, Vec::<String>::new());
    return Ok(());
}
