#[cfg(test)]
#[path = "drafts_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use tokio::fs;
use tokio::io::AsyncWriteExt;

const STORAGE_KEY_PREFIX: &str = "pc_code_";

/// Local draft store, one plain text file per problem. The file name doubles
/// as the storage key, drafts hold the raw field content with no schema and
/// no history. Last write wins.
pub struct Drafts {
    pub cache_dir: path::PathBuf,
}

impl Default for Drafts {
    fn default() -> Drafts {
        let cache_dir = dirs::cache_dir().unwrap().join("pctrack/drafts");

        return Drafts::new(cache_dir);
    }
}

impl Drafts {
    pub fn new(cache_dir: path::PathBuf) -> Drafts {
        return Drafts { cache_dir };
    }

    pub fn storage_key(problem_id: &str) -> String {
        return format!("{STORAGE_KEY_PREFIX}{problem_id}");
    }

    fn get_file_path(&self, problem_id: &str) -> path::PathBuf {
        return self.cache_dir.join(Drafts::storage_key(problem_id));
    }

    pub async fn list(&self) -> Result<Vec<String>> {
        let mut problem_ids: Vec<String> = vec![];
        if !self.cache_dir.exists() {
            return Ok(problem_ids);
        }

        let mut dir = fs::read_dir(&self.cache_dir).await?;
        while let Some(file) = dir.next_entry().await? {
            let name = file.file_name().to_string_lossy().to_string();
            if let Some(problem_id) = name.strip_prefix(STORAGE_KEY_PREFIX) {
                problem_ids.push(problem_id.to_string());
            }
        }

        problem_ids.sort();
        return Ok(problem_ids);
    }

    pub async fn load(&self, problem_id: &str) -> Result<Option<String>> {
        let file_path = self.get_file_path(problem_id);
        if !file_path.exists() {
            return Ok(None);
        }

        let draft = fs::read_to_string(file_path).await?;
        return Ok(Some(draft));
    }

    pub async fn save(&self, problem_id: &str, content: &str) -> Result<()> {
        if !self.cache_dir.exists() {
            fs::create_dir_all(&self.cache_dir).await?;
        }

        let mut file = fs::File::create(self.get_file_path(problem_id)).await?;
        file.write_all(content.as_bytes()).await?;

        return Ok(());
    }

    pub async fn delete(&self, problem_id: &str) -> Result<()> {
        let file_path = self.get_file_path(problem_id);
        if !file_path.exists() {
            return Ok(());
        }

        fs::remove_file(file_path).await?;
        return Ok(());
    }

    pub async fn delete_all(&self) -> Result<()> {
        if !self.cache_dir.exists() {
            return Ok(());
        }

        fs::remove_dir_all(&self.cache_dir).await?;
        return Ok(());
    }
}
