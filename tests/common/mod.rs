#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use git2::{Oid, Repository, Signature, Time};
use tempfile::TempDir;

/// Temporary git repository with a linear history.
pub struct TestRepo {
    _temp_dir: TempDir,
    pub repo_path: PathBuf,
    repo: Repository,
    pub commits: Vec<Oid>,
}

impl TestRepo {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let repo_path = temp_dir.path().to_path_buf();
        let repo = Repository::init(&repo_path)?;

        let mut config = repo.config()?;
        config.set_str("user.name", "Test User")?;
        config.set_str("user.email", "test@example.com")?;

        Ok(Self {
            _temp_dir: temp_dir,
            repo_path,
            repo,
            commits: Vec::new(),
        })
    }

    /// Writes `files`, commits them with `message`, and returns the hash.
    pub fn commit(&mut self, message: &str, files: &[(&str, &str)]) -> Result<String> {
        let mut index = self.repo.index()?;
        for (path, content) in files {
            let full_path = self.repo_path.join(path);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&full_path, content)?;
            index.add_path(Path::new(path))?;
        }
        index.write()?;

        // Distinct, increasing timestamps keep the walk order deterministic
        let when = Time::new(1_700_000_000 + self.commits.len() as i64 * 60, 0);
        let signature = Signature::new("Test User", "test@example.com", &when)?;
        let tree = self.repo.find_tree(index.write_tree()?)?;

        let parent = match self.commits.last() {
            Some(id) => Some(self.repo.find_commit(*id)?),
            None => None,
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        let id = self
            .repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;
        self.commits.push(id);
        Ok(id.to_string())
    }

    /// Commits a `package.json` at `version` with `message`.
    pub fn bump(&mut self, message: &str, version: &str) -> Result<String> {
        let manifest = format!(
            "{{\n  \"name\": \"google-closure-library\",\n  \"version\": \"{version}\"\n}}\n"
        );
        self.commit(message, &[("package.json", manifest.as_str())])
    }
}
