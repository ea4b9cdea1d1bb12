//! Shared test doubles for the release driver.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::git::{Commit, VersionControl};
use crate::github::{DraftRelease, ReleaseHost};

/// Linear in-memory history where every commit carries a full file snapshot.
#[derive(Default)]
pub(crate) struct InMemoryHistory {
    commits: Vec<(Commit, HashMap<String, String>)>,
}

impl InMemoryHistory {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a commit whose tree contains exactly `files`.
    pub(crate) fn push(&mut self, hash: &str, message: &str, files: &[(&str, &str)]) {
        let files = files
            .iter()
            .map(|(path, content)| ((*path).to_string(), (*content).to_string()))
            .collect();
        self.commits.push((Commit::new(hash, message), files));
    }

    fn position(&self, rev: &str) -> Result<usize> {
        if rev == "HEAD" {
            return self
                .commits
                .len()
                .checked_sub(1)
                .ok_or_else(|| anyhow::anyhow!("empty history"));
        }
        self.commits
            .iter()
            .position(|(commit, _)| commit.hash == rev)
            .ok_or_else(|| anyhow::anyhow!("unknown revision {rev}"))
    }
}

impl VersionControl for InMemoryHistory {
    fn list_commits(&self, from: &str, to: &str) -> Result<Vec<Commit>> {
        let from = self.position(from)?;
        let to = self.position(to)?;
        Ok(self
            .commits
            .get(from..=to)
            .unwrap_or(&[])
            .iter()
            .map(|(commit, _)| commit.clone())
            .collect())
    }

    fn get_file(&self, commitish: &str, path: &str) -> Result<String> {
        let (_, files) = &self.commits[self.position(commitish)?];
        files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("{path} does not exist at {commitish}"))
    }
}

/// Release host that records drafts instead of calling GitHub.
pub(crate) struct RecordingReleaseHost {
    latest: String,
    fail_on: Option<String>,
    submitted: Arc<Mutex<Vec<DraftRelease>>>,
}

impl RecordingReleaseHost {
    /// Creates a host whose latest published release targets `latest`.
    pub(crate) fn new(latest: &str) -> Self {
        Self {
            latest: latest.to_string(),
            fail_on: None,
            submitted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Makes drafting the release tagged `tag` fail.
    pub(crate) fn fail_on(mut self, tag: &str) -> Self {
        self.fail_on = Some(tag.to_string());
        self
    }

    /// Drafts submitted so far, in order.
    pub(crate) fn submitted(&self) -> Vec<DraftRelease> {
        self.submitted.lock().unwrap().clone()
    }
}

impl ReleaseHost for RecordingReleaseHost {
    fn get_latest_release<'a>(
        &'a self,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        let latest = self.latest.clone();
        Box::pin(async move { Ok(latest) })
    }

    fn draft_release<'a>(
        &'a self,
        release: &'a DraftRelease,
    ) -> Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>> {
        Box::pin(async move {
            if self.fail_on.as_deref() == Some(release.tag_name.as_str()) {
                anyhow::bail!("HTTP 500: simulated failure");
            }
            self.submitted.lock().unwrap().push(release.clone());
            Ok(format!("https://example.test/releases/{}", release.tag_name))
        })
    }
}
