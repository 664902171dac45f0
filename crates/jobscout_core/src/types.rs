use std::fmt;

use serde::{Deserialize, Serialize};

/// Host handle for a browser tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(pub i64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    #[default]
    Pending,
    Complete,
}

impl LoadState {
    /// Maps a host status string; only `"complete"` counts as complete.
    pub fn from_status(status: Option<&str>) -> Self {
        match status {
            Some("complete") => LoadState::Complete,
            _ => LoadState::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    pub tab_id: TabId,
    pub url: String,
    pub load_state: LoadState,
}

impl NavigationEvent {
    pub fn new(tab_id: TabId, url: impl Into<String>, load_state: LoadState) -> Self {
        Self {
            tab_id,
            url: url.into(),
            load_state,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.load_state == LoadState::Complete
    }
}

/// Site-specific job identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JobId(String);

impl JobId {
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for JobId {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        JobId::new(value).ok_or("job id must not be empty")
    }
}

impl From<JobId> for String {
    fn from(value: JobId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DispatchKind {
    #[serde(rename = "NEW")]
    New,
}

/// Notification sent to the scraping agent of a tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchMessage {
    #[serde(rename = "type")]
    pub kind: DispatchKind,
    #[serde(rename = "company")]
    pub source: String,
    #[serde(rename = "jobId")]
    pub job_id: JobId,
}

impl DispatchMessage {
    pub fn new_job(source: impl Into<String>, job_id: JobId) -> Self {
        Self {
            kind: DispatchKind::New,
            source: source.into(),
            job_id,
        }
    }
}
