use serde::{Deserialize, Serialize};

/// URL conventions of the job site the router watches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    /// Tag written into the `company` field of dispatched messages.
    pub source: String,
    pub search_pattern: String,
    pub collections_pattern: String,
    pub view_pattern: String,
    /// Path segment preceding the job id on view pages.
    pub view_segment: String,
    /// Query parameter carrying the job id on listing pages.
    pub id_param: String,
}

impl SiteProfile {
    pub fn linkedin() -> Self {
        Self {
            source: "LINKEDIN".to_string(),
            search_pattern: "linkedin.com/jobs/search".to_string(),
            collections_pattern: "linkedin.com/jobs/collections/".to_string(),
            view_pattern: "linkedin.com/jobs/view/".to_string(),
            view_segment: "view".to_string(),
            id_param: "currentJobId".to_string(),
        }
    }
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self::linkedin()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Search,
    Collections,
    View,
}
