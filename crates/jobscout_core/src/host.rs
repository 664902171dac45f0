//! Wire shapes of the host's tab-lifecycle notifications.
use serde::{Deserialize, Serialize};

use crate::{LoadState, NavigationEvent, TabId};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChangeInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TabInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// `{tabId, changeInfo: {status}, tab: {url}}` as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabUpdate {
    pub tab_id: TabId,
    #[serde(default)]
    pub change_info: ChangeInfo,
    #[serde(default)]
    pub tab: TabInfo,
}

impl TabUpdate {
    /// Returns `None` when the host did not report a url for the tab.
    pub fn into_navigation_event(self) -> Option<NavigationEvent> {
        let load_state = LoadState::from_status(self.change_info.status.as_deref());
        let url = self.tab.url.filter(|url| !url.is_empty())?;
        Some(NavigationEvent::new(self.tab_id, url, load_state))
    }
}
