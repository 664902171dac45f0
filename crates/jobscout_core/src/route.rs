use crate::extract::{classify, extract_job_id};
use crate::{DispatchMessage, NavigationEvent, SiteProfile, TabId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The url is not one of the watched page shapes.
    UnmatchedUrl,
    /// The tab has not finished loading yet.
    NotComplete,
}

/// What the router should do with a navigation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Ignore(IgnoreReason),
    MissingIdentifier { tab_id: TabId, url: String },
    Dispatch {
        tab_id: TabId,
        message: DispatchMessage,
    },
}

/// Pure routing step: decides, never performs IO.
pub fn route(profile: &SiteProfile, event: &NavigationEvent) -> RouteDecision {
    let Some(kind) = classify(profile, &event.url) else {
        return RouteDecision::Ignore(IgnoreReason::UnmatchedUrl);
    };
    if !event.is_complete() {
        return RouteDecision::Ignore(IgnoreReason::NotComplete);
    }

    match extract_job_id(profile, &event.url, kind) {
        Some(job_id) => RouteDecision::Dispatch {
            tab_id: event.tab_id,
            message: DispatchMessage::new_job(profile.source.clone(), job_id),
        },
        None => RouteDecision::MissingIdentifier {
            tab_id: event.tab_id,
            url: event.url.clone(),
        },
    }
}
