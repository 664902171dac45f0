use url::form_urlencoded;

use crate::{JobId, PageKind, SiteProfile};

/// Classify a url by literal substring containment.
///
/// View pages win over listing pages so that a view url carrying a stray
/// `currentJobId` is still read from its path.
pub fn classify(profile: &SiteProfile, url: &str) -> Option<PageKind> {
    if url.contains(&profile.view_pattern) {
        Some(PageKind::View)
    } else if url.contains(&profile.search_pattern) {
        Some(PageKind::Search)
    } else if url.contains(&profile.collections_pattern) {
        Some(PageKind::Collections)
    } else {
        None
    }
}

pub fn extract_job_id(profile: &SiteProfile, url: &str, kind: PageKind) -> Option<JobId> {
    match kind {
        PageKind::View => job_id_from_path(url, &profile.view_segment),
        PageKind::Search | PageKind::Collections => job_id_from_query(url, &profile.id_param),
    }
}

fn job_id_from_path(url: &str, segment: &str) -> Option<JobId> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let mut parts = path.split('/');
    parts.find(|part| *part == segment)?;
    parts.next().and_then(JobId::new)
}

fn job_id_from_query(url: &str, param: &str) -> Option<JobId> {
    let (_, rest) = url.split_once('?')?;
    let query = rest.split('#').next().unwrap_or(rest);
    form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == param)
        .and_then(|(_, value)| JobId::new(value.into_owned()))
}
