use jobscout_core::{classify, extract_job_id, JobId, PageKind, SiteProfile};
use pretty_assertions::assert_eq;

fn extract(url: &str) -> Option<String> {
    let profile = SiteProfile::linkedin();
    let kind = classify(&profile, url)?;
    extract_job_id(&profile, url, kind).map(|id| id.as_str().to_string())
}

#[test]
fn classifies_the_three_page_shapes() {
    let profile = SiteProfile::linkedin();
    assert_eq!(
        classify(&profile, "https://www.linkedin.com/jobs/search/?keywords=rust"),
        Some(PageKind::Search)
    );
    assert_eq!(
        classify(&profile, "https://www.linkedin.com/jobs/collections/recommended/?currentJobId=1"),
        Some(PageKind::Collections)
    );
    assert_eq!(
        classify(&profile, "https://www.linkedin.com/jobs/view/3947281/"),
        Some(PageKind::View)
    );
    assert_eq!(classify(&profile, "https://www.linkedin.com/feed/"), None);
    assert_eq!(classify(&profile, "https://example.com/jobs/view/1/"), None);
}

#[test]
fn view_page_yields_segment_after_view() {
    assert_eq!(
        extract("https://linkedin.com/jobs/view/3947281/"),
        Some("3947281".to_string())
    );
    assert_eq!(
        extract("https://www.linkedin.com/jobs/view/abc-123"),
        Some("abc-123".to_string())
    );
}

#[test]
fn view_page_ignores_query_and_fragment() {
    assert_eq!(
        extract("https://www.linkedin.com/jobs/view/3947281?trk=public_jobs#top"),
        Some("3947281".to_string())
    );
    assert_eq!(
        extract("https://www.linkedin.com/jobs/view/42/?refId=x%2Fy"),
        Some("42".to_string())
    );
}

#[test]
fn view_page_without_id_segment_is_not_found() {
    assert_eq!(extract("https://linkedin.com/jobs/view/"), None);
    assert_eq!(extract("https://linkedin.com/jobs/view//"), None);
}

#[test]
fn view_kind_on_url_without_view_segment_does_not_panic() {
    let profile = SiteProfile::linkedin();
    let id = extract_job_id(&profile, "https://linkedin.com/jobs/search/?a=b", PageKind::View);
    assert_eq!(id, None);
}

#[test]
fn listing_pages_read_current_job_id_in_any_order() {
    assert_eq!(
        extract("https://www.linkedin.com/jobs/search/?currentJobId=111&keywords=rust"),
        Some("111".to_string())
    );
    assert_eq!(
        extract("https://www.linkedin.com/jobs/search/?keywords=rust&currentJobId=222&geoId=9"),
        Some("222".to_string())
    );
    assert_eq!(
        extract("https://www.linkedin.com/jobs/collections/recommended/?geoId=9&currentJobId=333"),
        Some("333".to_string())
    );
}

#[test]
fn listing_page_decodes_percent_encoding() {
    assert_eq!(
        extract("https://www.linkedin.com/jobs/search?currentJobId=ab%2Dcd&x=1"),
        Some("ab-cd".to_string())
    );
}

#[test]
fn listing_page_without_parameter_is_not_found() {
    assert_eq!(extract("https://www.linkedin.com/jobs/search?foo=bar"), None);
    assert_eq!(extract("https://www.linkedin.com/jobs/search"), None);
    assert_eq!(extract("https://www.linkedin.com/jobs/search?currentJobId="), None);
    assert_eq!(
        extract("https://www.linkedin.com/jobs/collections/top-applicant/#currentJobId=5"),
        None
    );
}

#[test]
fn job_id_rejects_empty_strings() {
    assert_eq!(JobId::new(""), None);
    assert_eq!(JobId::new("7").map(|id| id.to_string()), Some("7".to_string()));
}

#[test]
fn custom_profile_changes_parameter_name() {
    let profile = SiteProfile {
        id_param: "jobId".to_string(),
        ..SiteProfile::linkedin()
    };
    let url = "https://www.linkedin.com/jobs/search?currentJobId=1&jobId=2";
    let kind = classify(&profile, url).unwrap();
    assert_eq!(
        extract_job_id(&profile, url, kind).map(|id| id.to_string()),
        Some("2".to_string())
    );
}
