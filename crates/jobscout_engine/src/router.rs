use std::sync::Arc;

use jobscout_core::{route, IgnoreReason, NavigationEvent, RouteDecision, SiteProfile};
use jobscout_logging::{scout_debug, scout_error, scout_info, scout_trace};

use crate::{DispatchSink, RouteOutcome};

/// Turns completed navigations on watched pages into dispatches.
pub struct NavigationRouter {
    profile: SiteProfile,
    sink: Arc<dyn DispatchSink>,
}

impl NavigationRouter {
    pub fn new(profile: SiteProfile, sink: Arc<dyn DispatchSink>) -> Self {
        Self { profile, sink }
    }

    /// Delivers at most one dispatch per event. Delivery is not retried.
    pub async fn handle(&self, event: &NavigationEvent) -> RouteOutcome {
        match route(&self.profile, event) {
            RouteDecision::Ignore(reason) => {
                if reason == IgnoreReason::NotComplete {
                    scout_trace!(
                        "Watched page still loading tab_id={} url={}",
                        event.tab_id,
                        event.url
                    );
                }
                RouteOutcome::Ignored(reason)
            }
            RouteDecision::MissingIdentifier { tab_id, url } => {
                scout_error!("No job id found in url tab_id={} url={}", tab_id, url);
                RouteOutcome::MissingIdentifier
            }
            RouteDecision::Dispatch { tab_id, message } => {
                let job_id = message.job_id.clone();
                scout_info!("Job id found tab_id={} job_id={}", tab_id, job_id);
                match self.sink.deliver(tab_id, &message).await {
                    Ok(()) => {
                        scout_debug!("Dispatch delivered tab_id={} job_id={}", tab_id, job_id);
                        RouteOutcome::Dispatched { job_id }
                    }
                    Err(error) => {
                        scout_error!(
                            "Dispatch to tab {} failed for job {}: {}",
                            tab_id,
                            job_id,
                            error
                        );
                        RouteOutcome::DeliveryFailed { job_id, error }
                    }
                }
            }
        }
    }
}
