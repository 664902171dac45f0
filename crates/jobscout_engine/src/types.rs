use std::fmt;
use std::io;

use jobscout_core::{IgnoreReason, JobId, StoreResponse, TabId};
use thiserror::Error;

/// Caller-chosen tag correlating a store response with its request.
pub type RequestId = u64;

/// Observable result of routing one navigation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Ignored(IgnoreReason),
    MissingIdentifier,
    Dispatched { job_id: JobId },
    DeliveryFailed { job_id: JobId, error: DeliveryError },
}

impl RouteOutcome {
    pub fn dispatched(&self) -> bool {
        matches!(self, RouteOutcome::Dispatched { .. })
    }
}

impl fmt::Display for RouteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteOutcome::Ignored(IgnoreReason::UnmatchedUrl) => write!(f, "ignored (unmatched url)"),
            RouteOutcome::Ignored(IgnoreReason::NotComplete) => write!(f, "ignored (not complete)"),
            RouteOutcome::MissingIdentifier => write!(f, "no job id found"),
            RouteOutcome::Dispatched { job_id } => write!(f, "dispatched job {job_id}"),
            RouteOutcome::DeliveryFailed { job_id, error } => {
                write!(f, "delivery of job {job_id} failed: {error}")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    Routed { tab_id: TabId, outcome: RouteOutcome },
    Responded {
        request_id: RequestId,
        response: StoreResponse,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    #[error("no receiving end in tab {0}")]
    NoReceiver(TabId),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] io::Error),
    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start runtime: {0}")]
    Runtime(io::Error),
    #[error("failed to spawn engine thread: {0}")]
    Thread(io::Error),
}
