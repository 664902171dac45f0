//! Jobscout core: pure routing decisions and wire contracts.
mod extract;
mod host;
mod profile;
mod route;
mod store;
mod types;

pub use extract::{classify, extract_job_id};
pub use host::{ChangeInfo, TabInfo, TabUpdate};
pub use profile::{PageKind, SiteProfile};
pub use route::{route, IgnoreReason, RouteDecision};
pub use store::{
    RequestError, StoreRequest, StoreResponse, CLEARED_MESSAGE, CLEAR_FAILED_MESSAGE,
    MALFORMED_MESSAGE, READ_FAILED_MESSAGE, STORED_MESSAGE, STORE_FAILED_MESSAGE,
};
pub use types::{DispatchKind, DispatchMessage, JobId, LoadState, NavigationEvent, TabId};
