//! Jobscout engine: navigation routing and the store proxy, run on tokio.
mod engine;
mod proxy;
mod router;
mod sink;
mod store;
mod types;

pub use engine::EngineHandle;
pub use proxy::StoreProxy;
pub use router::NavigationRouter;
pub use sink::{ChannelDispatchSink, DispatchSink, OutboundDispatch};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore};
pub use types::{DeliveryError, EngineError, EngineEvent, RequestId, RouteOutcome, StoreError};
