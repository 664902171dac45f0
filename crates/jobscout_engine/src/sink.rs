use std::sync::mpsc;

use jobscout_core::{DispatchMessage, TabId};

use crate::DeliveryError;

/// Receiving side of dispatches: the scraping agent living in a tab.
#[async_trait::async_trait]
pub trait DispatchSink: Send + Sync {
    async fn deliver(&self, tab_id: TabId, message: &DispatchMessage)
        -> Result<(), DeliveryError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundDispatch {
    pub tab_id: TabId,
    pub message: DispatchMessage,
}

/// Forwards dispatches over a channel; fails once the receiver is gone.
pub struct ChannelDispatchSink {
    tx: mpsc::Sender<OutboundDispatch>,
}

impl ChannelDispatchSink {
    pub fn new(tx: mpsc::Sender<OutboundDispatch>) -> Self {
        Self { tx }
    }
}

#[async_trait::async_trait]
impl DispatchSink for ChannelDispatchSink {
    async fn deliver(
        &self,
        tab_id: TabId,
        message: &DispatchMessage,
    ) -> Result<(), DeliveryError> {
        self.tx
            .send(OutboundDispatch {
                tab_id,
                message: message.clone(),
            })
            .map_err(|_| DeliveryError::NoReceiver(tab_id))
    }
}
