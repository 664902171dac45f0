//! JSON-lines protocol spoken with the browser side.
use std::io::{self, Write};

use jobscout_core::{DispatchMessage, StoreResponse, TabId, TabUpdate};
use jobscout_engine::{OutboundDispatch, RequestId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub(crate) enum HostInput {
    TabUpdated(TabUpdate),
    Message {
        #[serde(rename = "requestId")]
        request_id: RequestId,
        /// Missing payloads still get a (failed) response.
        #[serde(default)]
        payload: Value,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub(crate) enum HostOutput {
    SendMessage {
        #[serde(rename = "tabId")]
        tab_id: TabId,
        message: DispatchMessage,
    },
    Response {
        #[serde(rename = "requestId")]
        request_id: RequestId,
        response: StoreResponse,
    },
}

impl From<OutboundDispatch> for HostOutput {
    fn from(dispatch: OutboundDispatch) -> Self {
        HostOutput::SendMessage {
            tab_id: dispatch.tab_id,
            message: dispatch.message,
        }
    }
}

/// Parses one input line; blank lines yield `Ok(None)`.
pub(crate) fn parse_line(line: &str) -> Result<Option<HostInput>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}

pub(crate) fn write_output<W: Write>(out: &mut W, output: &HostOutput) -> io::Result<()> {
    serde_json::to_writer(&mut *out, output)?;
    out.write_all(b"\n")?;
    out.flush()
}
