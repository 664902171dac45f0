use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use futures_util::future::join_all;
use jobscout_core::NavigationEvent;
use jobscout_logging::{scout_debug, scout_warn};
use serde_json::Value;

use crate::{EngineError, EngineEvent, NavigationRouter, RequestId, StoreProxy};

enum EngineCommand {
    Navigate(NavigationEvent),
    Request { request_id: RequestId, payload: Value },
}

/// Runs the router and the store proxy on a background tokio runtime.
///
/// Each command becomes an independent task, so events may come back in a
/// different order than the commands went in.
pub struct EngineHandle {
    cmd_tx: Option<mpsc::Sender<EngineCommand>>,
    event_rx: mpsc::Receiver<EngineEvent>,
    worker: Option<thread::JoinHandle<()>>,
}

impl EngineHandle {
    pub fn new(router: NavigationRouter, proxy: StoreProxy) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_time()
            .thread_name("jobscout-worker")
            .build()
            .map_err(EngineError::Runtime)?;
        let router = Arc::new(router);
        let proxy = Arc::new(proxy);

        let worker = thread::Builder::new()
            .name("jobscout-engine".to_string())
            .spawn(move || {
                let mut in_flight = Vec::new();
                while let Ok(command) = cmd_rx.recv() {
                    let router = router.clone();
                    let proxy = proxy.clone();
                    let event_tx = event_tx.clone();
                    in_flight.push(runtime.spawn(async move {
                        handle_command(&router, &proxy, command, event_tx).await;
                    }));
                    in_flight.retain(|task| !task.is_finished());
                }
                // Command side closed: let outstanding work respond before exiting.
                scout_debug!("Engine draining {} in-flight tasks", in_flight.len());
                for result in runtime.block_on(join_all(in_flight)) {
                    if let Err(err) = result {
                        scout_warn!("Engine task ended abnormally: {}", err);
                    }
                }
            })
            .map_err(EngineError::Thread)?;

        Ok(Self {
            cmd_tx: Some(cmd_tx),
            event_rx,
            worker: Some(worker),
        })
    }

    pub fn navigate(&self, event: NavigationEvent) {
        self.send(EngineCommand::Navigate(event));
    }

    pub fn request(&self, request_id: RequestId, payload: Value) {
        self.send(EngineCommand::Request {
            request_id,
            payload,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    /// Stops accepting commands, waits for in-flight work and returns the
    /// events not yet received.
    pub fn shutdown(mut self) -> Vec<EngineEvent> {
        self.cmd_tx.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                scout_warn!("Engine thread panicked during shutdown");
            }
        }
        self.event_rx.try_iter().collect()
    }

    fn send(&self, command: EngineCommand) {
        let delivered = self
            .cmd_tx
            .as_ref()
            .is_some_and(|tx| tx.send(command).is_ok());
        if !delivered {
            scout_warn!("Engine is not running; command dropped");
        }
    }
}

async fn handle_command(
    router: &NavigationRouter,
    proxy: &StoreProxy,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let event = match command {
        EngineCommand::Navigate(event) => {
            let tab_id = event.tab_id;
            let outcome = router.handle(&event).await;
            EngineEvent::Routed { tab_id, outcome }
        }
        EngineCommand::Request {
            request_id,
            payload,
        } => {
            let response = proxy.handle_value(payload).await;
            EngineEvent::Responded {
                request_id,
                response,
            }
        }
    };
    let _ = event_tx.send(event);
}
