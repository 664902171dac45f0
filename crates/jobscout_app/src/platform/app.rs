use std::io::{self, BufRead, BufReader, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use jobscout_engine::{
    ChannelDispatchSink, EngineEvent, EngineHandle, JsonFileStore, KeyValueStore, MemoryStore,
    NavigationRouter, OutboundDispatch, StoreProxy,
};
use jobscout_logging::{scout_debug, scout_error, scout_info, scout_warn};

use super::config::{config_path, load_config, AppConfig, StoreConfig};
use super::host::{parse_line, write_output, HostInput, HostOutput};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run_app() -> anyhow::Result<()> {
    let path = config_path();
    let config = load_config(&path).with_context(|| format!("loading {:?}", path))?;
    jobscout_logging::initialize(
        config.log_destination,
        config.level_filter()?,
        &config.log_dir,
    );
    scout_info!("jobscout host bridge starting (config {:?})", path);

    let (dispatch_tx, dispatch_rx) = mpsc::channel();
    let router = NavigationRouter::new(
        config.profile.clone(),
        Arc::new(ChannelDispatchSink::new(dispatch_tx)),
    );
    let proxy = StoreProxy::new(open_store(&config)?);
    let engine = EngineHandle::new(router, proxy)?;

    let stdin = BufReader::new(io::stdin());
    let stdout = io::stdout();
    let stats = run_bridge(engine, dispatch_rx, stdin, &mut stdout.lock())?;
    scout_info!(
        "jobscout host bridge stopped: {} inputs, {} outputs, {} rejected lines",
        stats.inputs,
        stats.outputs,
        stats.rejected
    );
    Ok(())
}

fn open_store(config: &AppConfig) -> anyhow::Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match &config.store {
        StoreConfig::Memory => Arc::new(MemoryStore::new()),
        StoreConfig::JsonFile { path } => Arc::new(
            JsonFileStore::open(path).with_context(|| format!("opening store {:?}", path))?,
        ),
    };
    Ok(store)
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BridgeStats {
    pub inputs: usize,
    pub outputs: usize,
    pub rejected: usize,
}

/// Pumps host input into the engine and engine results back out until the
/// input ends or output fails, then drains outstanding work.
///
/// The reader thread is detached: it may stay blocked on input that never
/// arrives after the bridge has returned.
pub(crate) fn run_bridge<R, W>(
    engine: EngineHandle,
    dispatches: mpsc::Receiver<OutboundDispatch>,
    input: R,
    output: &mut W,
) -> anyhow::Result<BridgeStats>
where
    R: BufRead + Send + 'static,
    W: Write,
{
    let mut stats = BridgeStats::default();
    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in input.lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    scout_error!("Failed to read host input: {}", err);
                    break;
                }
            }
        }
    });

    let mut write_error = None;
    loop {
        match line_rx.recv_timeout(POLL_INTERVAL) {
            Ok(line) => match parse_line(&line) {
                Ok(Some(message)) => {
                    stats.inputs += 1;
                    forward(&engine, message);
                }
                Ok(None) => {}
                Err(err) => {
                    stats.rejected += 1;
                    scout_warn!("Skipping undecodable host line: {}", err);
                }
            },
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
        if let Err(err) = emit_pending(&engine, &dispatches, output, &mut stats) {
            write_error = Some(err);
            break;
        }
    }

    scout_debug!("Host bridge loop ended; draining engine");
    let remaining = engine.shutdown();
    if let Some(err) = write_error {
        scout_error!(
            "Host output failed; {} engine events left unsent: {}",
            remaining.len(),
            err
        );
        return Err(anyhow::Error::new(err).context("writing host output"));
    }
    for event in remaining {
        emit_event(output, event, &mut stats)?;
    }
    emit_dispatches(output, &dispatches, &mut stats)?;
    Ok(stats)
}

fn emit_pending<W: Write>(
    engine: &EngineHandle,
    dispatches: &mpsc::Receiver<OutboundDispatch>,
    output: &mut W,
    stats: &mut BridgeStats,
) -> io::Result<()> {
    while let Some(event) = engine.try_recv() {
        emit_event(output, event, stats)?;
    }
    emit_dispatches(output, dispatches, stats)
}

fn forward(engine: &EngineHandle, message: HostInput) {
    match message {
        HostInput::TabUpdated(update) => {
            if let Some(event) = update.into_navigation_event() {
                engine.navigate(event);
            }
        }
        HostInput::Message {
            request_id,
            payload,
        } => engine.request(request_id, payload),
    }
}

fn emit_event<W: Write>(
    output: &mut W,
    event: EngineEvent,
    stats: &mut BridgeStats,
) -> io::Result<()> {
    match event {
        EngineEvent::Routed { tab_id, outcome } => {
            scout_debug!("Navigation in tab {}: {}", tab_id, outcome);
            Ok(())
        }
        EngineEvent::Responded {
            request_id,
            response,
        } => {
            stats.outputs += 1;
            write_output(
                output,
                &HostOutput::Response {
                    request_id,
                    response,
                },
            )
        }
    }
}

fn emit_dispatches<W: Write>(
    output: &mut W,
    dispatches: &mpsc::Receiver<OutboundDispatch>,
    stats: &mut BridgeStats,
) -> io::Result<()> {
    for dispatch in dispatches.try_iter() {
        stats.outputs += 1;
        write_output(output, &dispatch.into())?;
    }
    Ok(())
}
