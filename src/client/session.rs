/**
 * Client Session Manager
 *
 * Maintains the persistent broadcast connection to the server. A spawned
 * task owns the SSE stream and feeds decoded updates through a channel;
 * the consumer (typically a `TaskView` owner) never touches the socket.
 *
 * # Lifecycle
 *
 * - On connect (and every reconnect) a `ResyncRequired` update is
 *   emitted: the stream carries no replay, so the consumer must refetch
 *   the full list before trusting incremental events again.
 * - On stream loss the manager reconnects with capped exponential
 *   backoff; the delay resets after a successful connection.
 * - Each frame carries the server's sequence number in the SSE `id:`
 *   field. A gap between consecutive numbers means events were dropped
 *   (channel lag on the server side), which also triggers
 *   `ResyncRequired`.
 */
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::ACCEPT;
use reqwest::Client;
use tokio::sync::mpsc;

use crate::shared::event::TaskEvent;

/// State of the broadcast connection, reported to the consumer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// No connection; a retry is pending
    Disconnected,
    /// A connection attempt is in flight
    Connecting,
    /// The event stream is live
    Connected,
}

/// Updates delivered to the session consumer
#[derive(Debug, Clone, PartialEq)]
pub enum SessionUpdate {
    /// The connection changed state
    StateChanged(ConnectionState),
    /// A decoded broadcast event
    Event(TaskEvent),
    /// The local view may be stale; refetch the full list
    ResyncRequired,
}

/// Settings for the session manager
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// URL of the SSE subscription endpoint
    pub events_url: String,
    /// First reconnect delay
    pub initial_backoff: Duration,
    /// Reconnect delay ceiling
    pub max_backoff: Duration,
}

impl SessionConfig {
    /// Default backoff: 500ms doubling up to 30s
    pub fn new(events_url: impl Into<String>) -> Self {
        Self {
            events_url: events_url.into(),
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(30),
        }
    }
}

/// Handle to a running session task
pub struct SessionHandle {
    updates: mpsc::UnboundedReceiver<SessionUpdate>,
    task: tokio::task::JoinHandle<()>,
}

impl SessionHandle {
    /// Receive the next update; `None` once the session task has exited
    pub async fn recv(&mut self) -> Option<SessionUpdate> {
        self.updates.recv().await
    }

    /// Stop the session task and drop the connection
    pub fn shutdown(self) {
        self.task.abort();
    }
}

/// Spawn the session manager; it runs until the handle is shut down or
/// the receiving side is dropped
pub fn spawn_session(client: Client, config: SessionConfig) -> SessionHandle {
    let (tx, updates) = mpsc::unbounded_channel();
    let task = tokio::spawn(run_session(client, config, tx));
    SessionHandle { updates, task }
}

async fn run_session(
    client: Client,
    config: SessionConfig,
    tx: mpsc::UnboundedSender<SessionUpdate>,
) {
    let mut backoff = config.initial_backoff;
    let mut last_seq: Option<u64> = None;

    loop {
        if tx
            .send(SessionUpdate::StateChanged(ConnectionState::Connecting))
            .is_err()
        {
            return;
        }

        match connect(&client, &config.events_url).await {
            Ok(response) => {
                tracing::info!("[Session] Connected to {}", config.events_url);
                backoff = config.initial_backoff;
                if tx
                    .send(SessionUpdate::StateChanged(ConnectionState::Connected))
                    .is_err()
                {
                    return;
                }
                // No replay on the stream: anything missed while
                // disconnected is only recoverable via a full refetch.
                if tx.send(SessionUpdate::ResyncRequired).is_err() {
                    return;
                }

                if !read_stream(response, &tx, &mut last_seq).await {
                    return;
                }
                tracing::warn!("[Session] Event stream ended, reconnecting");
            }
            Err(e) => {
                tracing::warn!("[Session] Connection failed: {}", e);
            }
        }

        if tx
            .send(SessionUpdate::StateChanged(ConnectionState::Disconnected))
            .is_err()
        {
            return;
        }

        tokio::time::sleep(backoff).await;
        backoff = (backoff * 2).min(config.max_backoff);
    }
}

async fn connect(client: &Client, url: &str) -> Result<reqwest::Response, reqwest::Error> {
    let response = client
        .get(url)
        .header(ACCEPT, "text/event-stream")
        .send()
        .await?;
    response.error_for_status()
}

/// Pump the byte stream through the SSE parser until it ends
///
/// Returns `false` when the consumer went away and the session should
/// stop entirely.
async fn read_stream(
    response: reqwest::Response,
    tx: &mpsc::UnboundedSender<SessionUpdate>,
    last_seq: &mut Option<u64>,
) -> bool {
    let mut parser = SseParser::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = match chunk {
            Ok(chunk) => chunk,
            Err(e) => {
                tracing::warn!("[Session] Stream error: {}", e);
                return true;
            }
        };
        for frame in parser.push(&chunk) {
            if !handle_frame(frame, tx, last_seq) {
                return false;
            }
        }
    }

    true
}

/// Decode one SSE frame into session updates
///
/// Returns `false` when the consumer dropped its receiver.
fn handle_frame(
    frame: SseFrame,
    tx: &mpsc::UnboundedSender<SessionUpdate>,
    last_seq: &mut Option<u64>,
) -> bool {
    let event_name = match frame.event {
        Some(name) => name,
        // Frames without an event name are not broadcast events
        None => return true,
    };

    if let Some(seq) = frame.id.as_deref().and_then(|id| id.parse::<u64>().ok()) {
        if let Some(last) = *last_seq {
            if seq != last + 1 {
                tracing::warn!(
                    "[Session] Sequence gap: expected {}, got {}",
                    last + 1,
                    seq
                );
                if tx.send(SessionUpdate::ResyncRequired).is_err() {
                    return false;
                }
            }
        }
        *last_seq = Some(seq);
    }

    match TaskEvent::from_wire(&event_name, &frame.data) {
        Ok(event) => tx.send(SessionUpdate::Event(event)).is_ok(),
        Err(e) => {
            // Unknown or malformed events are skipped, not fatal
            tracing::warn!("[Session] Ignoring event '{}': {}", event_name, e);
            true
        }
    }
}

/// One dispatched SSE frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseFrame {
    /// The `id:` field, if present
    pub id: Option<String>,
    /// The `event:` field, if present
    pub event: Option<String>,
    /// All `data:` lines joined with `\n`
    pub data: String,
}

/// Incremental Server-Sent Events parser
///
/// Fed raw byte chunks in whatever sizes the transport delivers; emits a
/// frame per blank-line dispatch. Comment lines (leading `:`, used by
/// the server as keep-alives) are ignored.
#[derive(Default)]
pub struct SseParser {
    buffer: Vec<u8>,
    id: Option<String>,
    event: Option<String>,
    data: Vec<String>,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a chunk, returning every frame it completed
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseFrame> {
        self.buffer.extend_from_slice(chunk);

        let mut frames = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let raw: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&raw);
            let line = line.trim_end_matches(['\n', '\r']);

            if line.is_empty() {
                if let Some(frame) = self.dispatch() {
                    frames.push(frame);
                }
            } else {
                self.field(line);
            }
        }
        frames
    }

    fn field(&mut self, line: &str) {
        // Comment lines carry no fields
        if line.starts_with(':') {
            return;
        }

        let (name, value) = match line.split_once(':') {
            Some((name, value)) => (name, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match name {
            "id" => self.id = Some(value.to_string()),
            "event" => self.event = Some(value.to_string()),
            "data" => self.data.push(value.to_string()),
            _ => {}
        }
    }

    fn dispatch(&mut self) -> Option<SseFrame> {
        let id = self.id.take();
        let event = self.event.take();
        let data = std::mem::take(&mut self.data);

        if id.is_none() && event.is_none() && data.is_empty() {
            return None;
        }

        Some(SseFrame {
            id,
            event,
            data: data.join("\n"),
        })
    }
}
