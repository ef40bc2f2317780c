/**
 * Real-time Subscription Handler
 *
 * This module implements the Server-Sent Events (SSE) subscription
 * handler for the `/api/events` endpoint. Every task mutation published
 * on the broadcast channel is pushed to each open stream.
 *
 * # Server-Sent Events
 *
 * SSE gives a one-way server-to-client stream, which is all the task
 * board needs: mutations travel client-to-server over plain HTTP and
 * only their effects fan out. Each broadcast event becomes one frame:
 *
 * ```text
 * id: <sequence number>
 * event: created | updated | deleted
 * data: <payload JSON>
 * ```
 *
 * # Connection Management
 *
 * - Axum's keep-alive mechanism injects comment lines to hold the
 *   connection open between events.
 * - The session is registered in the `SessionRegistry` for the lifetime
 *   of the stream; the guard deregisters when the client disconnects.
 * - A lagged receiver logs and keeps listening. The skipped events show
 *   up as a sequence gap, which the client answers with a full re-fetch.
 */
use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures_util::stream;
use futures_util::Stream;
use tokio::sync::broadcast::error::RecvError;

use crate::backend::realtime::broadcast::TaskEventPublisher;
use crate::backend::realtime::registry::SessionRegistry;

/// Handle a broadcast subscription (GET /api/events)
///
/// Subscribes the caller to all task mutation events published from this
/// point on. Events that occurred before the connection are not
/// replayed; clients perform a full List on every connect.
pub async fn handle_event_subscription(
    State(publisher): State<TaskEventPublisher>,
    State(sessions): State<SessionRegistry>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let rx = publisher.subscribe();
    let guard = sessions.register();

    tracing::info!("[Realtime] Subscription active for session {}", guard.id());

    // The guard rides along in the stream state so the session stays
    // registered until the stream itself is dropped.
    let stream = stream::unfold((rx, guard), move |(mut rx, guard)| async move {
        loop {
            match rx.recv().await {
                Ok(sequenced) => {
                    let data = match sequenced.event.payload_json() {
                        Ok(data) => data,
                        Err(e) => {
                            tracing::error!("[Realtime] Failed to serialize event: {:?}", e);
                            continue;
                        }
                    };

                    let sse_event = Event::default()
                        .id(sequenced.seq.to_string())
                        .event(sequenced.event.event_name())
                        .data(data);

                    return Some((Ok(sse_event), (rx, guard)));
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(
                        "[Realtime] Session {} lagged, skipped {} events",
                        guard.id(),
                        skipped
                    );
                    continue;
                }
                Err(RecvError::Closed) => {
                    tracing::warn!("[Realtime] Broadcast channel closed, ending stream");
                    return None;
                }
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
