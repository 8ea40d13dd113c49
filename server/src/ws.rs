//! WebSocket push of view-model snapshots.
//!
//! Clients connect to `/ws` and receive the current status and ledger
//! snapshots immediately, then a fresh snapshot on every applied update.
//! There is no client-side subscription protocol; the stream carries
//! everything.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use stakeview_client::{ContractGateway, PriceSource};
use stakeview_ledger::EventFilter;

use crate::state::Dashboard;

/// Upgrade an HTTP request to the snapshot push stream.
pub async fn ws_handler<G, P>(
    ws: WebSocketUpgrade,
    State(state): State<Arc<Dashboard<G, P>>>,
) -> impl IntoResponse
where
    G: ContractGateway + 'static,
    P: PriceSource + 'static,
{
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket<G, P>(socket: WebSocket, state: Arc<Dashboard<G, P>>)
where
    G: ContractGateway,
    P: PriceSource,
{
    let (mut sender, mut receiver) = socket.split();
    let mut updates = state.subscribe_updates();

    debug!("websocket client connected");

    // Initial snapshots so the client renders without waiting for a block.
    let status = state.status_snapshot().await;
    let events = state.events_snapshot(EventFilter::All).await;
    for (kind, payload) in [
        ("status", serde_json::to_string(&status)),
        ("ledger", serde_json::to_string(&events)),
    ] {
        let Ok(data) = payload else { continue };
        let framed = format!("{{\"type\":\"{kind}\",\"data\":{data}}}");
        if sender.send(Message::Text(framed)).await.is_err() {
            return;
        }
    }

    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Ok(payload) => {
                    if sender.send(Message::Text(payload)).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("websocket client lagged behind by {n} updates");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(Message::Ping(data))) => {
                    if sender.send(Message::Pong(data)).await.is_err() {
                        break;
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!("websocket receive error: {e}");
                    break;
                }
            },
        }
    }

    debug!("websocket client disconnected");
}
