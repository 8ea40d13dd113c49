//! Shared dashboard state: the two view-models behind async locks, the
//! gateway, the optional price source, and the live-update broadcast.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{broadcast, Mutex};

use stakeview_client::{ContractGateway, PriceSource, WatchUpdate};
use stakeview_ledger::{EventFilter, LedgerRow, LedgerView};
use stakeview_panel::{PanelSnapshot, StatusPanel};

/// Response body for the events route and the ledger push.
#[derive(Clone, Debug, Serialize)]
pub struct EventsSnapshot {
    pub loading: bool,
    pub filter: EventFilter,
    pub events: Vec<LedgerRow>,
}

/// Everything the routes and the update loop share.
///
/// View-model mutation is serialized behind the mutexes; the update loop
/// and the action routes are the only writers.
pub struct Dashboard<G, P> {
    gateway: Arc<G>,
    price: Option<P>,
    panel: Mutex<StatusPanel>,
    ledger: Mutex<LedgerView>,
    updates_tx: broadcast::Sender<String>,
}

impl<G, P> Dashboard<G, P>
where
    G: ContractGateway,
    P: PriceSource,
{
    pub fn new(gateway: Arc<G>, price: Option<P>, explorer_url: Option<String>) -> Self {
        let (updates_tx, _) = broadcast::channel(256);
        Self {
            gateway,
            price,
            panel: Mutex::new(StatusPanel::new()),
            ledger: Mutex::new(LedgerView::new(explorer_url)),
            updates_tx,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn panel(&self) -> &Mutex<StatusPanel> {
        &self.panel
    }

    /// Subscribe to the live snapshot push.
    pub fn subscribe_updates(&self) -> broadcast::Receiver<String> {
        self.updates_tx.subscribe()
    }

    /// Current price, or `None` when unconfigured or unavailable.
    pub async fn lookup_price(&self) -> Option<f64> {
        match &self.price {
            Some(source) => source.token_price_usd().await,
            None => None,
        }
    }

    /// Apply one watcher update and push the affected snapshot.
    pub async fn apply(&self, update: WatchUpdate) {
        match update {
            WatchUpdate::Reading { field, value } => {
                let snapshot = {
                    let mut panel = self.panel.lock().await;
                    panel.apply_update(field, value);
                    PanelSnapshot::capture(&panel, None)
                };
                self.broadcast("status", &snapshot);
            }
            WatchUpdate::History { event, entries } => {
                let snapshot = {
                    let mut ledger = self.ledger.lock().await;
                    ledger.apply_history(event, entries);
                    EventsSnapshot {
                        loading: ledger.is_loading(),
                        filter: EventFilter::All,
                        events: ledger.rows(EventFilter::All),
                    }
                };
                self.broadcast("ledger", &snapshot);
            }
        }
    }

    /// Panel snapshot with a fresh price lookup.
    pub async fn status_snapshot(&self) -> PanelSnapshot {
        let price = self.lookup_price().await;
        let panel = self.panel.lock().await;
        PanelSnapshot::capture(&panel, price)
    }

    /// Ledger snapshot for one filter selection.
    pub async fn events_snapshot(&self, filter: EventFilter) -> EventsSnapshot {
        let ledger = self.ledger.lock().await;
        EventsSnapshot {
            loading: ledger.is_loading(),
            filter,
            events: ledger.rows(filter),
        }
    }

    /// Push a current panel snapshot to WebSocket subscribers.
    pub async fn push_status(&self) {
        let panel = self.panel.lock().await;
        let snapshot = PanelSnapshot::capture(&panel, None);
        drop(panel);
        self.broadcast("status", &snapshot);
    }

    fn broadcast<T: Serialize>(&self, kind: &str, data: &T) {
        let payload = serde_json::json!({ "type": kind, "data": data });
        // No subscribers is fine; the push is best-effort.
        let _ = self.updates_tx.send(payload.to_string());
    }
}
