//! Route handlers and their request/response DTOs.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use stakeview_client::{ContractGateway, PriceSource};
use stakeview_ledger::EventFilter;
use stakeview_panel::{PanelSnapshot, SubmitOutcome};

use crate::error::ServerError;
use crate::state::{Dashboard, EventsSnapshot};

// ── Status ──────────────────────────────────────────────────────────────

pub async fn status<G, P>(State(state): State<Arc<Dashboard<G, P>>>) -> Json<PanelSnapshot>
where
    G: ContractGateway,
    P: PriceSource,
{
    Json(state.status_snapshot().await)
}

// ── Events ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct EventsQuery {
    #[serde(default)]
    pub filter: Option<String>,
}

pub async fn events<G, P>(
    State(state): State<Arc<Dashboard<G, P>>>,
    Query(query): Query<EventsQuery>,
) -> Json<EventsSnapshot>
where
    G: ContractGateway,
    P: PriceSource,
{
    let filter = query
        .filter
        .as_deref()
        .map(EventFilter::parse)
        .unwrap_or_default();
    Json(state.events_snapshot(filter).await)
}

// ── Actions ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct StakeRequest {
    pub amount: String,
}

#[derive(Serialize)]
pub struct ActionResponse {
    pub submitted: bool,
    pub transaction_hash: Option<String>,
}

fn outcome_to_response(outcome: SubmitOutcome) -> Result<Json<ActionResponse>, ServerError> {
    match outcome {
        SubmitOutcome::Confirmed(tx_hash) => Ok(Json(ActionResponse {
            submitted: true,
            transaction_hash: Some(tx_hash.as_str().to_string()),
        })),
        SubmitOutcome::NotSubmitted(reason) => Err(ServerError::InvalidRequest(reason)),
        SubmitOutcome::Failed(reason) => Err(ServerError::Gateway(reason)),
    }
}

pub async fn stake<G, P>(
    State(state): State<Arc<Dashboard<G, P>>>,
    Json(request): Json<StakeRequest>,
) -> Result<Json<ActionResponse>, ServerError>
where
    G: ContractGateway,
    P: PriceSource,
{
    let outcome = {
        let mut panel = state.panel().lock().await;
        if !panel.can_stake() {
            return Err(ServerError::ActionDisabled("stake".to_string()));
        }
        panel.set_stake_input(request.amount);
        panel.submit_stake(state.gateway()).await
    };
    state.push_status().await;
    outcome_to_response(outcome)
}

pub async fn execute<G, P>(
    State(state): State<Arc<Dashboard<G, P>>>,
) -> Result<Json<ActionResponse>, ServerError>
where
    G: ContractGateway,
    P: PriceSource,
{
    let outcome = {
        let mut panel = state.panel().lock().await;
        if !panel.can_execute() {
            return Err(ServerError::ActionDisabled("execute".to_string()));
        }
        panel.submit_execute(state.gateway()).await
    };
    state.push_status().await;
    outcome_to_response(outcome)
}

pub async fn withdraw<G, P>(
    State(state): State<Arc<Dashboard<G, P>>>,
) -> Result<Json<ActionResponse>, ServerError>
where
    G: ContractGateway,
    P: PriceSource,
{
    let outcome = {
        let mut panel = state.panel().lock().await;
        if !panel.can_withdraw() {
            return Err(ServerError::ActionDisabled("withdraw".to_string()));
        }
        panel.submit_withdraw(state.gateway()).await
    };
    state.push_status().await;
    outcome_to_response(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stakeview_client::{ReadingField, WatchUpdate};
    use stakeview_nullables::{NullGateway, NullPriceSource};
    use stakeview_types::ContractValue;

    fn dashboard() -> Arc<Dashboard<NullGateway, NullPriceSource>> {
        Arc::new(Dashboard::new(Arc::new(NullGateway::new()), None, None))
    }

    #[tokio::test]
    async fn test_stake_route_submits_and_reports_hash() {
        let state = dashboard();
        let response = stake(
            State(state.clone()),
            Json(StakeRequest {
                amount: "1.5".to_string(),
            }),
        )
        .await
        .unwrap();

        assert!(response.0.submitted);
        assert!(response.0.transaction_hash.is_some());
        assert_eq!(state.gateway().submissions().len(), 1);
    }

    #[tokio::test]
    async fn test_stake_route_rejected_when_completed() {
        let state = dashboard();
        state
            .apply(WatchUpdate::Reading {
                field: ReadingField::Completed,
                value: ContractValue::Flag(true),
            })
            .await;

        let result = stake(
            State(state.clone()),
            Json(StakeRequest {
                amount: "1".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(ServerError::ActionDisabled(_))));
        assert!(state.gateway().submissions().is_empty());
    }

    #[tokio::test]
    async fn test_execute_route_requires_deadline() {
        let state = dashboard();

        let early = execute(State(state.clone())).await;
        assert!(matches!(early, Err(ServerError::ActionDisabled(_))));

        state
            .apply(WatchUpdate::Reading {
                field: ReadingField::TimeLeft,
                value: ContractValue::Text("0".into()),
            })
            .await;

        let after = execute(State(state.clone())).await.unwrap();
        assert!(after.0.submitted);
        assert_eq!(state.gateway().submissions()[0].function, "execute");
    }

    #[tokio::test]
    async fn test_withdraw_route_enforces_policy() {
        let state = dashboard();
        state
            .apply(WatchUpdate::Reading {
                field: ReadingField::OpenForWithdraw,
                value: ContractValue::Flag(true),
            })
            .await;

        // Open, but the caller has no stake.
        let no_stake = withdraw(State(state.clone())).await;
        assert!(matches!(no_stake, Err(ServerError::ActionDisabled(_))));

        state
            .apply(WatchUpdate::Reading {
                field: ReadingField::MyStake,
                value: ContractValue::Text("1000000000000000000".into()),
            })
            .await;

        let allowed = withdraw(State(state.clone())).await.unwrap();
        assert!(allowed.0.submitted);
    }

    #[tokio::test]
    async fn test_gateway_failure_maps_to_gateway_error() {
        let state = dashboard();
        state.gateway().fail_next_submit("nonce too low");

        let result = stake(
            State(state.clone()),
            Json(StakeRequest {
                amount: "1".to_string(),
            }),
        )
        .await;

        assert!(matches!(result, Err(ServerError::Gateway(_))));
    }

    #[tokio::test]
    async fn test_events_route_filters() {
        let state = dashboard();
        let response = events(
            State(state.clone()),
            Query(EventsQuery {
                filter: Some("stake".to_string()),
            }),
        )
        .await;

        assert_eq!(response.0.filter, EventFilter::Stake);
        assert!(response.0.loading);
    }
}
