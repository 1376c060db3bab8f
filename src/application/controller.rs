//! Page Controller
//!
//! Owns the page state (idle / loading / success / failed) and runs one
//! submission through request building, the service gateway and mapping.
//! At most one submission is in flight; a second submit while loading is
//! rejected instead of racing the first.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;

use super::mapper::SquadResult;
use crate::domain::{SquadForm, SquadView};
use crate::ports::squad_service::{GatewayError, SquadServicePort};
use crate::ports::wire::WireSquadResult;

/// Message shown for every gateway failure
pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate squad";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    #[error("A squad request is already in flight")]
    SubmissionInFlight,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageState {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// Everything the view needs to draw the page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub state: PageState,
    /// Last successful result; kept across later failures
    pub result: Option<SquadResult>,
    pub error: Option<String>,
}

impl PageSnapshot {
    pub fn is_loading(&self) -> bool {
        self.state == PageState::Loading
    }

    pub fn view(&self) -> Option<SquadView> {
        self.result.as_ref().map(SquadResult::view)
    }
}

/// Squad generator page controller
#[derive(Clone)]
pub struct PageController {
    service: Arc<dyn SquadServicePort>,
    page: Arc<RwLock<PageSnapshot>>,
}

impl PageController {
    pub fn new(service: Arc<dyn SquadServicePort>) -> Self {
        Self {
            service,
            page: Arc::new(RwLock::new(PageSnapshot::default())),
        }
    }

    /// Submit the form and wait for the service to settle.
    ///
    /// Returns the state the page settled in. Gateway failures do not surface
    /// here; they move the page to `Failed`.
    pub async fn submit(&self, form: &SquadForm) -> Result<PageState, ControllerError> {
        let constraints = form.build();
        let loading = self.begin_loading().await?;

        tracing::info!(
            "Generating squad - budget: {}m, formation: {}, must-have: {:?}, excluded: {:?}",
            constraints.budget,
            constraints.formation,
            constraints.must_have_player_ids,
            constraints.excluded_player_ids
        );

        let outcome = self.service.submit(&constraints).await;
        let state = self.settle(outcome).await;
        loading.disarm();
        Ok(state)
    }

    async fn begin_loading(&self) -> Result<LoadingGuard, ControllerError> {
        let mut page = self.page.write().await;
        if page.state == PageState::Loading {
            tracing::warn!("Submit ignored - a squad request is already in flight");
            return Err(ControllerError::SubmissionInFlight);
        }
        page.state = PageState::Loading;
        page.error = None;
        Ok(LoadingGuard {
            page: self.page.clone(),
            armed: true,
        })
    }

    async fn settle(&self, outcome: Result<WireSquadResult, GatewayError>) -> PageState {
        let mut page = self.page.write().await;
        match outcome {
            Ok(wire) => {
                let result = SquadResult::from_wire(wire);
                tracing::info!(
                    "Squad generated - {} players, total cost {}m",
                    result.players.len(),
                    result.summary.total_cost
                );
                page.result = Some(result);
                page.state = PageState::Success;
            }
            Err(e) => {
                tracing::error!("Squad generation failed: {}", e);
                page.error = Some(GENERATE_FAILED_MESSAGE.to_string());
                page.state = PageState::Failed;
            }
        }
        page.state
    }

    pub async fn state(&self) -> PageState {
        self.page.read().await.state
    }

    pub async fn snapshot(&self) -> PageSnapshot {
        self.page.read().await.clone()
    }
}

/// Moves the page out of `Loading` when a submission is dropped before it
/// settles (timeout, select, task abort, or a panicking gateway).
struct LoadingGuard {
    page: Arc<RwLock<PageSnapshot>>,
    armed: bool,
}

impl LoadingGuard {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        tracing::warn!("Squad request abandoned before the service responded");

        if let Ok(mut page) = self.page.try_write() {
            abandon(&mut page);
            return;
        }

        // Lock is contended; reset once it frees up
        let page = self.page.clone();
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                abandon(&mut *page.write().await);
            });
        }
    }
}

fn abandon(page: &mut PageSnapshot) {
    if page.state == PageState::Loading {
        page.error = Some(GENERATE_FAILED_MESSAGE.to_string());
        page.state = PageState::Failed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Formation, Position};
    use crate::ports::mocks::ScriptedSquadService;
    use crate::ports::squad_service::MockSquadServicePort;
    use crate::ports::wire::WirePlayer;
    use rust_decimal_macros::dec;
    use std::time::Duration;
    use tokio::sync::Notify;

    fn wire_player(id: u64, position: &str, price: f64) -> WirePlayer {
        WirePlayer {
            player_id: id,
            name: format!("Player {}", id),
            position: position.to_string(),
            team: "T".to_string(),
            price,
            total_points: None,
            form: None,
            value_for_money: None,
            next_fixtures: None,
            injury_status: None,
            chance_of_playing: None,
            ai_score: None,
            recommendation: None,
        }
    }

    fn wire_result(players: Vec<WirePlayer>, analysis: &str) -> WireSquadResult {
        WireSquadResult {
            total_cost: players.iter().map(|p| p.price).sum(),
            selected_players: players,
            projected_points: 100.0,
            ai_analysis: Some(analysis.to_string()),
            position_breakdown: Default::default(),
        }
    }

    fn form() -> SquadForm {
        SquadForm::new(dec!(100), Formation::ThreeFourThree).with_must_have("1, 2")
    }

    #[tokio::test]
    async fn test_starts_idle() {
        let controller = PageController::new(Arc::new(MockSquadServicePort::new()));
        let snapshot = controller.snapshot().await;

        assert_eq!(snapshot.state, PageState::Idle);
        assert!(snapshot.result.is_none());
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn test_success_stores_mapped_result() {
        let mut service = MockSquadServicePort::new();
        service
            .expect_submit()
            .withf(|c| c.budget == dec!(100) && c.must_have_player_ids == vec![1, 2])
            .times(1)
            .returning(|_| Ok(wire_result(vec![wire_player(7, "Midfielder", 8.5)], "Solid")));

        let controller = PageController::new(Arc::new(service));
        let state = controller.submit(&form()).await.unwrap();
        assert_eq!(state, PageState::Success);

        let snapshot = controller.snapshot().await;
        let result = snapshot.result.as_ref().unwrap();
        assert_eq!(result.players.len(), 1);
        assert_eq!(result.players[0].id, 7);
        assert_eq!(result.analysis.as_deref(), Some("Solid"));
        assert!(snapshot.error.is_none());

        let view = snapshot.view().unwrap();
        assert_eq!(view.groups.get(Position::Midfielder).len(), 1);
    }

    #[tokio::test]
    async fn test_failure_sets_generic_message() {
        let mut service = MockSquadServicePort::new();
        service.expect_submit().times(1).returning(|_| {
            Err(GatewayError::Status {
                status: 503,
                body: "maintenance".to_string(),
            })
        });

        let controller = PageController::new(Arc::new(service));
        let state = controller.submit(&form()).await.unwrap();

        let snapshot = controller.snapshot().await;
        assert_eq!(state, PageState::Failed);
        assert_eq!(snapshot.state, PageState::Failed);
        assert_eq!(snapshot.error.as_deref(), Some(GENERATE_FAILED_MESSAGE));
        assert!(snapshot.result.is_none());
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_result() {
        let service = ScriptedSquadService::new()
            .with_result(wire_result(vec![wire_player(7, "Midfielder", 8.5)], "First"))
            .with_error(GatewayError::Transport("connection reset".to_string()));
        let controller = PageController::new(Arc::new(service));

        controller.submit(&form()).await.unwrap();
        let before = controller.snapshot().await.result;

        controller.submit(&form()).await.unwrap();
        let after = controller.snapshot().await;

        assert_eq!(after.state, PageState::Failed);
        assert_eq!(after.error.as_deref(), Some(GENERATE_FAILED_MESSAGE));
        assert_eq!(after.result, before);
    }

    #[tokio::test]
    async fn test_success_after_failure_clears_error_and_replaces_result() {
        let service = ScriptedSquadService::new()
            .with_result(wire_result(vec![wire_player(1, "Forward", 9.0)], "First"))
            .with_error(GatewayError::Decode("bad json".to_string()))
            .with_result(wire_result(vec![wire_player(2, "Defender", 4.0)], "Second"));
        let controller = PageController::new(Arc::new(service));

        controller.submit(&form()).await.unwrap();
        controller.submit(&form()).await.unwrap();
        let state = controller.submit(&form()).await.unwrap();

        let snapshot = controller.snapshot().await;
        assert_eq!(state, PageState::Success);
        assert!(snapshot.error.is_none());
        let result = snapshot.result.unwrap();
        assert_eq!(result.players.len(), 1);
        assert_eq!(result.players[0].id, 2);
        assert_eq!(result.analysis.as_deref(), Some("Second"));
    }

    #[tokio::test]
    async fn test_submit_while_loading_is_rejected() {
        let gate = Arc::new(Notify::new());
        let service = Arc::new(
            ScriptedSquadService::new()
                .with_result(wire_result(vec![], "Only"))
                .with_gate(gate.clone()),
        );
        let controller = PageController::new(service.clone());

        let in_flight = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.submit(&form()).await })
        };

        while service.calls().await.is_empty() {
            tokio::task::yield_now().await;
        }
        assert_eq!(controller.state().await, PageState::Loading);
        assert!(controller.snapshot().await.is_loading());

        let second = controller.submit(&form()).await;
        assert_eq!(second, Err(ControllerError::SubmissionInFlight));

        gate.notify_one();
        let settled = in_flight.await.unwrap().unwrap();
        assert_eq!(settled, PageState::Success);
        assert_eq!(service.calls().await.len(), 1);
    }

    #[tokio::test]
    async fn test_loading_clears_error_but_keeps_result() {
        let gate = Arc::new(Notify::new());
        let service = Arc::new(
            ScriptedSquadService::new()
                .with_result(wire_result(vec![wire_player(7, "Midfielder", 8.5)], "First"))
                .with_error(GatewayError::Transport("refused".to_string()))
                .with_result(wire_result(vec![], "Third"))
                .with_gate(gate.clone()),
        );
        let controller = PageController::new(service.clone());

        gate.notify_one();
        controller.submit(&form()).await.unwrap();
        gate.notify_one();
        controller.submit(&form()).await.unwrap();
        assert_eq!(controller.state().await, PageState::Failed);

        let in_flight = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.submit(&form()).await })
        };
        while service.calls().await.len() < 3 {
            tokio::task::yield_now().await;
        }

        let loading = controller.snapshot().await;
        assert_eq!(loading.state, PageState::Loading);
        assert!(loading.error.is_none());
        assert_eq!(loading.result.unwrap().players[0].id, 7);

        gate.notify_one();
        assert_eq!(in_flight.await.unwrap(), Ok(PageState::Success));
    }

    #[tokio::test]
    async fn test_abandoned_submit_does_not_block_next_submit() {
        let gate = Arc::new(Notify::new());
        let service = Arc::new(
            ScriptedSquadService::new()
                .with_result(wire_result(vec![wire_player(7, "Midfielder", 8.5)], "Second"))
                .with_gate(gate.clone()),
        );
        let controller = PageController::new(service.clone());

        let first = tokio::time::timeout(Duration::from_millis(50), controller.submit(&form())).await;
        assert!(first.is_err());

        let snapshot = controller.snapshot().await;
        assert_eq!(snapshot.state, PageState::Failed);
        assert_eq!(snapshot.error.as_deref(), Some(GENERATE_FAILED_MESSAGE));

        gate.notify_one();
        let second = controller.submit(&form()).await;
        assert_eq!(second, Ok(PageState::Success));
        assert_eq!(service.calls().await.len(), 2);
    }

    #[tokio::test]
    async fn test_aborted_submit_task_releases_loading() {
        let gate = Arc::new(Notify::new());
        let service = Arc::new(
            ScriptedSquadService::new()
                .with_result(wire_result(vec![], "Kept"))
                .with_gate(gate.clone()),
        );
        let controller = PageController::new(service.clone());

        let in_flight = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.submit(&form()).await })
        };
        while service.calls().await.is_empty() {
            tokio::task::yield_now().await;
        }
        assert_eq!(controller.state().await, PageState::Loading);

        in_flight.abort();
        assert!(in_flight.await.unwrap_err().is_cancelled());
        assert_eq!(controller.state().await, PageState::Failed);

        gate.notify_one();
        assert_eq!(controller.submit(&form()).await, Ok(PageState::Success));
    }
}
