use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use super::squad_service::{GatewayError, SquadServicePort};
use super::wire::WireSquadResult;
use crate::domain::SquadConstraints;

/// Squad service stand-in that replays scripted outcomes in order and
/// records every submission it receives
#[derive(Debug, Default)]
pub struct ScriptedSquadService {
    calls: Mutex<Vec<SquadConstraints>>,
    outcomes: Mutex<VecDeque<Result<WireSquadResult, GatewayError>>>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedSquadService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful response
    pub fn with_result(self, result: WireSquadResult) -> Self {
        self.with_outcome(Ok(result))
    }

    /// Queue a failure
    pub fn with_error(self, error: GatewayError) -> Self {
        self.with_outcome(Err(error))
    }

    fn with_outcome(mut self, outcome: Result<WireSquadResult, GatewayError>) -> Self {
        self.outcomes.get_mut().push_back(outcome);
        self
    }

    /// Hold every response until the gate is notified
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// All recorded submissions
    pub async fn calls(&self) -> Vec<SquadConstraints> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl SquadServicePort for ScriptedSquadService {
    async fn submit(&self, constraints: &SquadConstraints) -> Result<WireSquadResult, GatewayError> {
        self.calls.lock().await.push(constraints.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::Transport("No response scripted".into())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SquadForm;

    fn empty_result() -> WireSquadResult {
        WireSquadResult {
            selected_players: vec![],
            total_cost: 0.0,
            projected_points: 0.0,
            ai_analysis: None,
            position_breakdown: Default::default(),
        }
    }

    #[tokio::test]
    async fn test_replays_outcomes_in_order() {
        let service = ScriptedSquadService::new()
            .with_result(empty_result())
            .with_error(GatewayError::Status { status: 500, body: String::new() });
        let constraints = SquadForm::default().with_must_have("3").build();

        assert!(service.submit(&constraints).await.is_ok());
        assert!(matches!(
            service.submit(&constraints).await,
            Err(GatewayError::Status { status: 500, .. })
        ));
        assert!(matches!(
            service.submit(&constraints).await,
            Err(GatewayError::Transport(_))
        ));

        let calls = service.calls().await;
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].must_have_player_ids, vec![3]);
    }
}
