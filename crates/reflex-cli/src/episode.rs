//! Episode runner: environment → percept → agent → action → environment.

use reflex_core::app::Agent;
use reflex_core::domain::{Action, AgentId, DecisionRecord, EpisodeId, Percept};
use reflex_core::ports::{Clock, Environment, ProgramKind};
use serde::Serialize;
use tracing::{debug, info};

/// Result of running one agent against one environment.
#[derive(Debug, Clone, Serialize)]
pub struct EpisodeReport<P, A> {
    pub episode_id: EpisodeId,
    pub agent_id: AgentId,
    pub strategy: ProgramKind,

    /// Performance summed after every completed cycle.
    pub score: i64,

    pub records: Vec<DecisionRecord<P, A>>,

    /// Set when a cycle could not resolve an action; the episode stops there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<P, A> EpisodeReport<P, A> {
    pub fn completed(&self) -> bool {
        self.error.is_none()
    }
}

/// Run `agent` for at most `steps` cycles, stopping early on the first
/// unresolved cycle. Records carry `agent_id`.
pub fn run_episode<E>(
    episode_id: EpisodeId,
    agent_id: AgentId,
    env: &mut E,
    agent: &mut Agent<E::Percept, E::Action>,
    steps: u64,
    clock: &dyn Clock,
) -> EpisodeReport<E::Percept, E::Action>
where
    E: Environment,
    E::Percept: Percept,
    E::Action: Action,
{
    let mut report = EpisodeReport {
        episode_id,
        agent_id,
        strategy: agent.kind(),
        score: 0,
        records: Vec::new(),
        error: None,
    };

    for cycle in 1..=steps {
        let percept = env.percept();
        match agent.execute(percept.clone()) {
            Ok(action) => {
                env.apply(&action);
                report.score += env.performance();
                report.records.push(DecisionRecord::new(
                    report.agent_id,
                    cycle,
                    report.strategy,
                    percept,
                    action,
                    clock.now(),
                ));
            }
            Err(err) => {
                debug!(%episode_id, cycle, "episode stopped");
                report.error = Some(err.to_string());
                break;
            }
        }
    }

    info!(
        %episode_id,
        strategy = %report.strategy,
        cycles = report.records.len(),
        score = report.score,
        "episode finished"
    );
    report
}
