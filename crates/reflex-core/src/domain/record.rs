//! DecisionRecord - 1 cycle で「何を見て、何をしたか」の記録

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::AgentId;
use super::kind::ProgramKind;

/// A single completed decision cycle.
///
/// Records:
/// - What was perceived (percept)
/// - What was decided (action)
/// - Which strategy decided it
///
/// This is the foundation of "explain why" output in episode reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord<P, A> {
    pub agent_id: AgentId,

    /// 1-indexed cycle number within the episode.
    pub cycle: u64,

    pub strategy: ProgramKind,
    pub percept: P,
    pub action: A,
    pub decided_at: DateTime<Utc>,
}

impl<P, A> DecisionRecord<P, A> {
    pub fn new(
        agent_id: AgentId,
        cycle: u64,
        strategy: ProgramKind,
        percept: P,
        action: A,
        decided_at: DateTime<Utc>,
    ) -> Self {
        Self {
            agent_id,
            cycle,
            strategy,
            percept,
            action,
            decided_at,
        }
    }
}
