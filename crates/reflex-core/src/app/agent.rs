//! Agent - 1 つの AgentProgram を生涯保持し、execute をそのまま転送する

use tracing::debug_span;

use super::dispatch;
use crate::domain::{Action, AgentError, Percept};
use crate::ports::{AgentProgram, ProgramKind};

/// Agent owns exactly one program and forwards decisions to it unchanged.
///
/// It holds no data of its own. The program is type-erased so agents with
/// different strategies but the same percept/action vocabulary share one type.
/// Callers that need to tell agents apart (episode reports) keep an
/// [`AgentId`](crate::domain::AgentId) next to it.
pub struct Agent<P: Percept, A: Action> {
    program: Box<dyn AgentProgram<Percept = P, Action = A>>,
}

impl<P: Percept, A: Action> Agent<P, A> {
    pub fn new(program: impl AgentProgram<Percept = P, Action = A> + 'static) -> Self {
        Self {
            program: Box::new(program),
        }
    }

    pub fn kind(&self) -> ProgramKind {
        self.program.kind()
    }

    /// Forward one percept to the program and return its result as-is.
    pub fn execute(&mut self, percept: P) -> Result<A, AgentError> {
        let _span = debug_span!("agent", kind = %self.program.kind()).entered();
        dispatch::execute(self.program.as_mut(), percept)
    }
}

impl<P: Percept, A: Action> std::fmt::Debug for Agent<P, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("kind", &self.program.kind())
            .finish()
    }
}
