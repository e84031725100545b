//! TableDrivenProgram - これまでの percept 列全体で table を引く
//!
//! 唯一、寿命とともに際限なく成長する状態（percept 履歴）を持つ戦略です。

use tracing::trace;

use crate::domain::{Action, AgentError, LookupTable, Percept};
use crate::ports::{AgentProgram, ProgramKind};

pub struct TableDrivenProgram<P, A> {
    percepts: Vec<P>,
    table: LookupTable<P, A>,
}

impl<P: Percept, A: Action> TableDrivenProgram<P, A> {
    pub fn new(table: LookupTable<P, A>) -> Self {
        Self {
            percepts: Vec::new(),
            table,
        }
    }

    /// Every percept received so far, in arrival order.
    pub fn history(&self) -> &[P] {
        &self.percepts
    }

    pub fn table(&self) -> &LookupTable<P, A> {
        &self.table
    }
}

impl<P: Percept, A: Action> AgentProgram for TableDrivenProgram<P, A> {
    type Percept = P;
    type Action = A;

    /// Appends `percept` to the history, then looks up the entire history.
    ///
    /// A miss keeps the percept in the history: the sequence is never truncated.
    fn execute(&mut self, percept: P) -> Result<A, AgentError> {
        self.percepts.push(percept);
        trace!(len = self.percepts.len(), "percept appended");
        self.table
            .lookup(&self.percepts)
            .cloned()
            .ok_or_else(|| AgentError::unresolved_lookup(&self.percepts))
    }

    fn kind(&self) -> ProgramKind {
        ProgramKind::TableDriven
    }
}
