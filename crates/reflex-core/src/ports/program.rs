//! AgentProgram port - percept を action に変換する戦略
//!
//! # 設計原則
//! - 呼び出し側は戦略の種類で分岐しない（`execute` だけを呼ぶ）
//! - `execute` にデフォルト実装はない: 具体的な戦略を選ばずに呼ぶことは
//!   コンパイル時に不可能
//! - 1 percept → ちょうど 1 action（または解決できなかったエラー）

use crate::domain::{Action, AgentError, Percept};

pub use crate::domain::ProgramKind;

/// AgentProgram maps one percept to one action.
///
/// `&mut self` because some strategies accumulate (percept history, carried
/// state). Calls on one program must be serialized by the owner.
///
/// Object-safe: `Box<dyn AgentProgram<Percept = P, Action = A>>` is how
/// [`Agent`](crate::app::Agent) holds its program.
pub trait AgentProgram: Send {
    type Percept: Percept;
    type Action: Action;

    /// Run one decision cycle.
    fn execute(&mut self, percept: Self::Percept) -> Result<Self::Action, AgentError>;

    fn kind(&self) -> ProgramKind;
}

impl<G: AgentProgram + ?Sized> AgentProgram for Box<G> {
    type Percept = G::Percept;
    type Action = G::Action;

    fn execute(&mut self, percept: Self::Percept) -> Result<Self::Action, AgentError> {
        (**self).execute(percept)
    }

    fn kind(&self) -> ProgramKind {
        (**self).kind()
    }
}
