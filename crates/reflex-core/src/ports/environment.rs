//! Environment port - percept を供給し action を受け取る外部協調者
//!
//! core は環境を実装しません。vacuum world などの具体的な環境は
//! 利用側（reflex-cli など）が提供します。

/// Supplies percepts and consumes actions.
///
/// Notice that the Environment is not aware of an Agent.
pub trait Environment {
    type Percept;
    type Action;

    /// The percept an agent would observe right now.
    fn percept(&self) -> Self::Percept;

    /// Apply an agent's action to the world.
    fn apply(&mut self, action: &Self::Action);

    /// Performance measure of the current world state (not cumulative).
    fn performance(&self) -> i64;
}
