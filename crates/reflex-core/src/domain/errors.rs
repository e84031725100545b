//! Errors - decision cycle と構築時のエラー
//!
//! どのエラーも NoOp で握りつぶさず、呼び出し側に返します。
//! 不完全な table / rule set は設定ミスであり、実行時のデフォルトではありません。

use thiserror::Error;

/// AgentError is returned when a decision cycle cannot resolve an action.
///
/// Payloads are `Debug` renderings so the error type does not carry the
/// percept/state type parameters around.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgentError {
    /// The accumulated percept sequence has no entry in the lookup table.
    ///
    /// Only the length and the newest percept are kept; the history itself
    /// grows for the agent's whole lifetime.
    #[error("no table entry for percept sequence of length {cycle} ending in {last}")]
    UnresolvedLookup { cycle: usize, last: String },

    /// No rule in the rule set matches the current state.
    #[error("no rule among {rules} matches state {state}")]
    UnresolvedMatch { state: String, rules: usize },
}

impl AgentError {
    pub fn unresolved_lookup<P: std::fmt::Debug>(history: &[P]) -> Self {
        Self::UnresolvedLookup {
            cycle: history.len(),
            last: history
                .last()
                .map(|percept| format!("{percept:?}"))
                .unwrap_or_default(),
        }
    }

    pub fn unresolved_match<S: std::fmt::Debug>(state: &S, rules: usize) -> Self {
        Self::UnresolvedMatch {
            state: format!("{state:?}"),
            rules,
        }
    }
}

/// BuildError は rule set / lookup table 構築時のエラー（Fail-fast）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("rule set is empty; every state would be unresolved")]
    EmptyRuleSet,

    #[error("rule '{0}' is already registered")]
    DuplicateRule(String),

    #[error("percept sequence {0} is already mapped")]
    DuplicateEntry(String),
}
