//! Rule matching shared by the reflex programs.

use tracing::trace;

use super::errors::AgentError;
use super::rule::{Rule, RuleSet};

/// Linear scan in rule-set order; returns the first rule satisfied by `state`.
///
/// # Errors
/// `AgentError::UnresolvedMatch` when no rule qualifies.
pub fn rule_match<'r, R: Rule>(state: &R::State, rules: &'r [R]) -> Result<&'r R, AgentError> {
    match rules.iter().find(|rule| rule.matches(state)) {
        Some(rule) => {
            trace!(rule = rule.name(), ?state, "rule matched");
            Ok(rule)
        }
        None => Err(AgentError::unresolved_match(state, rules.len())),
    }
}

impl<R: Rule> RuleSet<R> {
    /// See [`rule_match`].
    pub fn first_match(&self, state: &R::State) -> Result<&R, AgentError> {
        rule_match(state, self.as_slice())
    }
}
