//! Rule - condition → action の対応と、順序付きの rule set
//!
//! # 学習ポイント
//! - 関連型 (`type State`, `type Action`) で rule と state の対応を固定
//! - `Box<dyn Fn>` による条件の型消去
//! - Builder による起動時検証（空の rule set・名前の重複）

use std::collections::HashSet;
use std::fmt;

use super::action::Action;
use super::errors::BuildError;
use super::state::State;

/// Rule pairs a condition over a state with the action to take when it holds.
pub trait Rule: Send + Sync {
    type State: State;
    type Action: Action;

    /// Whether this rule's condition holds for `state`.
    fn matches(&self, state: &Self::State) -> bool;

    /// The action associated with this rule.
    fn action(&self) -> &Self::Action;

    /// Name used in logs and decision records.
    fn name(&self) -> &str;
}

type Condition<S> = Box<dyn Fn(&S) -> bool + Send + Sync>;

/// A named rule whose condition is an arbitrary predicate.
pub struct ConditionRule<S, A> {
    name: String,
    condition: Condition<S>,
    action: A,
}

impl<S: State, A: Action> ConditionRule<S, A> {
    pub fn new(
        name: impl Into<String>,
        condition: impl Fn(&S) -> bool + Send + Sync + 'static,
        action: A,
    ) -> Self {
        Self {
            name: name.into(),
            condition: Box::new(condition),
            action,
        }
    }

    /// Rule that fires when the state equals `expected`.
    pub fn when_eq(name: impl Into<String>, expected: S, action: A) -> Self
    where
        S: PartialEq,
    {
        Self::new(name, move |state: &S| *state == expected, action)
    }
}

impl<S: State, A: Action> Rule for ConditionRule<S, A> {
    type State = S;
    type Action = A;

    fn matches(&self, state: &S) -> bool {
        (self.condition)(state)
    }

    fn action(&self) -> &A {
        &self.action
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<S, A: fmt::Debug> fmt::Debug for ConditionRule<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConditionRule")
            .field("name", &self.name)
            .field("action", &self.action)
            .finish_non_exhaustive()
    }
}

/// Ordered rule collection. Order is caller-defined and significant:
/// the first matching rule wins.
#[derive(Debug)]
pub struct RuleSet<R> {
    rules: Vec<R>,
}

impl<R: Rule> RuleSet<R> {
    pub fn builder() -> RuleSetBuilder<R> {
        RuleSetBuilder { rules: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn as_slice(&self) -> &[R] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.rules.iter()
    }
}

/// RuleSetBuilder は rule を登録順に積み上げる
///
/// # Fail-fast 設計
/// - `build()` で空の rule set を拒否
/// - 同じ名前の rule が 2 つあれば拒否（記録・ログで区別できなくなるため）
pub struct RuleSetBuilder<R> {
    rules: Vec<R>,
}

impl<R: Rule> RuleSetBuilder<R> {
    /// Append a rule after every rule added so far.
    pub fn rule(mut self, rule: R) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn build(self) -> Result<RuleSet<R>, BuildError> {
        if self.rules.is_empty() {
            return Err(BuildError::EmptyRuleSet);
        }
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.name()) {
                return Err(BuildError::DuplicateRule(rule.name().to_string()));
            }
        }
        Ok(RuleSet { rules: self.rules })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::action::NoOp;

    #[derive(Debug, Clone, PartialEq)]
    enum Act {
        Suck,
        Idle,
    }

    impl From<NoOp> for Act {
        fn from(_: NoOp) -> Self {
            Act::Idle
        }
    }

    impl Action for Act {}

    #[test]
    fn when_eq_matches_only_the_expected_state() {
        let rule = ConditionRule::when_eq("dirty", "dirty", Act::Suck);
        assert!(rule.matches(&"dirty"));
        assert!(!rule.matches(&"clean"));
        assert_eq!(rule.action(), &Act::Suck);
        assert_eq!(rule.name(), "dirty");
    }

    #[test]
    fn builder_keeps_insertion_order() {
        let rules = RuleSet::builder()
            .rule(ConditionRule::when_eq("dirty", "dirty", Act::Suck))
            .rule(ConditionRule::when_eq("clean", "clean", Act::no_op()))
            .build()
            .unwrap();

        let names: Vec<&str> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["dirty", "clean"]);
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn builder_rejects_empty_rule_set() {
        let result = RuleSet::<ConditionRule<&str, Act>>::builder().build();
        assert!(matches!(result, Err(BuildError::EmptyRuleSet)));
    }

    #[test]
    fn builder_rejects_duplicate_names() {
        let result = RuleSet::builder()
            .rule(ConditionRule::when_eq("r", "dirty", Act::Suck))
            .rule(ConditionRule::when_eq("r", "clean", Act::Idle))
            .build();
        assert_eq!(result.unwrap_err(), BuildError::DuplicateRule("r".to_string()));
    }

    #[test]
    fn debug_shows_name_and_action() {
        let rule = ConditionRule::new("always", |_: &u8| true, Act::Suck);
        let s = format!("{rule:?}");
        assert!(s.contains("always"));
        assert!(s.contains("Suck"));
    }
}
