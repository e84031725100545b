//! SimpleReflexProgram - 現在の percept だけから state を作り、rule を引く
//!
//! cycle をまたいだ記憶を持ちません。

use std::marker::PhantomData;

use tracing::trace;

use crate::domain::{Action, AgentError, ConditionRule, Percept, Rule, RuleSet, State};
use crate::ports::{AgentProgram, Interpreter, ProgramKind};

pub struct SimpleReflexProgram<P, S, A, I, R = ConditionRule<S, A>> {
    interpreter: I,
    rules: RuleSet<R>,
    _marker: PhantomData<fn(P) -> (S, A)>,
}

impl<P, S, A, I, R> SimpleReflexProgram<P, S, A, I, R>
where
    P: Percept,
    S: State,
    A: Action,
    I: Interpreter<P, S>,
    R: Rule<State = S, Action = A>,
{
    pub fn new(interpreter: I, rules: RuleSet<R>) -> Self {
        Self {
            interpreter,
            rules,
            _marker: PhantomData,
        }
    }

    pub fn rules(&self) -> &RuleSet<R> {
        &self.rules
    }
}

impl<P, S, A, I, R> AgentProgram for SimpleReflexProgram<P, S, A, I, R>
where
    P: Percept,
    S: State,
    A: Action,
    I: Interpreter<P, S>,
    R: Rule<State = S, Action = A>,
{
    type Percept = P;
    type Action = A;

    fn execute(&mut self, percept: P) -> Result<A, AgentError> {
        let state = self.interpreter.interpret(&percept);
        trace!(?percept, ?state, "percept interpreted");
        let rule = self.rules.first_match(&state)?;
        Ok(rule.action().clone())
    }

    fn kind(&self) -> ProgramKind {
        ProgramKind::SimpleReflex
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoOp;
    use rstest::rstest;

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

    /// Percepts are raw sensor strings; the interpreter reduces them to a
    /// status word.
    fn interpret(percept: &String) -> &'static str {
        if percept.contains("dust") { "dirty" } else { "clean" }
    }

    fn program() -> SimpleReflexProgram<String, &'static str, Act, fn(&String) -> &'static str> {
        let rules = RuleSet::builder()
            .rule(ConditionRule::when_eq("dirty", "dirty", Act::Suck))
            .rule(ConditionRule::when_eq("clean", "clean", Act::no_op()))
            .build()
            .unwrap();
        SimpleReflexProgram::new(interpret as fn(&String) -> &'static str, rules)
    }

    #[rstest]
    #[case::dirty("dust at A", Act::Suck)]
    #[case::clean("shiny at A", Act::Idle)]
    fn rule_for_interpreted_state_fires(#[case] percept: &str, #[case] expected: Act) {
        let mut p = program();
        assert_eq!(p.execute(percept.to_string()).unwrap(), expected);
    }

    #[test]
    fn no_hidden_memory_between_calls() {
        let mut p = program();
        let first = p.execute("dust".to_string()).unwrap();
        p.execute("shiny".to_string()).unwrap();
        p.execute("shiny".to_string()).unwrap();
        let third = p.execute("dust".to_string()).unwrap();
        assert_eq!(first, third);
    }

    #[test]
    fn independent_programs_agree() {
        let mut a = program();
        let mut b = program();
        b.execute("shiny".to_string()).unwrap();
        assert_eq!(
            a.execute("dust".to_string()).unwrap(),
            b.execute("dust".to_string()).unwrap()
        );
    }

    #[test]
    fn incomplete_rule_set_is_an_unresolved_match() {
        let rules = RuleSet::builder()
            .rule(ConditionRule::when_eq("dirty", "dirty", Act::Suck))
            .build()
            .unwrap();
        let mut p = SimpleReflexProgram::new(|_: &u8| "clean", rules);
        let err = p.execute(0).unwrap_err();
        assert!(matches!(err, AgentError::UnresolvedMatch { rules: 1, .. }));
    }
}
