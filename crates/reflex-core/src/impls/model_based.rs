//! ModelBasedReflexProgram - state を cycle をまたいで持ち越し、更新してから rule を引く
//!
//! # cycle の順序
//! 1. 前回の state・前回の action・新しい percept・model から state を更新
//! 2. 更新後の state で rule を照合
//! 3. 新しい state と返す action を「前回」として保存
//!
//! 照合に失敗した cycle は完了していないので、state も前回の action も更新しません。

use std::marker::PhantomData;

use tracing::trace;

use crate::domain::{Action, AgentError, ConditionRule, Percept, Rule, RuleSet, State};
use crate::ports::{AgentProgram, ProgramKind, TransitionModel};

pub struct ModelBasedReflexProgram<P, S, A, M, R = ConditionRule<S, A>> {
    state: S,
    last_action: A,
    model: M,
    rules: RuleSet<R>,
    _marker: PhantomData<fn(P)>,
}

impl<P, S, A, M, R> ModelBasedReflexProgram<P, S, A, M, R>
where
    P: Percept,
    S: State,
    A: Action,
    M: TransitionModel<S, A, P>,
    R: Rule<State = S, Action = A>,
{
    /// `initial` is the belief before any percept; the previous action starts
    /// as NoOp.
    pub fn new(initial: S, model: M, rules: RuleSet<R>) -> Self {
        Self {
            state: initial,
            last_action: A::no_op(),
            model,
            rules,
            _marker: PhantomData,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn last_action(&self) -> &A {
        &self.last_action
    }

    pub fn rules(&self) -> &RuleSet<R> {
        &self.rules
    }
}

impl<P, S, A, M, R> AgentProgram for ModelBasedReflexProgram<P, S, A, M, R>
where
    P: Percept,
    S: State,
    A: Action,
    M: TransitionModel<S, A, P>,
    R: Rule<State = S, Action = A>,
{
    type Percept = P;
    type Action = A;

    fn execute(&mut self, percept: P) -> Result<A, AgentError> {
        let updated = self.model.update(&self.state, &self.last_action, &percept);
        trace!(?percept, state = ?updated, last_action = ?self.last_action, "state updated");

        let action = self.rules.first_match(&updated)?.action().clone();

        self.state = updated;
        self.last_action = action.clone();
        Ok(action)
    }

    fn kind(&self) -> ProgramKind {
        ProgramKind::ModelBasedReflex
    }
}
