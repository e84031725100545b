//! TransitionModel port - 世界がどう変化するかのモデル

/// Computes the next belief state from the previous state, the previous
/// action, and the new percept.
///
/// On the first cycle `last_action` is the vocabulary's NoOp.
pub trait TransitionModel<S, A, P>: Send + Sync {
    fn update(&self, state: &S, last_action: &A, percept: &P) -> S;
}

impl<S, A, P, F> TransitionModel<S, A, P> for F
where
    F: Fn(&S, &A, &P) -> S + Send + Sync,
{
    fn update(&self, state: &S, last_action: &A, percept: &P) -> S {
        self(state, last_action, percept)
    }
}
