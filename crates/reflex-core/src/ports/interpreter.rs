//! Interpreter port - 生の percept を state に解釈する（interpret_input）

/// Derives a state from the current percept alone.
///
/// Must be a pure function of the percept: the simple reflex program relies on
/// it to keep no memory across cycles.
pub trait Interpreter<P, S>: Send + Sync {
    fn interpret(&self, percept: &P) -> S;
}

impl<P, S, F> Interpreter<P, S> for F
where
    F: Fn(&P) -> S + Send + Sync,
{
    fn interpret(&self, percept: &P) -> S {
        self(percept)
    }
}
