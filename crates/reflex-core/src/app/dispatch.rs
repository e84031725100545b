//! execute - 戦略に依存しない唯一の呼び出し口
//!
//! 呼び出し側は戦略の種類で分岐しません。どの戦略の本体が動くかは
//! `AgentProgram` の実装（静的 or `dyn`）で決まります。

use tracing::{debug, warn};

use crate::domain::AgentError;
use crate::ports::AgentProgram;

/// Run one decision cycle on any program: exactly one percept in, exactly
/// one action (or an unresolved error) out.
pub fn execute<G>(program: &mut G, percept: G::Percept) -> Result<G::Action, AgentError>
where
    G: AgentProgram + ?Sized,
{
    let kind = program.kind();
    match program.execute(percept) {
        Ok(action) => {
            debug!(%kind, ?action, "decision cycle completed");
            Ok(action)
        }
        Err(err) => {
            warn!(%kind, error = %err, "decision cycle unresolved");
            Err(err)
        }
    }
}
