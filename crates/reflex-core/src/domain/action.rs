//! Action - エージェントが環境に返す指示
//!
//! Action の具体的な語彙はドメイン側（vacuum world など）が定義します。
//! このモジュールが提供する具体値は `NoOp`（何もしない）だけです。

use std::fmt;

use serde::{Deserialize, Serialize};

/// The built-in "do nothing" action.
///
/// Every action vocabulary must be able to express it (see [`Action`]), so a
/// program can always answer with "no operation" in its own vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoOp;

/// Process-wide NoOp value.
pub const NO_OP: NoOp = NoOp;

impl fmt::Display for NoOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NoOp")
    }
}

/// Action は agent program の出力
///
/// # Trait Bounds
/// - `From<NoOp>`: どの語彙でも NoOp を表現できる
/// - `Clone`: rule / table が保持する action を複製して返すため
/// - `PartialEq`: `is_no_op()` の判定のため
/// - `Send + Sync + 'static`: `Box<dyn AgentProgram>` に格納できるため
pub trait Action: Clone + fmt::Debug + PartialEq + From<NoOp> + Send + Sync + 'static {
    /// This vocabulary's rendering of NoOp.
    fn no_op() -> Self {
        Self::from(NO_OP)
    }

    fn is_no_op(&self) -> bool {
        *self == Self::no_op()
    }
}

impl Action for NoOp {}
