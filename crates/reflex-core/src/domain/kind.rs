//! ProgramKind - 戦略の種類（ログ・記録・CLI の選択で使う）

use std::fmt;

use serde::{Deserialize, Serialize};

/// The strategy families an [`AgentProgram`](crate::ports::AgentProgram) can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramKind {
    TableDriven,
    SimpleReflex,
    ModelBasedReflex,
}

impl ProgramKind {
    pub const ALL: [ProgramKind; 3] = [
        ProgramKind::TableDriven,
        ProgramKind::SimpleReflex,
        ProgramKind::ModelBasedReflex,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramKind::TableDriven => "table_driven",
            ProgramKind::SimpleReflex => "simple_reflex",
            ProgramKind::ModelBasedReflex => "model_based_reflex",
        }
    }
}

impl fmt::Display for ProgramKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
