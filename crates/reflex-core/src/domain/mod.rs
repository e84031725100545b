//! Domain model (vocabulary, rules, tables, ids, records, errors).

pub mod action;
pub mod errors;
pub mod ids;
pub mod kind;
pub mod matching;
pub mod percept;
pub mod record;
pub mod rule;
pub mod state;
pub mod table;

pub use self::action::{Action, NO_OP, NoOp};
pub use self::errors::{AgentError, BuildError};
pub use self::ids::{AgentId, EpisodeId};
pub use self::kind::ProgramKind;
pub use self::matching::rule_match;
pub use self::percept::Percept;
pub use self::record::DecisionRecord;
pub use self::rule::{ConditionRule, Rule, RuleSet, RuleSetBuilder};
pub use self::state::State;
pub use self::table::{LookupTable, TableEntry};
