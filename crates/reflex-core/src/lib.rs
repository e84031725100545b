//! reflex-core
//!
//! Percept → action の意思決定エージェントを、戦略に依存しない 1 つの
//! `execute` で呼び出すための building blocks.
//!
//! # モジュール構成
//! - **domain**: 語彙（Percept, Action + NoOp, State）、Rule / RuleSet、rule_match、
//!   LookupTable、ids、DecisionRecord、errors
//! - **ports**: 抽象化レイヤー（AgentProgram, Interpreter, TransitionModel,
//!   Environment, Clock, IdGenerator）
//! - **impls**: 戦略の実装（TableDriven, SimpleReflex, ModelBasedReflex）
//! - **app**: 呼び出し口 `execute` と `Agent`
//!
//! # Example
//! ```
//! use reflex_core::app::Agent;
//! use reflex_core::domain::{Action, ConditionRule, NoOp, RuleSet};
//! use reflex_core::impls::SimpleReflexProgram;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Act { Suck, Idle }
//!
//! impl From<NoOp> for Act {
//!     fn from(_: NoOp) -> Self { Act::Idle }
//! }
//! impl Action for Act {}
//!
//! let rules = RuleSet::builder()
//!     .rule(ConditionRule::when_eq("dirty", "dirty", Act::Suck))
//!     .rule(ConditionRule::when_eq("clean", "clean", Act::no_op()))
//!     .build()?;
//! let interpret = |percept: &&'static str| *percept;
//! let mut agent = Agent::new(SimpleReflexProgram::new(interpret, rules));
//!
//! assert_eq!(agent.execute("dirty")?, Act::Suck);
//! assert_eq!(agent.execute("clean")?, Act::Idle);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod app;
pub mod domain;
pub mod impls;
pub mod ports;
