//! Impls - AgentProgram の具体的な戦略
//!
//! # 含まれる実装
//! - **TableDrivenProgram**: percept 列全体 → action の表引き
//! - **SimpleReflexProgram**: 現在の percept → state → 最初に一致した rule
//! - **ModelBasedReflexProgram**: 持ち越した state を model で更新 → rule

pub mod model_based;
pub mod simple_reflex;
pub mod table_driven;

pub use self::model_based::ModelBasedReflexProgram;
pub use self::simple_reflex::SimpleReflexProgram;
pub use self::table_driven::TableDrivenProgram;
