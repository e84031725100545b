//! Ports - 抽象化レイヤー
//!
//! 戦略（AgentProgram）と、その部品を外から差し込むための trait を定義します。
//! 具体的な percept / action / rule / 環境はドメインの実装側が用意します。

pub mod clock;
pub mod environment;
pub mod id_generator;
pub mod interpreter;
pub mod model;
pub mod program;

pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::environment::Environment;
pub use self::id_generator::{IdGenerator, UlidGenerator};
pub use self::interpreter::Interpreter;
pub use self::model::TransitionModel;
pub use self::program::{AgentProgram, ProgramKind};
