//! App - 呼び出し口（execute）と Agent ラッパー

pub mod agent;
pub mod dispatch;

pub use self::agent::Agent;
pub use self::dispatch::execute;
