//! State - agent が持つ環境についての信念
//!
//! - simple reflex: percept から毎回作り直す
//! - model-based reflex: 前の cycle から持ち越して更新する

use std::fmt;

/// State is an opaque, domain-defined belief about the environment.
pub trait State: fmt::Debug + Send + Sync + 'static {}

impl<T> State for T where T: fmt::Debug + Send + Sync + 'static {}
