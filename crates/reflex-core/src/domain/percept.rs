//! Percept - 1 回の decision cycle で agent が受け取る観測

use std::fmt;
use std::hash::Hash;

/// Percept is an opaque, domain-defined observation.
///
/// `Eq + Hash` are required because the table-driven program keys its lookup
/// table by whole percept sequences.
pub trait Percept: Clone + fmt::Debug + Eq + Hash + Send + Sync + 'static {}

impl<T> Percept for T where T: Clone + fmt::Debug + Eq + Hash + Send + Sync + 'static {}
