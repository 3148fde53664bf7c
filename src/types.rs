// src/types.rs

//! Small shared types used across the graph, scheduler and loader.

use std::fmt;

/// Canonical task identifier type.
pub type TaskName = String;

/// A point (or span) on the simulated logical clock.
pub type Time = u64;

/// Arena index of a task inside a [`TaskGraph`](crate::dag::TaskGraph).
///
/// Ids are dense and assigned in order of first reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub(crate) usize);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Intrinsic duration derived from a task identifier.
///
/// The alphabetic rank of the first character plus one (`A` = 1 .. `Z` = 26),
/// case-insensitive. Identifiers that do not start with an ASCII letter have
/// no intrinsic duration.
pub fn intrinsic_duration(name: &str) -> Option<Time> {
    let first = name.chars().next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    let rank = first.to_ascii_uppercase() as u8 - b'A';
    Some(Time::from(rank) + 1)
}
