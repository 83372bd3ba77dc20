//! Interactive request construction.
//!
//! The session asks the operator for a table, an operation and an index,
//! collects a key condition for queries, and pages through the results.

/// Predicate builder collecting partition and sort key conditions.
pub mod predicate;

/// Operator prompts.
pub mod prompt;

/// Session controller tying the steps together.
pub mod session;
