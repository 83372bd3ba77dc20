#![deny(missing_docs)]
#![deny(warnings)]

//! # DynamoDB Query
//!
//! An interactive explorer for Amazon DynamoDB tables.
//!
//! ## Overview
//!
//! The operator picks a table, chooses between a scan and a query, and picks
//! the table itself or one of its secondary indexes. For queries the tool
//! collects a partition key value and, when the key schema has a sort key, a
//! comparison with its operands, then renders the key-condition expression.
//! Results are streamed page by page, asking before each further page.
//!
//! ## Quick Example
//!
//! The key condition is built from typed values, never by hand:
//!
//! ```rust
//! use dynamodb_query::common::{condition, key};
//!
//! let predicate = condition::QueryPredicate {
//!     partition_key: key::Key {
//!         name: "pk".to_string(),
//!         value: key::KeyValue::String("cust#1".to_string()),
//!     },
//!     sort_key: Some(key::Key {
//!         name: "ts".to_string(),
//!         value: condition::SortKeyCondition::Between(
//!             key::KeyValue::Number("5".to_string()),
//!             key::KeyValue::Number("10".to_string()),
//!         ),
//!     }),
//! };
//! let rendered = predicate.render();
//! assert_eq!(rendered.expression, "#pk = :pk and #sk between :sk1 and :sk2");
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Key values, key schemas and key-condition rendering
//! - [`mod@read`] - Scan and Query requests and the pagination driver
//! - [`mod@store`] - The storage seam and its DynamoDB client implementation
//! - [`mod@interactive`] - Prompts, predicate builder and session controller
//! - [`mod@display`] - Rendering of result pages

/// Key values, key schemas and key-condition rendering.
pub mod common;

/// Command-line configuration.
#[cfg(feature = "cli")]
pub mod config;

pub mod display;

/// Error type of the crate.
pub mod error;

pub mod interactive;

pub mod read;

pub mod store;
