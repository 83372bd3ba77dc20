//! Read operations for retrieving data from DynamoDB tables.
//!
//! This module provides:
//! - Scanning a table or index page by page
//! - Querying a table or index with a key condition
//! - Driving a paginated read with operator-controlled continuation

/// Common types for read operations: arguments, items and pages.
pub mod common;

/// Pagination driver following continuation cursors.
pub mod paginate;

/// Query operation for retrieving items with a key condition.
pub mod query;

/// Scan operation for retrieving all items of a table or index.
pub mod scan;

use crate::error::Result;
use crate::store::TableStore;

use std::fmt;

/// Kind of read the session performs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operation {
    /// Select items by key condition.
    Query,
    /// Read every item.
    Scan,
}

impl Operation {
    /// Every operation, in menu order.
    pub const ALL: [Self; 2] = [Self::Query, Self::Scan];
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => f.write_str("Query"),
            Self::Scan => f.write_str("Scan"),
        }
    }
}

/// Request template for a paginated read.
#[derive(Clone, Debug, PartialEq)]
pub enum ReadRequest {
    /// A query with its key condition.
    Query(query::Query),
    /// A scan.
    Scan(scan::Scan),
}

impl ReadRequest {
    /// A copy of this template starting at `cursor`.
    pub fn with_cursor(&self, cursor: Option<common::Cursor>) -> Self {
        let mut request = self.clone();
        let read_args = match &mut request {
            Self::Query(query) => &mut query.read_args,
            Self::Scan(scan) => &mut scan.read_args,
        };
        read_args.exclusive_start_key = cursor;
        request
    }

    /// Issue the request against a store and return one page.
    pub async fn send<S: TableStore + ?Sized>(self, store: &S) -> Result<common::Page> {
        match self {
            Self::Query(query) => store.query(query).await,
            Self::Scan(scan) => store.scan(scan).await,
        }
    }
}

#[cfg(test)]
impl ReadRequest {
    pub(crate) fn operation(&self) -> Operation {
        match self {
            Self::Query(_) => Operation::Query,
            Self::Scan(_) => Operation::Scan,
        }
    }

    pub(crate) fn read_args(&self) -> &common::ReadArgs {
        match self {
            Self::Query(query) => &query.read_args,
            Self::Scan(scan) => &scan.read_args,
        }
    }
}
