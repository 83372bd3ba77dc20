use crate::common::condition::ComparisonKind;

use aws_sdk_dynamodb::{error::SdkError, operation};

/// Errors raised while building or running an interactive read session.
///
/// Storage failures keep the SDK error as their source so the operator sees
/// exactly what the service reported.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Listing the tables of the account failed.
    #[error("failed to list tables")]
    ListTables(#[source] SdkError<operation::list_tables::ListTablesError>),
    /// Describing a table failed.
    #[error("failed to describe table `{table_name}`")]
    DescribeTable {
        /// The table being described.
        table_name: String,
        /// The service error.
        #[source]
        source: SdkError<operation::describe_table::DescribeTableError>,
    },
    /// A scan request failed.
    #[error("scan failed")]
    Scan(#[source] SdkError<operation::scan::ScanError>),
    /// A query request failed.
    #[error("query failed")]
    Query(#[source] SdkError<operation::query::QueryError>),
    /// The describe-table response carried no table description.
    #[error("no description returned for table `{0}`")]
    MissingTableDescription(String),
    /// A key attribute is missing from the table's attribute definitions.
    #[error("attribute `{0}` is not defined on the table")]
    UnknownAttribute(String),
    /// A key attribute uses a scalar type this tool cannot handle.
    #[error("unsupported scalar attribute type `{0}`")]
    UnsupportedScalarType(String),
    /// A key schema without a partition (HASH) key.
    #[error("key schema has no partition key")]
    MissingPartitionKey,
    /// Raw input could not be read as a number for a numeric key.
    #[error("`{0}` is not a valid number")]
    InvalidNumber(String),
    /// A sort key comparison received the wrong number of operands.
    #[error("comparison `{kind}` takes {expected} operand(s), got {actual}")]
    OperandArity {
        /// The chosen comparison.
        kind: ComparisonKind,
        /// Operands the comparison requires.
        expected: usize,
        /// Operands actually supplied.
        actual: usize,
    },
    /// The account has no tables to pick from.
    #[error("no tables found")]
    NoTables,
    /// A menu was offered without any choice.
    #[error("nothing to choose from for `{0}`")]
    EmptyMenu(String),
    /// A prompt answered with a position outside its menu.
    #[error("selection {position} is out of range for `{menu}`")]
    SelectionOutOfRange {
        /// The menu's message.
        menu: String,
        /// The position returned.
        position: usize,
    },
    /// The operator interrupted a prompt.
    #[error("interrupted")]
    Interrupted,
    /// Writing to the terminal failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// An item could not be converted for display.
    #[error(transparent)]
    Item(#[from] serde_dynamo::Error),
    /// An item could not be rendered as JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The line editor failed.
    #[cfg(feature = "cli")]
    #[error(transparent)]
    Readline(rustyline::error::ReadlineError),
}

/// Result type used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
