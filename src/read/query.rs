use crate::{common, read};

use aws_sdk_dynamodb::{Client, error, operation};

/// query operation
#[derive(Clone, Debug, Default, PartialEq)]
struct QueryInput {
    key_condition_expression: String,
    read_operation: read::common::ReadInput,
}

/// Query operation, reading a single page.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_query::{common, read};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let query = read::query::Query {
///     predicate: common::condition::QueryPredicate {
///         partition_key: common::key::Key {
///             name: "id".to_string(),
///             value: common::key::KeyValue::String("1".to_string()),
///         },
///         ..Default::default()
///     },
///     read_args: read::common::ReadArgs {
///         table_name: "users".to_string(),
///         ..Default::default()
///     },
/// };
/// let page = query.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query {
    /// The key condition to select items by.
    pub predicate: common::condition::QueryPredicate,
    /// Table, index, page size and cursor.
    pub read_args: read::common::ReadArgs,
}

impl From<Query> for QueryInput {
    fn from(query: Query) -> Self {
        let mut read_operation: read::common::ReadInput = query.read_args.into();
        let key_condition_expression = query.predicate.render().merge_into(
            &mut read_operation.expression_attribute_names,
            &mut read_operation.expression_attribute_values,
        );
        Self {
            key_condition_expression,
            read_operation,
        }
    }
}

impl Query {
    /// Execute the query and return one page.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_query.query", skip(client), err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<read::common::Page, error::SdkError<operation::query::QueryError>> {
        let query: QueryInput = self.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            key_condition_expression = %query.key_condition_expression,
            "sending query"
        );
        let builder = client
            .query()
            .key_condition_expression(query.key_condition_expression);
        let output = crate::apply_read_input!(builder, query.read_operation)
            .send()
            .await?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            count = output.count,
            scanned_count = output.scanned_count,
            "query page received"
        );
        Ok(crate::get_page!(output))
    }
}
