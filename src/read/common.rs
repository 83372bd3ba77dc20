use aws_sdk_dynamodb::types;
use std::collections;

/// A stored item, exactly as the store returns it.
pub type Item = collections::HashMap<String, types::AttributeValue>;

/// Continuation cursor: the key of the last item evaluated by the previous page.
pub type Cursor = collections::HashMap<String, types::AttributeValue>;

/// One page of a paginated read.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    /// Items of the page, in the order returned.
    pub items: Vec<Item>,
    /// Present when more data exists beyond this page.
    pub cursor: Option<Cursor>,
}

impl Page {
    /// Whether the store reported more data after this page.
    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ReadInput {
    pub(crate) exclusive_start_key: Option<Cursor>,
    pub(crate) expression_attribute_names: Option<collections::HashMap<String, String>>,
    pub(crate) expression_attribute_values:
        Option<collections::HashMap<String, types::AttributeValue>>,
    pub(crate) index_name: Option<String>,
    pub(crate) limit: Option<i32>,
    pub(crate) table_name: String,
}

/// Arguments shared by Query and Scan.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReadArgs {
    /// The exclusive start key for pagination.
    ///
    /// Taken from the cursor of the previous page; `None` on the first request.
    pub exclusive_start_key: Option<Cursor>,
    /// The name of a global or local secondary index to read instead of the base table.
    pub index_name: Option<String>,
    /// The maximum number of items to evaluate per page.
    pub limit: Option<i32>,
    /// The name of the table to read from.
    pub table_name: String,
}

impl From<ReadArgs> for ReadInput {
    fn from(read_args: ReadArgs) -> Self {
        Self {
            exclusive_start_key: read_args.exclusive_start_key,
            index_name: read_args.index_name,
            limit: read_args.limit,
            table_name: read_args.table_name,
            ..Default::default()
        }
    }
}

/// apply common read settings to a Query or Scan builder
#[macro_export]
macro_rules! apply_read_input {
    ($builder:expr, $read_input:expr) => {
        $builder
            .set_exclusive_start_key($read_input.exclusive_start_key)
            .set_expression_attribute_names($read_input.expression_attribute_names)
            .set_expression_attribute_values($read_input.expression_attribute_values)
            .set_index_name($read_input.index_name)
            .set_limit($read_input.limit)
            .table_name($read_input.table_name)
    };
}

/// build a page from a Query or Scan output
#[macro_export]
macro_rules! get_page {
    ($output:expr) => {{
        let output = $output;
        $crate::read::common::Page {
            items: output.items.unwrap_or_default(),
            cursor: output.last_evaluated_key,
        }
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::operation;

    #[test]
    fn test_read_args_to_read_input() {
        let cursor = Cursor::from([("pk".to_string(), types::AttributeValue::S("a".to_string()))]);
        let actual: ReadInput = ReadArgs {
            exclusive_start_key: Some(cursor.clone()),
            index_name: Some("b".to_string()),
            limit: Some(25),
            table_name: "c".to_string(),
        }
        .into();
        assert_eq!(
            actual,
            ReadInput {
                exclusive_start_key: Some(cursor),
                index_name: Some("b".to_string()),
                limit: Some(25),
                table_name: "c".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_get_page() {
        let item = Item::from([("pk".to_string(), types::AttributeValue::S("a".to_string()))]);
        let output = operation::scan::ScanOutput::builder()
            .items(item.clone())
            .set_last_evaluated_key(Some(item.clone()))
            .build();
        let page = crate::get_page!(output);
        assert_eq!(page.items, vec![item]);
        assert!(page.has_more());

        let page = crate::get_page!(operation::query::QueryOutput::builder().build());
        assert_eq!(page, Page::default());
        assert!(!page.has_more());
    }
}
