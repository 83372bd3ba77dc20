//! Common building blocks for read requests.
//!
//! This module provides the types shared by the schema inspection, predicate
//! building and read layers: typed key values, table key schemas and the
//! key-condition expressions rendered from them.

/// Sort key comparisons and key-condition expressions.
pub mod condition;

/// Key attributes, scalar types and coercion of raw input.
pub mod key;

/// Table descriptors, key schemas and selectable index choices.
pub mod schema;

use aws_sdk_dynamodb::types;
use std::collections;

fn get_expression(left: String, operator: &str, right: String) -> String {
    if left.is_empty() {
        right
    } else if right.is_empty() {
        left
    } else {
        format!("{left}{operator}{right}")
    }
}

/// Rendered expression with its placeholder maps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpressionInput {
    /// The expression string, referring to attributes and values by placeholder.
    pub expression: String,
    /// Placeholder name (`#…`) to attribute name.
    pub expression_attribute_names: collections::HashMap<String, String>,
    /// Placeholder name (`:…`) to typed value.
    pub expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}

impl ExpressionInput {
    pub(crate) fn merge(operator: &str, items: Vec<Self>) -> Self {
        let mut operation = Self::default();
        for item in items {
            operation
                .expression_attribute_names
                .extend(item.expression_attribute_names);
            operation
                .expression_attribute_values
                .extend(item.expression_attribute_values);
            operation.expression = get_expression(operation.expression, operator, item.expression);
        }
        operation
    }

    pub(crate) fn merge_into(
        self,
        names: &mut Option<collections::HashMap<String, String>>,
        values: &mut Option<collections::HashMap<String, types::AttributeValue>>,
    ) -> String {
        match names {
            Some(existing) => existing.extend(self.expression_attribute_names),
            None => *names = Some(self.expression_attribute_names),
        }
        match values {
            Some(existing) => existing.extend(self.expression_attribute_values),
            None => *values = Some(self.expression_attribute_values),
        }
        self.expression
    }
}
