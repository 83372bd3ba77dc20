use crate::common::{self, key};
use crate::error::{Error, Result};

use aws_sdk_dynamodb::types;
use std::{collections, fmt};

const AND: &str = " and ";

/// Comparison applied to a sort key.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ComparisonKind {
    /// No sort key condition.
    #[default]
    None,
    /// `=`
    Equals,
    /// `<`
    LessThan,
    /// `<=`
    LessThanOrEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanOrEqual,
    /// `between`, inclusive on both ends.
    Between,
    /// `begins_with`, string sort keys only.
    BeginsWith,
}

impl ComparisonKind {
    /// Every comparison, in menu order.
    pub const ALL: [Self; 8] = [
        Self::None,
        Self::Equals,
        Self::LessThan,
        Self::LessThanOrEqual,
        Self::GreaterThan,
        Self::GreaterThanOrEqual,
        Self::Between,
        Self::BeginsWith,
    ];

    /// Comparisons offered for a sort key of the given scalar type.
    ///
    /// `begins_with` only applies to strings.
    ///
    /// ```rust
    /// use dynamodb_query::common::{condition::ComparisonKind, key::ScalarType};
    ///
    /// let kinds = ComparisonKind::allowed_for(ScalarType::Number);
    /// assert!(!kinds.contains(&ComparisonKind::BeginsWith));
    /// ```
    pub fn allowed_for(scalar_type: key::ScalarType) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|kind| *kind != Self::BeginsWith || scalar_type == key::ScalarType::String)
            .collect()
    }

    /// Number of operands the comparison takes.
    pub fn arity(self) -> usize {
        match self {
            Self::None => 0,
            Self::Between => 2,
            _ => 1,
        }
    }

    fn operator(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Equals => "=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
            Self::Between => "between",
            Self::BeginsWith => "begins_with",
        }
    }
}

impl fmt::Display for ComparisonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operator())
    }
}

/// Sort key comparison with its operands.
///
/// Each variant carries exactly the operands its comparison needs, so a
/// condition with the wrong arity cannot be represented.
#[derive(Clone, Debug, PartialEq)]
pub enum SortKeyCondition {
    /// `#sk = :sk`
    Equals(key::KeyValue),
    /// `#sk < :sk`
    LessThan(key::KeyValue),
    /// `#sk <= :sk`
    LessThanOrEqual(key::KeyValue),
    /// `#sk > :sk`
    GreaterThan(key::KeyValue),
    /// `#sk >= :sk`
    GreaterThanOrEqual(key::KeyValue),
    /// `#sk between :sk1 and :sk2`
    Between(key::KeyValue, key::KeyValue),
    /// `begins_with(#sk, :sk)`
    BeginsWith(key::KeyValue),
}

impl SortKeyCondition {
    /// Build a condition from a comparison and the operands collected for it.
    ///
    /// Returns `Ok(None)` for [`ComparisonKind::None`] and fails when the
    /// number of operands does not match the comparison.
    pub fn new(kind: ComparisonKind, operands: Vec<key::KeyValue>) -> Result<Option<Self>> {
        let arity_error = |actual: usize| Error::OperandArity {
            kind,
            expected: kind.arity(),
            actual,
        };
        if operands.len() != kind.arity() {
            return Err(arity_error(operands.len()));
        }
        let mut operands = operands.into_iter();
        let mut next = || operands.next().ok_or_else(|| arity_error(0));
        let condition = match kind {
            ComparisonKind::None => return Ok(None),
            ComparisonKind::Equals => Self::Equals(next()?),
            ComparisonKind::LessThan => Self::LessThan(next()?),
            ComparisonKind::LessThanOrEqual => Self::LessThanOrEqual(next()?),
            ComparisonKind::GreaterThan => Self::GreaterThan(next()?),
            ComparisonKind::GreaterThanOrEqual => Self::GreaterThanOrEqual(next()?),
            ComparisonKind::BeginsWith => Self::BeginsWith(next()?),
            ComparisonKind::Between => {
                let from = next()?;
                Self::Between(from, next()?)
            }
        };
        Ok(Some(condition))
    }

    /// The comparison this condition applies.
    pub fn kind(&self) -> ComparisonKind {
        match self {
            Self::Equals(_) => ComparisonKind::Equals,
            Self::LessThan(_) => ComparisonKind::LessThan,
            Self::LessThanOrEqual(_) => ComparisonKind::LessThanOrEqual,
            Self::GreaterThan(_) => ComparisonKind::GreaterThan,
            Self::GreaterThanOrEqual(_) => ComparisonKind::GreaterThanOrEqual,
            Self::Between(_, _) => ComparisonKind::Between,
            Self::BeginsWith(_) => ComparisonKind::BeginsWith,
        }
    }

    fn get_expression(
        self,
        key_placeholder: &str,
    ) -> (String, collections::HashMap<String, types::AttributeValue>) {
        let mut expression_attribute_values = collections::HashMap::new();
        let kind = self.kind();
        let expression = match self {
            Self::Between(from, to) => {
                expression_attribute_values.insert(":sk1".to_string(), from.into());
                expression_attribute_values.insert(":sk2".to_string(), to.into());
                format!("{key_placeholder} between :sk1 and :sk2")
            }
            Self::BeginsWith(prefix) => {
                expression_attribute_values.insert(":sk".to_string(), prefix.into());
                format!("begins_with({key_placeholder}, :sk)")
            }
            Self::Equals(value)
            | Self::LessThan(value)
            | Self::LessThanOrEqual(value)
            | Self::GreaterThan(value)
            | Self::GreaterThanOrEqual(value) => {
                expression_attribute_values.insert(":sk".to_string(), value.into());
                format!("{key_placeholder} {kind} :sk")
            }
        };
        (expression, expression_attribute_values)
    }
}

/// Key condition of a query: partition key equality plus an optional sort key condition.
///
/// ```rust
/// use dynamodb_query::common::{condition, key};
///
/// let predicate = condition::QueryPredicate {
///     partition_key: key::Key {
///         name: "pk".to_string(),
///         value: key::KeyValue::String("cust#1".to_string()),
///     },
///     sort_key: Some(key::Key {
///         name: "sk".to_string(),
///         value: condition::SortKeyCondition::GreaterThanOrEqual(
///             key::KeyValue::Number("100".to_string()),
///         ),
///     }),
/// };
/// let rendered = predicate.render();
/// assert_eq!(rendered.expression, "#pk = :pk and #sk >= :sk");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryPredicate {
    /// The partition key and the value it must equal.
    pub partition_key: key::Key<key::KeyValue>,
    /// The sort key and the condition it must satisfy.
    pub sort_key: Option<key::Key<SortKeyCondition>>,
}

impl QueryPredicate {
    /// Render the key-condition expression with its placeholder maps.
    pub fn render(self) -> common::ExpressionInput {
        let partition_key = common::ExpressionInput {
            expression: "#pk = :pk".to_string(),
            expression_attribute_names: collections::HashMap::from([(
                "#pk".to_string(),
                self.partition_key.name,
            )]),
            expression_attribute_values: collections::HashMap::from([(
                ":pk".to_string(),
                self.partition_key.value.into(),
            )]),
        };
        let mut operations = vec![partition_key];
        if let Some(sort_key) = self.sort_key {
            let (expression, expression_attribute_values) = sort_key.value.get_expression("#sk");
            operations.push(common::ExpressionInput {
                expression,
                expression_attribute_names: collections::HashMap::from([(
                    "#sk".to_string(),
                    sort_key.name,
                )]),
                expression_attribute_values,
            });
        }
        common::ExpressionInput::merge(AND, operations)
    }
}
