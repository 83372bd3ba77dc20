use crate::common::condition::{ComparisonKind, QueryPredicate, SortKeyCondition};
use crate::common::key::{Key, KeyValue, ScalarType};
use crate::common::schema::KeySchema;
use crate::error::Result;
use crate::interactive::prompt::Prompter;

/// Collects a query's key condition from the operator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PredicateBuilder {
    /// Send empty input as NULL instead of an empty value.
    pub convert_empty_values: bool,
}

impl PredicateBuilder {
    /// Ask for a partition key value and, when the schema has a sort key, a
    /// comparison and its operands.
    ///
    /// `attribute_type_of` resolves the scalar type of a key attribute.
    /// Operands are coerced with the sort key's type the same way the
    /// partition key value is.
    pub fn build<F, P>(
        &self,
        key_schema: &KeySchema,
        attribute_type_of: F,
        prompter: &mut P,
    ) -> Result<QueryPredicate>
    where
        F: Fn(&str) -> Result<ScalarType>,
        P: Prompter + ?Sized,
    {
        let partition_key_name = &key_schema.partition_key;
        let partition_key_type = attribute_type_of(partition_key_name.as_str())?;
        let raw = prompter.input(&format!("Partition key ({partition_key_name})"))?;
        let partition_key = Key {
            name: partition_key_name.clone(),
            value: KeyValue::coerce(&raw, partition_key_type, self.convert_empty_values)?,
        };

        let sort_key = match &key_schema.sort_key {
            Some(sort_key_name) => {
                let sort_key_type = attribute_type_of(sort_key_name.as_str())?;
                self.build_sort_key(sort_key_name, sort_key_type, prompter)?
            }
            None => None,
        };
        Ok(QueryPredicate {
            partition_key,
            sort_key,
        })
    }

    fn build_sort_key<P: Prompter + ?Sized>(
        &self,
        name: &str,
        scalar_type: ScalarType,
        prompter: &mut P,
    ) -> Result<Option<Key<SortKeyCondition>>> {
        let kinds = ComparisonKind::allowed_for(scalar_type);
        let labels: Vec<String> = kinds.iter().map(ToString::to_string).collect();
        let default = kinds
            .iter()
            .position(|kind| *kind == ComparisonKind::None)
            .unwrap_or_default();
        let position = prompter.select(&format!("Sort key ({name}) comparison"), &labels, default)?;
        let kind = kinds.get(position).copied().unwrap_or_default();

        let messages = match kind {
            ComparisonKind::None => vec![],
            ComparisonKind::Between => vec![format!("{name} from value"), format!("{name} to value")],
            _ => vec![format!("{name} value")],
        };
        let mut operands = Vec::with_capacity(messages.len());
        for message in messages {
            let raw = prompter.input(&message)?;
            operands.push(KeyValue::coerce(&raw, scalar_type, self.convert_empty_values)?);
        }
        let condition = SortKeyCondition::new(kind, operands)?;
        Ok(condition.map(|value| Key {
            name: name.to_string(),
            value,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::common::schema;
    use crate::error::Error;
    use crate::interactive::prompt::testing::{Answer, ScriptedPrompter};

    use rstest::rstest;
    use std::collections;

    fn types_of(
        types: &[(&str, ScalarType)],
    ) -> impl Fn(&str) -> Result<ScalarType> + use<> {
        let types: collections::HashMap<String, ScalarType> = types
            .iter()
            .map(|(name, scalar_type)| (name.to_string(), *scalar_type))
            .collect();
        move |name: &str| -> Result<ScalarType> {
            types
                .get(name)
                .copied()
                .ok_or_else(|| Error::UnknownAttribute(name.to_string()))
        }
    }

    fn key_schema(sort_key: Option<&str>) -> KeySchema {
        schema::KeySchema {
            partition_key: "pk".to_string(),
            sort_key: sort_key.map(str::to_string),
        }
    }

    fn build(
        sort_key_type: ScalarType,
        answers: Vec<Answer>,
    ) -> (Result<QueryPredicate>, ScriptedPrompter) {
        let mut prompter = ScriptedPrompter::new(answers);
        let actual = PredicateBuilder::default().build(
            &key_schema(Some("sk")),
            types_of(&[("pk", ScalarType::String), ("sk", sort_key_type)]),
            &mut prompter,
        );
        (actual, prompter)
    }

    #[test]
    fn test_partition_key_only_never_asks_for_comparison() {
        let mut prompter = ScriptedPrompter::new(vec![Answer::Input("42")]);
        let actual = PredicateBuilder::default()
            .build(
                &key_schema(None),
                types_of(&[("pk", ScalarType::Number)]),
                &mut prompter,
            )
            .unwrap();
        assert_eq!(
            actual,
            QueryPredicate {
                partition_key: Key {
                    name: "pk".to_string(),
                    value: KeyValue::Number("42".to_string()),
                },
                sort_key: None,
            }
        );
        assert!(prompter.menus().is_empty());
        assert_eq!(prompter.messages(), &["Partition key (pk)".to_string()]);
    }

    #[test]
    fn test_orders_greater_than_or_equal() {
        let (actual, prompter) = build(
            ScalarType::Number,
            vec![Answer::Input("cust#1"), Answer::Pick(">="), Answer::Input("100")],
        );
        let actual = actual.unwrap();
        assert_eq!(
            actual,
            QueryPredicate {
                partition_key: Key {
                    name: "pk".to_string(),
                    value: KeyValue::String("cust#1".to_string()),
                },
                sort_key: Some(Key {
                    name: "sk".to_string(),
                    value: SortKeyCondition::GreaterThanOrEqual(KeyValue::Number(
                        "100".to_string()
                    )),
                }),
            }
        );
        assert_eq!(
            prompter.messages(),
            &[
                "Partition key (pk)".to_string(),
                "Sort key (sk) comparison".to_string(),
                "sk value".to_string(),
            ]
        );
        assert_eq!(actual.render().expression, "#pk = :pk and #sk >= :sk");
    }

    #[rstest]
    #[case::string(ScalarType::String, true)]
    #[case::number(ScalarType::Number, false)]
    fn test_menu_offers_begins_with_for_strings_only(
        #[case] sort_key_type: ScalarType,
        #[case] offered: bool,
    ) {
        let (actual, prompter) = build(sort_key_type, vec![Answer::Input("a"), Answer::Default]);
        assert!(actual.is_ok());
        let menu = &prompter.menus()[0];
        assert_eq!(menu[0], "none");
        assert_eq!(menu.contains(&"begins_with".to_string()), offered);
    }

    #[test]
    fn test_default_comparison_is_none() {
        let (actual, prompter) = build(ScalarType::String, vec![Answer::Input("a"), Answer::Default]);
        assert_eq!(actual.unwrap().sort_key, None);
        assert!(prompter.is_exhausted());
    }

    #[test]
    fn test_between_asks_for_both_bounds() {
        let (actual, prompter) = build(
            ScalarType::Number,
            vec![
                Answer::Input("a"),
                Answer::Pick("between"),
                Answer::Input("5"),
                Answer::Input("10"),
            ],
        );
        let rendered = actual.unwrap().render();
        assert_eq!(rendered.expression, "#pk = :pk and #sk between :sk1 and :sk2");
        assert_eq!(
            &prompter.messages()[2..],
            &["sk from value".to_string(), "sk to value".to_string()]
        );
    }

    #[test]
    fn test_begins_with_keeps_string_operand() {
        let (actual, _) = build(
            ScalarType::String,
            vec![Answer::Input("a"), Answer::Pick("begins_with"), Answer::Input("2024-")],
        );
        assert_eq!(
            actual.unwrap().sort_key.map(|key| key.value),
            Some(SortKeyCondition::BeginsWith(KeyValue::String("2024-".to_string())))
        );
    }

    #[test]
    fn test_invalid_number_aborts() {
        let (actual, prompter) = build(
            ScalarType::Number,
            vec![Answer::Input("a"), Answer::Pick("<"), Answer::Input("ten")],
        );
        assert!(matches!(actual, Err(Error::InvalidNumber(input)) if input == "ten"));
        assert!(prompter.is_exhausted());
    }

    #[test]
    fn test_unknown_attribute_aborts_before_prompting() {
        let mut prompter = ScriptedPrompter::new(vec![]);
        let actual = PredicateBuilder::default().build(
            &key_schema(None),
            types_of(&[]),
            &mut prompter,
        );
        assert!(matches!(actual, Err(Error::UnknownAttribute(name)) if name == "pk"));
        assert!(prompter.messages().is_empty());
    }

    #[test]
    fn test_convert_empty_values() {
        let mut prompter = ScriptedPrompter::new(vec![Answer::Default]);
        let builder = PredicateBuilder {
            convert_empty_values: true,
        };
        let actual = builder
            .build(
                &key_schema(None),
                types_of(&[("pk", ScalarType::String)]),
                &mut prompter,
            )
            .unwrap();
        assert_eq!(actual.partition_key.value, KeyValue::Null);
    }
}
