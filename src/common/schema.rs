use crate::common::key::ScalarType;
use crate::error::{Error, Result};

use aws_sdk_dynamodb::types;
use std::{collections, fmt};

/// Key structure of a table or index: a partition key and an optional sort key.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct KeySchema {
    /// Name of the partition (HASH) key attribute.
    pub partition_key: String,
    /// Name of the sort (RANGE) key attribute, if any.
    pub sort_key: Option<String>,
}

impl TryFrom<&[types::KeySchemaElement]> for KeySchema {
    type Error = Error;

    fn try_from(elements: &[types::KeySchemaElement]) -> Result<Self> {
        let find = |key_type: types::KeyType| {
            elements
                .iter()
                .find(|element| *element.key_type() == key_type)
                .map(|element| element.attribute_name().to_string())
        };
        let partition_key = find(types::KeyType::Hash).ok_or(Error::MissingPartitionKey)?;
        let sort_key = find(types::KeyType::Range);
        Ok(Self {
            partition_key,
            sort_key,
        })
    }
}

/// Whether a secondary index is global or local.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IndexKind {
    /// Global secondary index.
    Global,
    /// Local secondary index.
    Local,
}

/// Secondary index of a table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IndexDescriptor {
    /// The index name.
    pub name: String,
    /// Global or local.
    pub kind: IndexKind,
    /// The index's own key schema.
    pub key_schema: KeySchema,
}

/// Everything the session needs to know about a table, fetched once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableDescriptor {
    /// The table name.
    pub name: String,
    /// Attribute name to scalar type, for every key attribute of the table and its indexes.
    pub attribute_definitions: collections::HashMap<String, ScalarType>,
    /// The table's primary key schema.
    pub key_schema: KeySchema,
    /// Secondary indexes: global ones first, then local ones, each in store order.
    pub indexes: Vec<IndexDescriptor>,
}

impl TableDescriptor {
    /// Scalar type of a key attribute.
    pub fn attribute_type(&self, name: &str) -> Result<ScalarType> {
        self.attribute_definitions
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownAttribute(name.to_string()))
    }
}

impl TryFrom<&types::TableDescription> for TableDescriptor {
    type Error = Error;

    fn try_from(description: &types::TableDescription) -> Result<Self> {
        let name = description.table_name().unwrap_or_default().to_string();
        let mut attribute_definitions = collections::HashMap::new();
        for definition in description.attribute_definitions() {
            let scalar_type = ScalarType::try_from(definition.attribute_type())?;
            attribute_definitions.insert(definition.attribute_name().to_string(), scalar_type);
        }
        let key_schema = KeySchema::try_from(description.key_schema())?;
        let mut indexes = Vec::new();
        for index in description.global_secondary_indexes() {
            indexes.push(IndexDescriptor {
                name: index.index_name().unwrap_or_default().to_string(),
                kind: IndexKind::Global,
                key_schema: KeySchema::try_from(index.key_schema())?,
            });
        }
        for index in description.local_secondary_indexes() {
            indexes.push(IndexDescriptor {
                name: index.index_name().unwrap_or_default().to_string(),
                kind: IndexKind::Local,
                key_schema: KeySchema::try_from(index.key_schema())?,
            });
        }
        Ok(Self {
            name,
            attribute_definitions,
            key_schema,
            indexes,
        })
    }
}

/// A readable target: the table itself or one of its secondary indexes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IndexChoice {
    /// The base table, read through its primary key schema.
    Table {
        /// The table name.
        name: String,
        /// The primary key schema.
        key_schema: KeySchema,
    },
    /// A secondary index.
    Index(IndexDescriptor),
}

impl IndexChoice {
    /// The key schema reads against this choice use.
    pub fn key_schema(&self) -> &KeySchema {
        match self {
            Self::Table { key_schema, .. } => key_schema,
            Self::Index(index) => &index.key_schema,
        }
    }

    /// The index name to send with a request, `None` for the base table.
    pub fn index_name(&self) -> Option<&str> {
        match self {
            Self::Table { .. } => None,
            Self::Index(index) => Some(&index.name),
        }
    }

    /// Human-readable label, e.g. `[Table] orders: pk, sk`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for IndexChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, name) = match self {
            Self::Table { name, .. } => ("Table", name.as_str()),
            Self::Index(index) => ("Index", index.name.as_str()),
        };
        let key_schema = self.key_schema();
        write!(f, "[{kind}] {name}: {}", key_schema.partition_key)?;
        if let Some(sort_key) = &key_schema.sort_key {
            write!(f, ", {sort_key}")?;
        }
        Ok(())
    }
}

/// List every readable target of a table: the table first, then each secondary index.
pub fn list_choices(descriptor: &TableDescriptor) -> Vec<IndexChoice> {
    let mut choices = Vec::with_capacity(descriptor.indexes.len() + 1);
    choices.push(IndexChoice::Table {
        name: descriptor.name.clone(),
        key_schema: descriptor.key_schema.clone(),
    });
    choices.extend(descriptor.indexes.iter().cloned().map(IndexChoice::Index));
    choices
}

/// Find the choice whose label matches exactly.
pub fn find_choice<'a>(choices: &'a [IndexChoice], label: &str) -> Option<&'a IndexChoice> {
    choices.iter().find(|choice| choice.label() == label)
}
