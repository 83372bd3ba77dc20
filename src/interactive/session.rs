use crate::common::condition::QueryPredicate;
use crate::common::schema::{self, IndexChoice, TableDescriptor};
use crate::display;
use crate::error::{Error, Result};
use crate::interactive::predicate::PredicateBuilder;
use crate::interactive::prompt::Prompter;
use crate::read::{self, Operation, ReadRequest, paginate};
use crate::store::TableStore;

use std::io;

const PICK_TABLE: &str = "Pick a table";
const PICK_OPERATION: &str = "Type of operation";
const PICK_INDEX: &str = "Pick an index";

fn pick<T>(mut choices: Vec<T>, position: usize, menu: &str) -> Result<T> {
    if position >= choices.len() {
        return Err(Error::SelectionOutOfRange {
            menu: menu.to_string(),
            position,
        });
    }
    Ok(choices.swap_remove(position))
}

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: i32 = 25;

/// Startup settings of a session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionOptions {
    /// Table to read; when `None` the operator picks one from the store's tables.
    pub table_name: Option<String>,
    /// Maximum number of items evaluated per page.
    pub page_size: i32,
    /// Send empty key input as NULL instead of an empty value.
    pub convert_empty_values: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            table_name: None,
            page_size: DEFAULT_PAGE_SIZE,
            convert_empty_values: false,
        }
    }
}

/// The read a session performs, with the key condition a query needs.
#[derive(Clone, Debug, PartialEq)]
pub enum PlannedRead {
    /// Select items by key condition.
    Query(QueryPredicate),
    /// Read every item.
    Scan,
}

impl PlannedRead {
    /// The operation this read performs.
    pub fn operation(&self) -> Operation {
        match self {
            Self::Query(_) => Operation::Query,
            Self::Scan => Operation::Scan,
        }
    }
}

/// Everything decided before reading starts. Fixed for the rest of the session.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionPlan {
    /// The table being read.
    pub table: TableDescriptor,
    /// The table itself or one of its indexes.
    pub choice: IndexChoice,
    /// Scan, or Query with its key condition.
    pub read: PlannedRead,
    /// Maximum number of items evaluated per page.
    pub page_size: i32,
}

impl SessionPlan {
    /// Request template for the first page.
    pub fn request(&self) -> ReadRequest {
        let read_args = read::common::ReadArgs {
            index_name: self.choice.index_name().map(str::to_string),
            limit: Some(self.page_size),
            table_name: self.table.name.clone(),
            ..Default::default()
        };
        match &self.read {
            PlannedRead::Query(predicate) => ReadRequest::Query(read::query::Query {
                predicate: predicate.clone(),
                read_args,
            }),
            PlannedRead::Scan => ReadRequest::Scan(read::scan::Scan { read_args }),
        }
    }
}

/// One interactive run: pick a table, an operation and an index, build the
/// key condition for queries, then page through the results.
#[derive(Debug)]
pub struct Session<S, P> {
    store: S,
    prompter: P,
    options: SessionOptions,
}

impl<S: TableStore, P: Prompter> Session<S, P> {
    /// Create a session reading from `store` and asking `prompter`.
    pub fn new(store: S, prompter: P, options: SessionOptions) -> Self {
        Self {
            store,
            prompter,
            options,
        }
    }

    /// Run every decision step and return the resulting plan.
    ///
    /// Steps run strictly in order; the first failing step ends the session.
    pub async fn plan(&mut self) -> Result<SessionPlan> {
        let table_name = self.select_table().await?;
        let operation = self.select_operation()?;
        let table = self.store.describe_table(&table_name).await?;
        let choice = self.select_index(&table)?;
        let read = match operation {
            Operation::Query => PlannedRead::Query(self.build_predicate(&table, &choice)?),
            Operation::Scan => PlannedRead::Scan,
        };
        #[cfg(feature = "tracing")]
        tracing::info!(
            table = %table.name,
            %operation,
            index = %choice,
            "session planned"
        );
        Ok(SessionPlan {
            table,
            choice,
            read,
            page_size: self.options.page_size,
        })
    }

    /// Plan the session, then read and render pages to `out` until done.
    pub async fn run<W: io::Write>(&mut self, out: &mut W) -> Result<paginate::Summary> {
        let plan = self.plan().await?;
        let template = plan.request();
        let store = &self.store;
        let summary = paginate::read_all(
            |cursor| template.with_cursor(cursor).send(store),
            |items| display::render_items(&mut *out, items),
            &mut self.prompter,
        )
        .await?;
        #[cfg(feature = "tracing")]
        tracing::info!(pages = summary.pages, items = summary.items, "session done");
        Ok(summary)
    }

    async fn select_table(&mut self) -> Result<String> {
        if let Some(table_name) = &self.options.table_name {
            return Ok(table_name.clone());
        }
        let table_names = self.store.list_tables().await?;
        if table_names.is_empty() {
            return Err(Error::NoTables);
        }
        let position = self.prompter.select(PICK_TABLE, &table_names, 0)?;
        pick(table_names, position, PICK_TABLE)
    }

    fn select_operation(&mut self) -> Result<Operation> {
        let labels: Vec<String> = Operation::ALL.iter().map(ToString::to_string).collect();
        let position = self.prompter.select(PICK_OPERATION, &labels, 0)?;
        pick(Operation::ALL.to_vec(), position, PICK_OPERATION)
    }

    fn select_index(&mut self, table: &TableDescriptor) -> Result<IndexChoice> {
        let choices = schema::list_choices(table);
        let labels: Vec<String> = choices.iter().map(IndexChoice::label).collect();
        let position = self.prompter.select(PICK_INDEX, &labels, 0)?;
        let label = pick(labels, position, PICK_INDEX)?;
        schema::find_choice(&choices, &label)
            .cloned()
            .ok_or_else(|| Error::SelectionOutOfRange {
                menu: PICK_INDEX.to_string(),
                position,
            })
    }

    fn build_predicate(
        &mut self,
        table: &TableDescriptor,
        choice: &IndexChoice,
    ) -> Result<QueryPredicate> {
        let builder = PredicateBuilder {
            convert_empty_values: self.options.convert_empty_values,
        };
        let predicate = builder.build(
            choice.key_schema(),
            |name: &str| table.attribute_type(name),
            &mut self.prompter,
        )?;
        #[cfg(feature = "tracing")]
        tracing::debug!(key_condition = %predicate.clone().render().expression, "predicate built");
        Ok(predicate)
    }
}
