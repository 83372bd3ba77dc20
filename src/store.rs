//! The remote table store the session reads from.

use crate::common::schema::TableDescriptor;
use crate::error::{Error, Result};
use crate::read::{common::Page, query::Query, scan::Scan};

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;

/// Operations the session needs from the store.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Names of every table in the account and region.
    async fn list_tables(&self) -> Result<Vec<String>>;

    /// Key structure and indexes of a table.
    async fn describe_table(&self, table_name: &str) -> Result<TableDescriptor>;

    /// Read one page of a scan.
    async fn scan(&self, scan: Scan) -> Result<Page>;

    /// Read one page of a query.
    async fn query(&self, query: Query) -> Result<Page>;
}

#[async_trait]
impl TableStore for Client {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_query.list_tables", skip(self), err)
    )]
    async fn list_tables(&self) -> Result<Vec<String>> {
        let mut table_names = Vec::new();
        let mut paginator = self.list_tables().into_paginator().send();
        while let Some(page) = paginator.next().await {
            let page = page.map_err(Error::ListTables)?;
            table_names.extend(page.table_names.unwrap_or_default());
        }
        Ok(table_names)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_query.describe_table", skip(self), err)
    )]
    async fn describe_table(&self, table_name: &str) -> Result<TableDescriptor> {
        let output = self
            .describe_table()
            .table_name(table_name)
            .send()
            .await
            .map_err(|source| Error::DescribeTable {
                table_name: table_name.to_string(),
                source,
            })?;
        let description = output
            .table()
            .ok_or_else(|| Error::MissingTableDescription(table_name.to_string()))?;
        TableDescriptor::try_from(description)
    }

    async fn scan(&self, scan: Scan) -> Result<Page> {
        scan.send(self).await.map_err(Error::Scan)
    }

    async fn query(&self, query: Query) -> Result<Page> {
        query.send(self).await.map_err(Error::Query)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    use crate::read::ReadRequest;

    use std::{collections, sync};

    /// In-memory store serving a fixed list of pages and recording every request.
    #[derive(Debug, Default)]
    pub(crate) struct MemoryStore {
        pub(crate) tables: Vec<TableDescriptor>,
        pages: sync::Mutex<collections::VecDeque<Page>>,
        requests: sync::Mutex<Vec<ReadRequest>>,
    }

    impl MemoryStore {
        pub(crate) fn new(tables: Vec<TableDescriptor>, pages: Vec<Page>) -> Self {
            Self {
                tables,
                pages: sync::Mutex::new(pages.into()),
                ..Default::default()
            }
        }

        pub(crate) fn requests(&self) -> Vec<ReadRequest> {
            self.requests.lock().unwrap().clone()
        }

        fn next_page(&self, request: ReadRequest) -> Page {
            self.requests.lock().unwrap().push(request);
            self.pages.lock().unwrap().pop_front().unwrap_or_default()
        }
    }

    #[async_trait]
    impl TableStore for MemoryStore {
        async fn list_tables(&self) -> Result<Vec<String>> {
            Ok(self.tables.iter().map(|table| table.name.clone()).collect())
        }

        async fn describe_table(&self, table_name: &str) -> Result<TableDescriptor> {
            self.tables
                .iter()
                .find(|table| table.name == table_name)
                .cloned()
                .ok_or_else(|| Error::MissingTableDescription(table_name.to_string()))
        }

        async fn scan(&self, scan: Scan) -> Result<Page> {
            Ok(self.next_page(ReadRequest::Scan(scan)))
        }

        async fn query(&self, query: Query) -> Result<Page> {
            Ok(self.next_page(ReadRequest::Query(query)))
        }
    }
}
