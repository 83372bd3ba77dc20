use crate::read;

use aws_sdk_dynamodb::{Client, error, operation};

/// scan operation
#[derive(Clone, Debug, Default, PartialEq)]
struct ScanInput {
    read_operation: read::common::ReadInput,
}

/// Scan operation, reading a single page.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use dynamodb_query::read;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let scan = read::scan::Scan {
///     read_args: read::common::ReadArgs {
///         table_name: "users".to_string(),
///         limit: Some(25),
///         ..Default::default()
///     },
/// };
/// let page = scan.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scan {
    /// Table, index, page size and cursor.
    pub read_args: read::common::ReadArgs,
}

impl From<Scan> for ScanInput {
    fn from(scan: Scan) -> Self {
        Self {
            read_operation: scan.read_args.into(),
        }
    }
}

impl Scan {
    /// Execute the scan and return one page.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_query.scan", skip(client), err)
    )]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<read::common::Page, error::SdkError<operation::scan::ScanError>> {
        let scan: ScanInput = self.into();
        let output = crate::apply_read_input!(client.scan(), scan.read_operation)
            .send()
            .await?;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            count = output.count,
            scanned_count = output.scanned_count,
            "scan page received"
        );
        Ok(crate::get_page!(output))
    }
}
