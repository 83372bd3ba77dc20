use crate::error::Result;
use crate::interactive::prompt::Prompter;
use crate::read::common::{Cursor, Item, Page};

use std::future::Future;

const LOAD_MORE: &str = "There are more items available, load more?";

/// Totals of a finished paginated read.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    /// Pages fetched and shown.
    pub pages: usize,
    /// Items shown across all pages.
    pub items: usize,
}

/// Read page after page until the store runs out of data or the operator stops.
///
/// `execute` is called with `None` first and then with the cursor of the
/// previous page. Every page is handed to `on_page`. When a page carries a
/// cursor the operator is asked whether to continue (default yes). Errors from
/// `execute` or `on_page` end the read unchanged.
pub async fn read_all<E, F, O, P>(mut execute: E, mut on_page: O, prompter: &mut P) -> Result<Summary>
where
    E: FnMut(Option<Cursor>) -> F,
    F: Future<Output = Result<Page>>,
    O: FnMut(&[Item]) -> Result<()>,
    P: Prompter + ?Sized,
{
    let mut summary = Summary::default();
    let mut cursor = None;
    loop {
        let page = execute(cursor.take()).await?;
        on_page(&page.items)?;
        summary.pages += 1;
        summary.items += page.items.len();
        #[cfg(feature = "tracing")]
        tracing::debug!(
            page = summary.pages,
            items = page.items.len(),
            has_more = page.has_more(),
            "page shown"
        );
        let Some(next) = page.cursor else {
            break;
        };
        if !prompter.confirm(LOAD_MORE, true)? {
            break;
        }
        cursor = Some(next);
    }
    Ok(summary)
}
