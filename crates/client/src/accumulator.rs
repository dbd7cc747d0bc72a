//! Multi-page accumulation for one logical query stream.
//!
//! A query stream is identified by its [`QueryKey`]: endpoint, settled
//! search term, and filter parameters. Changing any part of the key
//! discards accumulated pages and restarts pagination from page 1.
//!
//! Fetches are strictly sequential: the next page number comes from the
//! previous response, so out-of-order pages cannot occur. Exclusive
//! `&mut self` borrows are the Rust rendition of the original's
//! single-threaded event-loop guarantee; a response can never race a key
//! change because the key cannot change while a fetch holds the borrow.

use crate::error::ClientError;
use crate::fetcher::{FetchedPage, PageRequest, PageSource};
use crate::label::SelectOption;

/// Identity of one logical paginated query stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryKey {
    pub endpoint: String,
    /// Settled search term; empty means "no search".
    pub search: String,
    /// Filter parameters, sorted for order-insensitive comparison.
    pub params: Vec<(String, String)>,
}

impl QueryKey {
    pub fn new(
        endpoint: impl Into<String>,
        search: impl Into<String>,
        mut params: Vec<(String, String)>,
    ) -> Self {
        params.sort();
        Self {
            endpoint: endpoint.into(),
            search: search.into(),
            params,
        }
    }
}

/// Accumulates option pages for the current [`QueryKey`].
pub struct PagedSearch<S: PageSource> {
    source: S,
    key: QueryKey,
    options: Vec<SelectOption>,
    next_page: Option<i64>,
    total_pages: Option<i64>,
    first_page_loaded: bool,
}

impl<S: PageSource> PagedSearch<S> {
    /// Create an empty accumulator for the given endpoint.
    pub fn new(source: S, endpoint: impl Into<String>) -> Self {
        Self {
            source,
            key: QueryKey::new(endpoint, "", Vec::new()),
            options: Vec::new(),
            next_page: None,
            total_pages: None,
            first_page_loaded: false,
        }
    }

    /// Flattened options across all fetched pages, earliest page first.
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Whether the first page for the current key has arrived.
    pub fn first_page_loaded(&self) -> bool {
        self.first_page_loaded
    }

    /// Whether a further page exists after the ones fetched so far.
    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    /// Total page count reported by the last response, if any.
    pub fn total_pages(&self) -> Option<i64> {
        self.total_pages
    }

    /// The current query key.
    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Re-key on a settled search term.
    pub fn set_search(&mut self, term: &str) {
        let key = QueryKey {
            search: term.to_string(),
            ..self.key.clone()
        };
        self.set_key(key);
    }

    /// Re-key on a new set of filter parameters.
    pub fn set_params(&mut self, params: Vec<(String, String)>) {
        let key = QueryKey::new(self.key.endpoint.clone(), self.key.search.clone(), params);
        self.set_key(key);
    }

    /// Re-key on a different endpoint.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        let key = QueryKey {
            endpoint: endpoint.into(),
            ..self.key.clone()
        };
        self.set_key(key);
    }

    fn set_key(&mut self, key: QueryKey) {
        if key != self.key {
            self.key = key;
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.options.clear();
        self.next_page = None;
        self.total_pages = None;
        self.first_page_loaded = false;
    }

    /// Fetch the first page for the current key unless it already arrived.
    pub async fn ensure_first_page(&mut self) -> Result<(), ClientError> {
        if self.first_page_loaded {
            return Ok(());
        }
        self.load_next_page().await
    }

    /// Fetch the next page for the current key and append its options.
    ///
    /// A no-op once the last response reported no further pages. On error
    /// the accumulated state is left untouched, so the caller may retry.
    pub async fn load_next_page(&mut self) -> Result<(), ClientError> {
        let page_number = if self.first_page_loaded {
            match self.next_page {
                Some(page) => page,
                None => return Ok(()),
            }
        } else {
            1
        };

        let request = PageRequest {
            endpoint: self.key.endpoint.clone(),
            page: page_number,
            search: (!self.key.search.is_empty()).then(|| self.key.search.clone()),
            params: self.key.params.clone(),
        };

        let page: FetchedPage = self.source.fetch_page(&request).await?;

        self.options.extend(page.options);
        self.next_page = page.next_page;
        self.total_pages = page.total_pages;
        self.first_page_loaded = true;
        Ok(())
    }
}
