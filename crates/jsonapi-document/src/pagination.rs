//! Pagination link construction for collection documents.
//!
//! Builds the `first`/`prev`/`next`/`last` link set from page state the
//! caller already holds. This is pure [`Links`] construction; parsing page
//! parameters out of a request is the transport layer's concern.

use jsonapi_model::{Link, Links};

/// Query-parameter spelling used when rendering page links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// `page[number]`/`page[size]` parameters with one-based page numbers.
    PageNumber,
    /// `page[offset]`/`page[limit]` parameters with zero-based offsets.
    Offset,
}

/// Page state reported by the caller for a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// One-based number of the current page.
    pub page_number: u64,
    /// Number of resources per page.
    pub page_size: u64,
    /// Total number of resources in the collection.
    pub resource_count: u64,
}

impl Pagination {
    /// Total number of pages; a collection always has at least one page.
    pub fn page_count(&self) -> u64 {
        if self.page_size == 0 {
            return 1;
        }
        self.resource_count.div_ceil(self.page_size).max(1)
    }
}

/// Builds the pagination link set for a collection document.
///
/// `base_url` is used verbatim; the page parameters become the only query
/// string. `first` and `last` are always present; `prev` is omitted on the
/// first page and `next` on the last. A current page outside the valid
/// range is clamped before neighbors are computed.
pub fn pagination_links(strategy: Strategy, base_url: &str, pagination: &Pagination) -> Links {
    let page_count = pagination.page_count();
    let current = pagination.page_number.clamp(1, page_count);

    let mut links = Links::new();
    links.insert(
        "first",
        Link::url(page_url(strategy, base_url, 1, pagination.page_size)),
    );
    if current > 1 {
        links.insert(
            "prev",
            Link::url(page_url(strategy, base_url, current - 1, pagination.page_size)),
        );
    }
    if current < page_count {
        links.insert(
            "next",
            Link::url(page_url(strategy, base_url, current + 1, pagination.page_size)),
        );
    }
    links.insert(
        "last",
        Link::url(page_url(strategy, base_url, page_count, pagination.page_size)),
    );
    links
}

fn page_url(strategy: Strategy, base_url: &str, page_number: u64, page_size: u64) -> String {
    match strategy {
        Strategy::PageNumber => {
            format!("{base_url}?page[number]={page_number}&page[size]={page_size}")
        }
        Strategy::Offset => {
            let offset = (page_number - 1) * page_size;
            format!("{base_url}?page[offset]={offset}&page[limit]={page_size}")
        }
    }
}
