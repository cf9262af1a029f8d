//! Skip/limit pagination arithmetic for catalog listings.

use serde::Serialize;

use super::candy::{Candy, CandyFilter};

/// Number of candies shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// A validated, 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Page 0 is treated as page 1, and a zero page size as 1.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Parse a raw `page` query value. Missing or unparseable input yields page 1.
    pub fn from_query(raw: Option<&str>, page_size: u32) -> Self {
        let page = raw.and_then(|p| p.trim().parse::<u32>().ok()).unwrap_or(1);
        Self::new(page, page_size)
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of matching items to skip.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    pub const fn limit(&self) -> u32 {
        self.page_size
    }
}

/// `ceil(total / page_size)`; zero when there is nothing to show.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    let pages = total.div_ceil(u64::from(page_size.max(1)));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// One page of a catalog listing plus the metadata needed to render a pager.
#[derive(Debug, Clone, Serialize)]
pub struct CandyPage {
    pub items: Vec<Candy>,
    pub current_page: u32,
    pub total_pages: u32,
    pub total: u64,
    pub page_size: u32,
    pub filter: CandyFilter,
}

impl CandyPage {
    pub fn new(items: Vec<Candy>, request: PageRequest, total: u64, filter: CandyFilter) -> Self {
        Self {
            items,
            current_page: request.page(),
            total_pages: total_pages(total, request.page_size()),
            total,
            page_size: request.page_size(),
            filter,
        }
    }

    pub const fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub const fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}
