//! Page-number transitions bounded by `[1, max(total_pages, 1)]`.

/// Current page and the total reported by the last successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: u32,
    total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 0,
        }
    }
}

impl Pagination {
    /// Build a pagination, clamping `page` into range.
    pub fn new(page: u32, total_pages: u32) -> Self {
        let mut pagination = Self { page: 1, total_pages };
        pagination.page = pagination.clamp(page);
        pagination
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// Highest reachable page; 1 while the total is still unknown.
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    pub fn clamp(&self, page: u32) -> u32 {
        page.clamp(1, self.last_page())
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page()
    }

    /// One page back; unchanged on page 1.
    pub fn previous(self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self
        }
    }

    /// One page forward; unchanged on the last page.
    pub fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1).min(self.last_page()),
            ..self
        }
    }

    /// Jump to `page`, clamped.
    pub fn go_to(self, page: u32) -> Self {
        Self {
            page: self.clamp(page),
            ..self
        }
    }
}
