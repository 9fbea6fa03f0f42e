//! Offset/limit paging with a single-flight "load more" latch.

use crate::domain::SearchPage;

/// Paging cursor for one result list.
///
/// `begin` hands out the next offset only while no page request is in
/// flight and more results remain, which suppresses duplicate concurrent
/// "load more" triggers for the same offset. The caller requests the
/// next offset only after the prior page resolved through `complete`.
#[derive(Debug, Clone)]
pub struct PageCursor {
    rows: u32,
    next_start: u32,
    num_found: Option<u64>,
    in_flight: bool,
}

impl PageCursor {
    pub fn new(rows: u32) -> Self {
        Self {
            rows,
            next_start: 0,
            num_found: None,
            in_flight: false,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Whether further pages remain. True before the first page resolves.
    pub fn has_more(&self) -> bool {
        match self.num_found {
            None => true,
            Some(total) => (self.next_start as u64) < total,
        }
    }

    /// Claim the next offset, or None while a request is in flight or
    /// the list is exhausted.
    pub fn begin(&mut self) -> Option<u32> {
        if self.in_flight || !self.has_more() {
            return None;
        }
        self.in_flight = true;
        Some(self.next_start)
    }

    /// Record a resolved page and release the latch.
    pub fn complete(&mut self, page: &SearchPage) {
        self.in_flight = false;
        self.num_found = Some(page.num_found);
        self.next_start = page.start + page.records.len() as u32;
    }

    /// Release the latch after a failed request without advancing.
    pub fn abort(&mut self) {
        self.in_flight = false;
    }

    /// Start over, e.g. after any filter change.
    pub fn reset(&mut self) {
        self.next_start = 0;
        self.num_found = None;
        self.in_flight = false;
    }
}
