//! Page-size handling for list operations.
//!
//! Lists always start at the first page; only the size is caller-controlled.

/// Largest page a single list call returns.
pub const MAX_PAGE_SIZE: u64 = 500;

/// First-page request of `size` rows.
#[derive(Clone, Copy, Debug)]
pub struct PageRequest {
    pub size: i32,
}

impl PageRequest {
    pub fn first(size: i32) -> Self { Self { size } }

    /// Rows to fetch, or `None` when the request can only yield an empty page.
    pub fn normalize(self) -> Option<u64> {
        if self.size <= 0 {
            return None;
        }
        Some((self.size as u64).min(MAX_PAGE_SIZE))
    }
}

impl Default for PageRequest {
    fn default() -> Self { Self { size: 20 } }
}
