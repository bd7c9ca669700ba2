//! Normalized page envelope.

use serde::{Deserialize, Serialize};

use super::Character;

/// One page of results with guaranteed paging fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEnvelope {
    pub results: Vec<Character>,
    pub current_page: u32,
    pub page_size: u32,
    /// 0 when the upstream gave neither `totalPages` nor a total count.
    pub total_pages: u32,
    pub total_results: u32,
}

impl PageEnvelope {
    /// True when upstream reports a page after this one.
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Page number to request next, if any.
    pub fn next_page(&self) -> Option<u32> {
        if self.has_next_page() {
            self.current_page.checked_add(1)
        } else {
            None
        }
    }
}
