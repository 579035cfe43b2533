//! Pagination types for collection item listings.

use serde::{Deserialize, Serialize};

/// A page of collection items, or the aggregate of all pages.
///
/// Mirrors the wire shape of the item listing endpoint: the items
/// themselves plus the window bookkeeping Webflow reports alongside them.
/// [`WebflowClient::items`](crate::clients::rest::WebflowClient::items)
/// returns one page verbatim;
/// [`WebflowClient::items_all`](crate::clients::rest::WebflowClient::items_all)
/// returns an aggregate where `count == items.len()`, `offset` is 0 and
/// `limit` equals `count`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ItemList {
    /// The items in this window, in server order.
    pub items: Vec<serde_json::Value>,
    /// Number of items in this window.
    pub count: u64,
    /// The requested window size.
    pub limit: u64,
    /// The requested window start.
    pub offset: u64,
    /// Total number of items in the collection.
    pub total: u64,
}

impl ItemList {
    /// Returns `true` if this listing has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items in this listing.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this listing.
    pub fn iter(&self) -> std::slice::Iter<'_, serde_json::Value> {
        self.items.iter()
    }
}

impl IntoIterator for ItemList {
    type Item = serde_json::Value;
    type IntoIter = std::vec::IntoIter<serde_json::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a ItemList {
    type Item = &'a serde_json::Value;
    type IntoIter = std::slice::Iter<'a, serde_json::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
