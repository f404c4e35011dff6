//! Return requests: stock sent back out of inventory, reversible by processing.

use serde::{Deserialize, Serialize};

use stockbook_core::{Clock, Key, ValueObject};

use crate::ledger::InventoryLedger;

/// An active return request.
///
/// `request_id` is `active count + 1` at creation, so ids can repeat once
/// earlier requests have been processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnRequest<K> {
    pub request_id: u64,
    pub item_id: K,
    pub quantity: i64,
    pub reason: String,
}

impl<K: Key> ValueObject for ReturnRequest<K> {}

/// Outcome of [`InventoryLedger::process_return_request`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnStatus {
    Processed,
    NotFound,
}

impl core::fmt::Display for ReturnStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ReturnStatus::Processed => "Return request processed successfully.",
            ReturnStatus::NotFound => "Return request not found.",
        })
    }
}

impl<K: Key, S: Key, C: Clock> InventoryLedger<K, S, C> {
    /// Take `quantity` units out of stock pending a return.
    ///
    /// Returns `None` if the item is unknown or has fewer than `quantity` units.
    pub fn create_return_request(
        &mut self,
        key: &K,
        quantity: i64,
        reason: impl Into<String>,
    ) -> Option<ReturnRequest<K>> {
        let Some(item) = self.items.get_mut(key) else {
            tracing::debug!(item_id = %key, "create_return_request: unknown item");
            return None;
        };
        if item.quantity < quantity {
            tracing::debug!(
                item_id = %key,
                requested = quantity,
                available = item.quantity,
                "create_return_request: insufficient stock"
            );
            return None;
        }

        item.quantity = item.quantity.saturating_sub(quantity);
        let request = ReturnRequest {
            request_id: self.return_requests.len() as u64 + 1,
            item_id: key.clone(),
            quantity,
            reason: reason.into(),
        };
        tracing::debug!(
            item_id = %key,
            request_id = request.request_id,
            quantity,
            "return request created"
        );

        self.return_requests.push(request.clone());
        Some(request)
    }

    pub fn view_return_requests(&self) -> Vec<ReturnRequest<K>> {
        self.return_requests.clone()
    }

    /// Restore the stock of the first active request with `request_id` and drop it.
    pub fn process_return_request(&mut self, request_id: u64) -> ReturnStatus {
        let Some(pos) = self
            .return_requests
            .iter()
            .position(|r| r.request_id == request_id)
        else {
            tracing::debug!(request_id, "process_return_request: no such request");
            return ReturnStatus::NotFound;
        };

        let request = self.return_requests.remove(pos);
        self.update_item_quantity(&request.item_id, request.quantity);
        tracing::debug!(
            item_id = %request.item_id,
            request_id,
            quantity = request.quantity,
            "return request processed"
        );
        ReturnStatus::Processed
    }
}
