use std::collections::HashMap;

use chrono::{DateTime, Utc};

use stockbook_core::{Clock, DomainError, DomainResult, Key, SystemClock};

use crate::config::LedgerConfig;
use crate::item::{ExpiryStatus, InventoryItem};
use crate::purchasing::{PurchaseOrder, RestockRecord};
use crate::returns::ReturnRequest;
use crate::supplier::Supplier;

/// In-memory inventory bookkeeping for a single owner.
///
/// Owns items, reorder points, suppliers, purchase orders, restock history and
/// return requests. `K` keys items, `S` keys suppliers, and `C` stamps
/// receipts and drives expiry checks.
///
/// Mutations that target an absent key are silent no-ops (logged at `debug`).
/// Every query recomputes from current state.
#[derive(Debug)]
pub struct InventoryLedger<K, S = K, C = SystemClock> {
    pub(crate) items: HashMap<K, InventoryItem>,
    /// Item keys in first-insertion order.
    pub(crate) item_order: Vec<K>,
    pub(crate) reorder_points: HashMap<K, i64>,
    pub(crate) suppliers: HashMap<S, Supplier>,
    pub(crate) purchase_orders: Vec<PurchaseOrder<K>>,
    pub(crate) restock_history: Vec<RestockRecord<K>>,
    pub(crate) return_requests: Vec<ReturnRequest<K>>,
    pub(crate) config: LedgerConfig,
    pub(crate) clock: C,
}

impl<K: Key, S: Key> InventoryLedger<K, S, SystemClock> {
    pub fn new() -> Self {
        Self::with_config(LedgerConfig::default(), SystemClock)
    }
}

impl<K: Key, S: Key> Default for InventoryLedger<K, S, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key, S: Key, C: Clock> InventoryLedger<K, S, C> {
    pub fn with_clock(clock: C) -> Self {
        Self::with_config(LedgerConfig::default(), clock)
    }

    pub fn with_config(config: LedgerConfig, clock: C) -> Self {
        Self {
            items: HashMap::new(),
            item_order: Vec::new(),
            reorder_points: HashMap::new(),
            suppliers: HashMap::new(),
            purchase_orders: Vec::new(),
            restock_history: Vec::new(),
            return_requests: Vec::new(),
            config,
            clock,
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // ---- Items & reorder points ----

    /// Insert or overwrite an item and its reorder point.
    ///
    /// Overwriting discards the discount, expiry and preferred-supplier
    /// extensions of the previous record.
    pub fn add_item(
        &mut self,
        key: K,
        name: impl Into<String>,
        quantity: i64,
        price: f64,
        reorder_point: i64,
        supplier: Option<String>,
    ) {
        let item = InventoryItem::new(name, quantity, price, supplier);
        tracing::debug!(item_id = %key, quantity, price, reorder_point, "item added");

        if self.items.insert(key.clone(), item).is_none() {
            self.item_order.push(key.clone());
        }
        self.reorder_points.insert(key, reorder_point);
    }

    pub fn item(&self, key: &K) -> Option<&InventoryItem> {
        self.items.get(key)
    }

    /// All items in first-insertion order.
    pub fn items(&self) -> impl Iterator<Item = (&K, &InventoryItem)> {
        self.item_order
            .iter()
            .filter_map(|key| self.items.get(key).map(|item| (key, item)))
    }

    pub fn reorder_point(&self, key: &K) -> Option<i64> {
        self.reorder_points.get(key).copied()
    }

    /// Add a signed delta to an item's quantity, saturating at the `i64` bounds.
    pub fn update_item_quantity(&mut self, key: &K, delta: i64) {
        match self.items.get_mut(key) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(delta);
                tracing::debug!(item_id = %key, delta, quantity = item.quantity, "quantity updated");
            }
            None => tracing::debug!(item_id = %key, "update_item_quantity: unknown item"),
        }
    }

    /// Only updates keys that already carry a reorder point.
    pub fn set_reorder_point(&mut self, key: &K, reorder_point: i64) {
        match self.reorder_points.get_mut(key) {
            Some(point) => *point = reorder_point,
            None => tracing::debug!(item_id = %key, "set_reorder_point: unknown item"),
        }
    }

    /// Keys whose quantity is strictly below their reorder point.
    ///
    /// An item without a reorder point is treated as having a point of 0.
    pub fn generate_restock_alerts(&self) -> Vec<K> {
        self.items()
            .filter(|(key, item)| item.quantity < self.reorder_point(key).unwrap_or(0))
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Units needed to bring an item back up to its reorder point.
    pub fn calculate_reorder_quantity(&self, key: &K) -> DomainResult<i64> {
        let item = self.items.get(key).ok_or(DomainError::NotFound)?;
        let point = self
            .reorder_point(key)
            .ok_or(DomainError::ReorderPointNotSet)?;
        Ok(point.saturating_sub(item.quantity).max(0))
    }

    pub fn view_low_inventory_items(&self, threshold: i64) -> HashMap<K, InventoryItem> {
        self.items
            .iter()
            .filter(|(_, item)| item.quantity < threshold)
            .map(|(key, item)| (key.clone(), item.clone()))
            .collect()
    }

    // ---- Suppliers ----

    pub fn add_supplier(&mut self, key: S, name: impl Into<String>, contact_info: impl Into<String>) {
        tracing::debug!(supplier_id = %key, "supplier added");
        self.suppliers.insert(key, Supplier::new(name, contact_info));
    }

    pub fn supplier(&self, key: &S) -> Option<&Supplier> {
        self.suppliers.get(key)
    }

    /// Copy of the supplier record, or `NotFound`.
    pub fn view_supplier_info(&self, key: &S) -> DomainResult<Supplier> {
        self.suppliers.get(key).cloned().ok_or(DomainError::NotFound)
    }

    pub fn set_supplier_contact_info(&mut self, key: &S, contact_info: impl Into<String>) {
        match self.suppliers.get_mut(key) {
            Some(supplier) => supplier.contact_info = contact_info.into(),
            None => tracing::debug!(supplier_id = %key, "set_supplier_contact_info: unknown supplier"),
        }
    }

    /// Replace the item's primary supplier reference.
    pub fn set_preferred_supplier(&mut self, key: &K, supplier: impl Into<String>) {
        if let Some(item) = self.item_mut(key, "set_preferred_supplier") {
            item.supplier = Some(supplier.into());
        }
    }

    /// Set the preferred-supplier list; the primary supplier is left alone.
    pub fn set_preferred_suppliers(&mut self, key: &K, suppliers: Vec<String>) {
        if let Some(item) = self.item_mut(key, "set_preferred_suppliers") {
            item.preferred_suppliers = Some(suppliers);
        }
    }

    // ---- Pricing & value ----

    /// Sum of quantity × price across all items. Discounts are ignored.
    pub fn calculate_total_inventory_value(&self) -> f64 {
        self.items().map(|(_, item)| item.value()).sum()
    }

    pub fn set_discount(&mut self, key: &K, discount_percentage: f64) {
        if let Some(item) = self.item_mut(key, "set_discount") {
            item.discount_percentage = Some(discount_percentage);
        }
    }

    pub fn calculate_discounted_price(&self, key: &K) -> Option<f64> {
        self.items.get(key)?.discounted_price()
    }

    // ---- Expiry ----

    pub fn set_expiry_date(&mut self, key: &K, expiry_date: DateTime<Utc>) {
        if let Some(item) = self.item_mut(key, "set_expiry_date") {
            item.expiry_date = Some(expiry_date);
        }
    }

    pub fn check_item_expiry_status(&self, key: &K) -> ExpiryStatus {
        match self.items.get(key) {
            Some(item) => item.expiry_status(self.now()),
            None => ExpiryStatus::NotSet,
        }
    }

    fn item_mut(&mut self, key: &K, op: &'static str) -> Option<&mut InventoryItem> {
        let item = self.items.get_mut(key);
        if item.is_none() {
            tracing::debug!(item_id = %key, op, "unknown item; ignoring");
        }
        item
    }
}
