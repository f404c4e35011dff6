//! Purchase orders, inventory receipts and restocking reports.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{Clock, Key, ValueObject};

use crate::ledger::InventoryLedger;

/// An order placed with an item's supplier.
///
/// `order_cost` is frozen at the item price in effect when the order was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder<K> {
    pub item_id: K,
    pub quantity: i64,
    pub supplier: String,
    pub order_cost: f64,
}

impl<K: Key> ValueObject for PurchaseOrder<K> {}

/// One completed receipt of stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockRecord<K> {
    pub item_id: K,
    pub quantity: i64,
    pub supplier: String,
    pub date: DateTime<Utc>,
}

impl<K: Key> ValueObject for RestockRecord<K> {}

/// Per-item aggregate of the restock history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RestockSummary {
    pub total_quantity: i64,
    pub total_cost: f64,
    pub last_restock_date: Option<DateTime<Utc>>,
}

impl ValueObject for RestockSummary {}

impl<K: Key, S: Key, C: Clock> InventoryLedger<K, S, C> {
    /// Order `quantity` units from the item's primary supplier.
    ///
    /// Skipped when the item is unknown or has no supplier. Stock is not
    /// touched; receiving is a separate step.
    pub fn create_purchase_order(&mut self, key: &K, quantity: i64) -> Option<&PurchaseOrder<K>> {
        let Some(item) = self.items.get(key) else {
            tracing::debug!(item_id = %key, "create_purchase_order: unknown item");
            return None;
        };
        let Some(supplier) = item.supplier.clone() else {
            tracing::debug!(item_id = %key, "create_purchase_order: item has no supplier");
            return None;
        };

        let order = PurchaseOrder {
            item_id: key.clone(),
            quantity,
            supplier,
            order_cost: quantity as f64 * item.price,
        };
        tracing::debug!(
            item_id = %key,
            quantity,
            supplier = %order.supplier,
            order_cost = order.order_cost,
            "purchase order created"
        );

        self.purchase_orders.push(order);
        self.purchase_orders.last()
    }

    pub fn purchase_orders(&self) -> &[PurchaseOrder<K>] {
        &self.purchase_orders
    }

    /// Book a delivery: bump stock and append a timestamped history record.
    ///
    /// `supplier` is whoever delivered and need not match the item's stored supplier.
    pub fn receive_inventory(&mut self, key: &K, quantity: i64, supplier: impl Into<String>) {
        if !self.items.contains_key(key) {
            tracing::debug!(item_id = %key, "receive_inventory: unknown item");
            return;
        }

        self.update_item_quantity(key, quantity);
        let record = RestockRecord {
            item_id: key.clone(),
            quantity,
            supplier: supplier.into(),
            date: self.now(),
        };
        tracing::debug!(item_id = %key, quantity, supplier = %record.supplier, "inventory received");
        self.restock_history.push(record);
    }

    /// Sum of `order_cost` across every purchase order ever created.
    pub fn calculate_restocking_costs(&self) -> f64 {
        self.purchase_orders.iter().map(|o| o.order_cost).sum()
    }

    pub fn track_purchase_history(&self, key: &K) -> Vec<PurchaseOrder<K>> {
        self.purchase_orders
            .iter()
            .filter(|o| &o.item_id == key)
            .cloned()
            .collect()
    }

    pub fn view_historical_restock_data(&self) -> &[RestockRecord<K>] {
        &self.restock_history
    }

    /// Replay the restock history into per-item totals.
    ///
    /// Costs use each item's *current* price, so later price changes are
    /// reflected retroactively.
    pub fn generate_restocking_summary_report(&self) -> HashMap<K, RestockSummary> {
        let mut report: HashMap<K, RestockSummary> = HashMap::new();

        for record in &self.restock_history {
            let price = self
                .items
                .get(&record.item_id)
                .map(|item| item.price)
                .unwrap_or(0.0);

            let entry = report.entry(record.item_id.clone()).or_default();
            entry.total_quantity = entry.total_quantity.saturating_add(record.quantity);
            entry.total_cost += record.quantity as f64 * price;
            entry.last_restock_date = Some(record.date);
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use stockbook_core::FixedClock;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap()
    }

    fn supplier(name: &str) -> Option<String> {
        Some(name.to_string())
    }

    #[test]
    fn purchase_order_cost_uses_current_price() {
        let mut ledger: InventoryLedger<u32> = InventoryLedger::new();
        ledger.add_item(5, "Item E", 8, 6.0, 12, supplier("Supplier B"));

        let order = ledger.create_purchase_order(&5, 10).cloned().unwrap();
        assert_eq!(
            order,
            PurchaseOrder {
                item_id: 5,
                quantity: 10,
                supplier: "Supplier B".to_string(),
                order_cost: 60.0,
            }
        );
        assert_eq!(ledger.purchase_orders().len(), 1);
        assert_eq!(ledger.item(&5).unwrap().quantity, 8);
    }

    #[test]
    fn purchase_order_skipped_without_item_or_supplier() {
        let mut ledger: InventoryLedger<u32> = InventoryLedger::new();
        ledger.add_item(1, "No supplier", 1, 1.0, 1, None);

        assert!(ledger.create_purchase_order(&1, 5).is_none());
        assert!(ledger.create_purchase_order(&2, 5).is_none());
        assert!(ledger.purchase_orders().is_empty());
        assert_eq!(ledger.calculate_restocking_costs(), 0.0);
    }

    #[test]
    fn order_cost_is_frozen_at_creation() {
        let mut ledger: InventoryLedger<u32> = InventoryLedger::new();
        ledger.add_item(1, "Item", 0, 4.0, 0, supplier("S"));
        ledger.create_purchase_order(&1, 10);
        ledger.add_item(1, "Item", 0, 100.0, 0, supplier("S"));

        assert_eq!(ledger.calculate_restocking_costs(), 40.0);
    }

    #[test]
    fn restocking_costs_sum_all_orders() {
        let mut ledger: InventoryLedger<u32> = InventoryLedger::new();
        ledger.add_item(1, "Item A", 0, 6.0, 0, supplier("S1"));
        ledger.add_item(2, "Item B", 0, 4.0, 0, supplier("S2"));
        ledger.create_purchase_order(&1, 10);
        ledger.create_purchase_order(&2, 10);

        assert_eq!(ledger.calculate_restocking_costs(), 100.0);
    }

    #[test]
    fn purchase_history_filters_by_item_in_order() {
        let mut ledger: InventoryLedger<u32> = InventoryLedger::new();
        ledger.add_item(10, "Item J", 8, 5.0, 12, supplier("Supplier H"));
        ledger.add_item(11, "Item K", 8, 5.0, 12, supplier("Supplier H"));
        ledger.create_purchase_order(&10, 6);
        ledger.create_purchase_order(&11, 1);
        ledger.create_purchase_order(&10, 2);

        let history = ledger.track_purchase_history(&10);
        let quantities: Vec<i64> = history.iter().map(|o| o.quantity).collect();
        assert_eq!(quantities, vec![6, 2]);
        assert!(ledger.track_purchase_history(&12).is_empty());
    }

    #[test]
    fn receive_inventory_bumps_stock_and_records_history() {
        let clock = FixedClock::new(test_time());
        let mut ledger: InventoryLedger<u32, u32, &FixedClock> = InventoryLedger::with_clock(&clock);
        ledger.add_item(6, "Item F", 12, 7.0, 18, supplier("Supplier C"));

        ledger.receive_inventory(&6, 5, "Supplier Z");
        assert_eq!(ledger.item(&6).unwrap().quantity, 17);

        assert_eq!(
            ledger.view_historical_restock_data(),
            &[RestockRecord {
                item_id: 6,
                quantity: 5,
                supplier: "Supplier Z".to_string(),
                date: test_time(),
            }]
        );
        // Stored supplier is unaffected by who delivered.
        assert_eq!(ledger.item(&6).unwrap().supplier.as_deref(), Some("Supplier C"));
    }

    #[test]
    fn receive_inventory_for_unknown_item_is_ignored() {
        let mut ledger: InventoryLedger<u32> = InventoryLedger::new();
        ledger.receive_inventory(&6, 5, "Supplier C");
        assert!(ledger.view_historical_restock_data().is_empty());
    }

    #[test]
    fn summary_report_aggregates_with_current_price() {
        let clock = FixedClock::new(test_time());
        let mut ledger: InventoryLedger<u32, u32, &FixedClock> = InventoryLedger::with_clock(&clock);
        ledger.add_item(14, "Item N", 10, 7.0, 15, supplier("Supplier M"));
        ledger.add_item(15, "Item O", 10, 2.0, 15, supplier("Supplier M"));

        ledger.receive_inventory(&14, 5, "Supplier M");
        clock.advance(Duration::days(1));
        ledger.receive_inventory(&15, 1, "Supplier M");
        clock.advance(Duration::days(1));
        ledger.receive_inventory(&14, 3, "Supplier N");

        // Price change after the fact skews the historical total.
        ledger.items.get_mut(&14).unwrap().price = 10.0;

        let report = ledger.generate_restocking_summary_report();
        assert_eq!(report.len(), 2);

        let s14 = &report[&14];
        assert_eq!(s14.total_quantity, 8);
        assert_eq!(s14.total_cost, 80.0);
        assert_eq!(s14.last_restock_date, Some(test_time() + Duration::days(2)));

        let s15 = &report[&15];
        assert_eq!(s15.total_quantity, 1);
        assert_eq!(s15.total_cost, 2.0);
        assert_eq!(s15.last_restock_date, Some(test_time() + Duration::days(1)));
    }

    #[test]
    fn summary_report_empty_without_history() {
        let ledger: InventoryLedger<u32> = InventoryLedger::new();
        assert!(ledger.generate_restocking_summary_report().is_empty());
    }

    #[test]
    fn summary_serializes_with_stable_field_names() {
        let summary = RestockSummary {
            total_quantity: 5,
            total_cost: 35.0,
            last_restock_date: None,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total_quantity"], 5);
        assert_eq!(json["total_cost"], 35.0);
        assert!(json["last_restock_date"].is_null());
    }
}
