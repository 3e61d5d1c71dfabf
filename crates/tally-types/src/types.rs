use serde::{Deserialize, Serialize};
use std::fmt;

/// A single order row as entered by the user.
///
/// `id` is stable for the lifetime of the row and is never reused, so a UI
/// can key rendered rows on it. Only `amount` changes after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEntry {
    /// Unique, stable row identifier
    pub id: u64,
    /// Original order amount
    pub amount: f64,
}

impl OrderEntry {
    /// Create a new order entry
    pub const fn new(id: u64, amount: f64) -> Self {
        Self { id, amount }
    }
}

/// Input to a single allocation call.
///
/// Built fresh for every calculation; the engine never keeps it around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRequest {
    /// Orders in display order
    pub orders: Vec<OrderEntry>,
    /// Shared fee, split proportionally to each order's amount
    pub additional_fee: f64,
    /// Lump discount, split equally across all orders
    pub total_discount: f64,
}

impl AllocationRequest {
    /// Create a request from orders, fee and discount
    pub fn new(orders: Vec<OrderEntry>, additional_fee: f64, total_discount: f64) -> Self {
        Self { orders, additional_fee, total_discount }
    }

    /// Build a request from bare amounts, assigning ids `1..=n` in order
    pub fn from_amounts(amounts: &[f64], additional_fee: f64, total_discount: f64) -> Self {
        let orders = amounts
            .iter()
            .zip(1u64..)
            .map(|(&amount, id)| OrderEntry::new(id, amount))
            .collect();
        Self::new(orders, additional_fee, total_discount)
    }

    /// Number of orders in the request
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Iterate over the order amounts in display order
    pub fn amounts(&self) -> impl Iterator<Item = f64> + '_ {
        self.orders.iter().map(|order| order.amount)
    }
}

/// Per-order breakdown produced by the allocation engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedOrder {
    /// 1-based position of the order in the request
    pub index: usize,
    /// Amount as entered
    pub original_amount: f64,
    /// Proportional fee share, rounded to 2 decimals
    pub fee_amount: f64,
    /// Equal discount share, unrounded
    pub discount_amount: f64,
    /// Amount to pay, rounded to 2 decimals
    pub final_amount: f64,
}

impl fmt::Display for CalculatedOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order {}: {} + {} - {} = {}",
            self.index, self.original_amount, self.fee_amount, self.discount_amount, self.final_amount
        )
    }
}

/// Full outcome of an allocation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Per-order breakdown in request order
    pub orders: Vec<CalculatedOrder>,
    /// Sum of original amounts
    pub total_original: f64,
    /// The additional fee, echoed from the request
    pub total_fee: f64,
    /// The total discount, echoed from the request
    pub total_discount: f64,
    /// Rounded sum of the already-rounded per-order final amounts
    pub total_final: f64,
}

impl CalculationResult {
    /// `total_original + total_fee - total_discount`, without any rounding.
    ///
    /// `total_final` is summed from rounded parts and may drift from this
    /// value by a few cents.
    pub fn closed_form_total(&self) -> f64 {
        self.total_original + self.total_fee - self.total_discount
    }

    /// Difference between the reported total and the closed-form total
    pub fn rounding_drift(&self) -> f64 {
        self.total_final - self.closed_form_total()
    }

    /// Sum of the rounded per-order fee shares
    pub fn allocated_fee(&self) -> f64 {
        self.orders.iter().map(|order| order.fee_amount).sum()
    }
}
