//! Editable list of order rows
//!
//! Holds the rows a user is editing between calculations. The book never
//! becomes empty and never reuses an id, so rows keep a stable identity
//! across additions and removals.

use crate::amount::AmountParser;
use crate::error::OrderBookError;
use serde::{Deserialize, Serialize};
use tally_types::{AllocationRequest, OrderEntry};
use tracing::debug;

/// Ordered collection of order rows with at least one entry.
///
/// Deserialization goes through the same checks as [`OrderBook::try_from`],
/// so a restored book is never empty and never reissues an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawOrderBook")]
pub struct OrderBook {
    orders: Vec<OrderEntry>,
    next_id: u64,
}

/// Unchecked wire shape of a book
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOrderBook {
    orders: Vec<OrderEntry>,
    next_id: u64,
}

impl TryFrom<RawOrderBook> for OrderBook {
    type Error = OrderBookError;

    fn try_from(raw: RawOrderBook) -> Result<Self, Self::Error> {
        let Some(max_id) = raw.orders.iter().map(|order| order.id).max() else {
            return Err(OrderBookError::NoOrders);
        };
        if raw.next_id <= max_id {
            return Err(OrderBookError::StaleNextId { next_id: raw.next_id, max_id });
        }
        Ok(Self { orders: raw.orders, next_id: raw.next_id })
    }
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    /// A book holding a single empty row with id 1
    pub fn new() -> Self {
        Self { orders: vec![OrderEntry::new(1, 0.0)], next_id: 2 }
    }

    /// Rows in display order
    pub fn orders(&self) -> &[OrderEntry] {
        &self.orders
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Always false; a book keeps at least one row
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Look up a row by id
    pub fn get(&self, id: u64) -> Option<&OrderEntry> {
        self.orders.iter().find(|order| order.id == id)
    }

    /// Append an empty row and return its id
    pub fn add_order(&mut self) -> u64 {
        let id = self.next_id;
        self.orders.push(OrderEntry::new(id, 0.0));
        self.next_id += 1;
        debug!(order_id = id, order_count = self.orders.len(), "Added order row");
        id
    }

    /// Remove a row; the last remaining row cannot be removed
    pub fn remove_order(&mut self, id: u64) -> Result<OrderEntry, OrderBookError> {
        let position = self.position(id)?;
        if self.orders.len() == 1 {
            return Err(OrderBookError::LastEntry);
        }
        let removed = self.orders.remove(position);
        debug!(order_id = id, order_count = self.orders.len(), "Removed order row");
        Ok(removed)
    }

    /// Replace the amount of one row
    pub fn update_amount(&mut self, id: u64, amount: f64) -> Result<(), OrderBookError> {
        let position = self.position(id)?;
        self.orders[position].amount = amount;
        Ok(())
    }

    /// Parse `raw` leniently and store the result as the row's amount
    pub fn update_from_text(
        &mut self,
        id: u64,
        raw: &str,
        parser: &AmountParser,
    ) -> Result<f64, OrderBookError> {
        let amount = parser.parse(raw);
        self.update_amount(id, amount)?;
        Ok(amount)
    }

    /// Snapshot the rows into an allocation request
    pub fn to_request(&self, additional_fee: f64, total_discount: f64) -> AllocationRequest {
        AllocationRequest::new(self.orders.clone(), additional_fee, total_discount)
    }

    fn position(&self, id: u64) -> Result<usize, OrderBookError> {
        self.orders
            .iter()
            .position(|order| order.id == id)
            .ok_or(OrderBookError::UnknownOrder(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_one_empty_row() {
        let book = OrderBook::new();
        assert_eq!(book.orders(), &[OrderEntry::new(1, 0.0)]);
        assert!(!book.is_empty());
    }

    #[test]
    fn ids_are_never_reused() {
        let mut book = OrderBook::new();
        let second = book.add_order();
        let third = book.add_order();
        assert_eq!((second, third), (2, 3));

        book.remove_order(third).unwrap();
        assert_eq!(book.add_order(), 4);
    }

    #[test]
    fn last_row_cannot_be_removed() {
        let mut book = OrderBook::new();
        assert_eq!(book.remove_order(1), Err(OrderBookError::LastEntry));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn unknown_ids_are_reported() {
        let mut book = OrderBook::new();
        assert_eq!(book.remove_order(9), Err(OrderBookError::UnknownOrder(9)));
        assert_eq!(book.update_amount(9, 1.0), Err(OrderBookError::UnknownOrder(9)));
    }

    #[test]
    fn update_from_text_uses_lenient_parser() {
        let mut book = OrderBook::new();
        let parser = AmountParser::default();

        assert_eq!(book.update_from_text(1, "1.250.000", &parser), Ok(1_250_000.0));
        assert_eq!(book.get(1).map(|o| o.amount), Some(1_250_000.0));

        assert_eq!(book.update_from_text(1, "2+", &parser), Ok(0.0));
        assert_eq!(book.get(1).map(|o| o.amount), Some(0.0));
    }

    #[test]
    fn serialized_book_restores_and_keeps_counting() {
        let mut book = OrderBook::new();
        book.add_order();
        book.remove_order(1).unwrap();

        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(json, r#"{"orders":[{"id":2,"amount":0.0}],"nextId":3}"#);

        let mut restored: OrderBook = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, book);
        assert_eq!(restored.add_order(), 3);
    }

    #[test]
    fn restoring_empty_book_is_rejected() {
        let err = serde_json::from_str::<OrderBook>(r#"{"orders":[],"nextId":1}"#).unwrap_err();
        assert!(err.to_string().contains("at least one order"));
    }

    #[test]
    fn restoring_stale_next_id_is_rejected() {
        let err =
            serde_json::from_str::<OrderBook>(r#"{"orders":[{"id":5,"amount":10.0}],"nextId":5}"#)
                .unwrap_err();
        assert!(err.to_string().contains("Next order id 5"));

        let raw = RawOrderBook { orders: vec![OrderEntry::new(5, 10.0)], next_id: 3 };
        assert_eq!(
            OrderBook::try_from(raw),
            Err(OrderBookError::StaleNextId { next_id: 3, max_id: 5 })
        );
    }

    #[test]
    fn to_request_keeps_row_order() {
        let mut book = OrderBook::new();
        let id = book.add_order();
        book.update_amount(1, 100.0).unwrap();
        book.update_amount(id, 200.0).unwrap();

        let request = book.to_request(30.0, 10.0);
        assert_eq!(request.amounts().collect::<Vec<_>>(), vec![100.0, 200.0]);
        assert_eq!(request.additional_fee, 30.0);
        assert_eq!(request.total_discount, 10.0);
    }
}
