//! Fee and discount allocation
//!
//! Distributes an additional fee proportionally to each order's amount and a
//! lump discount equally across orders.
//!
//! fee_i      = round2(fee * (amount_i / total))
//! discount_i = discount / n
//! final_i    = round2(amount_i + fee * (amount_i / total) - discount_i)
//!
//! The per-order discount is reported unrounded. `total_final` is the
//! rounded sum of the rounded `final_i`, so it can differ from
//! `total + fee - discount` by a few cents.

use crate::error::AllocationError;
use tally_types::{AllocationRequest, CalculatedOrder, CalculationResult};
use tracing::{debug, warn};

/// Round to 2 decimal places, half-cent case away from zero.
///
/// Values too large to scale by 100 have no cent digits and pass through.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() { scaled.round() / 100.0 } else { value }
}

/// `share_of` scaled by `part / whole`; 0 when `whole` is 0.
pub fn proportional_share(share_of: f64, part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    share_of * (part / whole)
}

/// Reject requests that cannot be allocated.
pub fn validate_request(request: &AllocationRequest) -> Result<(), AllocationError> {
    if request.orders.is_empty() {
        return Err(AllocationError::EmptyOrderList);
    }

    if let Some((position, order)) = request
        .orders
        .iter()
        .enumerate()
        .find(|(_, order)| !order.amount.is_finite() || order.amount <= 0.0)
    {
        return Err(AllocationError::AllAmountsMustBePositive {
            index: position + 1,
            amount: order.amount,
        });
    }

    if !request.additional_fee.is_finite() || request.additional_fee < 0.0 {
        return Err(AllocationError::InvalidFee(request.additional_fee));
    }
    if !request.total_discount.is_finite() || request.total_discount < 0.0 {
        return Err(AllocationError::InvalidDiscount(request.total_discount));
    }

    Ok(())
}

/// Split the request's fee and discount across its orders.
///
/// Either the full breakdown is returned or the request is rejected as a
/// whole; no partially computed orders are ever produced.
pub fn allocate(request: &AllocationRequest) -> Result<CalculationResult, AllocationError> {
    if let Err(err) = validate_request(request) {
        warn!(category = err.category(), error = %err, "Rejected allocation request");
        return Err(err);
    }

    let total_original: f64 = request.amounts().sum();
    if !total_original.is_finite() {
        let err = AllocationError::AmountOverflow;
        warn!(category = err.category(), error = %err, "Rejected allocation request");
        return Err(err);
    }
    let discount_per_order = request.total_discount / request.order_count() as f64;

    let orders: Vec<CalculatedOrder> = request
        .orders
        .iter()
        .enumerate()
        .map(|(position, order)| {
            let fee_share =
                proportional_share(request.additional_fee, order.amount, total_original);

            CalculatedOrder {
                index: position + 1,
                original_amount: order.amount,
                fee_amount: round2(fee_share),
                discount_amount: discount_per_order,
                final_amount: round2(order.amount + fee_share - discount_per_order),
            }
        })
        .collect();

    let total_final = round2(orders.iter().map(|order| order.final_amount).sum());
    if !total_final.is_finite() || orders.iter().any(|order| !order.final_amount.is_finite()) {
        let err = AllocationError::AmountOverflow;
        warn!(category = err.category(), error = %err, "Rejected allocation request");
        return Err(err);
    }

    debug!(
        order_count = orders.len(),
        total_original,
        total_final,
        discount_per_order,
        "Allocated fee and discount"
    );

    Ok(CalculationResult {
        orders,
        total_original,
        total_fee: request.additional_fee,
        total_discount: request.total_discount,
        total_final,
    })
}
