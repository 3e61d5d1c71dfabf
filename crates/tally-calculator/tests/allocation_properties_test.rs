use proptest::prelude::*;
use tally_calculator::{AllocationError, AmountParser, allocate, round2, suggest};
use tally_types::AllocationRequest;

fn positive_amounts() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1u32..1_000_000, 1..20)
        .prop_map(|amounts| amounts.into_iter().map(f64::from).collect())
}

fn money() -> impl Strategy<Value = f64> {
    (0u32..100_000).prop_map(f64::from)
}

proptest! {
    #[test]
    fn non_positive_amount_always_rejected(
        mut amounts in positive_amounts(),
        bad in prop_oneof![Just(0.0), (1u32..10_000).prop_map(|v| -f64::from(v))],
        slot in any::<prop::sample::Index>(),
        fee in money(),
        discount in money(),
    ) {
        let position = slot.index(amounts.len());
        amounts[position] = bad;
        let request = AllocationRequest::from_amounts(&amounts, fee, discount);

        let is_rejected = matches!(
            allocate(&request),
            Err(AllocationError::AllAmountsMustBePositive { .. })
        );
        prop_assert!(is_rejected);
    }

    #[test]
    fn fee_is_conserved_within_a_cent_per_order(
        amounts in positive_amounts(),
        fee in money(),
        discount in money(),
    ) {
        let request = AllocationRequest::from_amounts(&amounts, fee, discount);
        let result = allocate(&request).unwrap();

        let tolerance = 0.01 * amounts.len() as f64 + 1e-6;
        prop_assert!((result.allocated_fee() - fee).abs() <= tolerance);
        prop_assert_eq!(result.total_fee, fee);
    }

    #[test]
    fn discount_split_is_exact_and_uniform(
        amounts in positive_amounts(),
        fee in money(),
        discount in money(),
    ) {
        let request = AllocationRequest::from_amounts(&amounts, fee, discount);
        let result = allocate(&request).unwrap();

        let expected = discount / amounts.len() as f64;
        for order in &result.orders {
            prop_assert_eq!(order.discount_amount, expected);
        }
        prop_assert_eq!(result.total_discount, discount);
    }

    #[test]
    fn total_final_is_rounded_sum_of_parts(
        amounts in positive_amounts(),
        fee in money(),
        discount in money(),
    ) {
        let request = AllocationRequest::from_amounts(&amounts, fee, discount);
        let result = allocate(&request).unwrap();

        let summed: f64 = result.orders.iter().map(|o| o.final_amount).sum();
        prop_assert_eq!(result.total_final, round2(summed));

        let drift_limit = 0.01 * amounts.len() as f64 + 0.01;
        prop_assert!(result.rounding_drift().abs() <= drift_limit);
    }

    #[test]
    fn indexes_follow_request_order(amounts in positive_amounts()) {
        let request = AllocationRequest::from_amounts(&amounts, 0.0, 0.0);
        let result = allocate(&request).unwrap();

        for (position, (order, amount)) in result.orders.iter().zip(&amounts).enumerate() {
            prop_assert_eq!(order.index, position + 1);
            prop_assert_eq!(order.original_amount, *amount);
        }
    }

    #[test]
    fn suggestions_exclude_input_and_stay_short(amount in 1u32..10_000_000) {
        let amount = f64::from(amount);
        let suggestions = suggest(amount);

        prop_assert!(suggestions.len() <= 3);
        prop_assert!(!suggestions.contains(&amount));
        prop_assert_eq!(suggest(amount), suggestions);
    }

    #[test]
    fn parser_never_panics(input in "\\PC{0,40}") {
        let parser = AmountParser::default();
        let value = parser.parse(&input);
        prop_assert!(value.is_finite());
    }

    #[test]
    fn trailing_operator_falls_back_to_zero(
        amount in 1u32..1_000_000,
        op in prop::sample::select(vec!['+', '-', '*', '/']),
    ) {
        let parser = AmountParser::default();
        prop_assert_eq!(parser.parse(&format!("{amount}{op}")), 0.0);
    }

    #[test]
    fn plain_digits_round_trip(amount in 0u64..1_000_000_000_000) {
        let parser = AmountParser::default();
        prop_assert_eq!(parser.parse(&amount.to_string()), amount as f64);
    }
}
