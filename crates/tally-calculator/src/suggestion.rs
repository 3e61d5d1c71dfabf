//! Magnitude-based entry suggestions
//!
//! A short numeral typed into an amount field is usually shorthand for a
//! larger figure ("5" meaning 5 000 or 50 000). [`suggest`] proposes up to
//! three scaled alternatives picked by the numeral's digit length.

/// Maximum number of suggestions returned
pub const MAX_SUGGESTIONS: usize = 3;

/// Multipliers applied to amounts within a digit-length range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestionTier {
    /// Smallest digit length covered (inclusive)
    pub min_digits: usize,
    /// Largest digit length covered (inclusive), `None` for unbounded
    pub max_digits: Option<usize>,
    /// Multipliers in the order their results are offered
    pub multipliers: [f64; 3],
}

impl SuggestionTier {
    /// Whether this tier covers the given digit length
    pub fn covers(&self, digit_length: usize) -> bool {
        digit_length >= self.min_digits && self.max_digits.is_none_or(|max| digit_length <= max)
    }
}

/// Digit-length tiers, checked in order.
pub static SUGGESTION_TIERS: [SuggestionTier; 4] = [
    SuggestionTier { min_digits: 1, max_digits: Some(1), multipliers: [1_000.0, 10_000.0, 100_000.0] },
    SuggestionTier { min_digits: 2, max_digits: Some(2), multipliers: [100.0, 1_000.0, 10_000.0] },
    SuggestionTier { min_digits: 3, max_digits: Some(3), multipliers: [100.0, 1_000.0, 10_000.0] },
    SuggestionTier { min_digits: 4, max_digits: None, multipliers: [10.0, 100.0, 1_000.0] },
];

/// Length of the shortest decimal rendering of `amount` (`20` → 2, `2.5` → 3)
pub fn digit_length(amount: f64) -> usize {
    amount.to_string().len()
}

/// Find the tier covering a digit length
pub fn tier_for(digit_length: usize) -> Option<&'static SuggestionTier> {
    SUGGESTION_TIERS.iter().find(|tier| tier.covers(digit_length))
}

/// Propose up to three scaled alternatives for a positive amount.
///
/// Returns an empty vector for non-positive or non-finite input. The input
/// itself is never among the results.
pub fn suggest(amount: f64) -> Vec<f64> {
    if !amount.is_finite() || amount <= 0.0 {
        return Vec::new();
    }

    let Some(tier) = tier_for(digit_length(amount)) else {
        return Vec::new();
    };

    tier.multipliers
        .iter()
        .map(|multiplier| amount * multiplier)
        .filter(|candidate| *candidate != amount)
        .take(MAX_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_cover_every_length_exactly_once() {
        for length in 1..=30 {
            let covering = SUGGESTION_TIERS.iter().filter(|tier| tier.covers(length)).count();
            assert_eq!(covering, 1, "digit length {length}");
        }
        assert!(tier_for(0).is_none());
    }

    #[test]
    fn digit_length_follows_decimal_rendering() {
        assert_eq!(digit_length(5.0), 1);
        assert_eq!(digit_length(20.0), 2);
        assert_eq!(digit_length(2.5), 3);
        assert_eq!(digit_length(1234.0), 4);
    }

    #[test]
    fn single_digit_scales_to_thousands() {
        assert_eq!(suggest(5.0), vec![5_000.0, 50_000.0, 500_000.0]);
    }

    #[test]
    fn two_digit_amount() {
        assert_eq!(suggest(20.0), vec![2_000.0, 20_000.0, 200_000.0]);
    }

    #[test]
    fn three_digit_amount() {
        assert_eq!(suggest(150.0), vec![15_000.0, 150_000.0, 1_500_000.0]);
    }

    #[test]
    fn four_or_more_digits() {
        assert_eq!(suggest(1234.0), vec![12_340.0, 123_400.0, 1_234_000.0]);
        assert_eq!(suggest(250_000.0), vec![2_500_000.0, 25_000_000.0, 250_000_000.0]);
    }

    #[test]
    fn fractional_amount_uses_rendered_length() {
        // "2.5" has three characters
        assert_eq!(suggest(2.5), vec![250.0, 2_500.0, 25_000.0]);
    }

    #[test]
    fn non_positive_amounts_have_no_suggestions() {
        assert!(suggest(0.0).is_empty());
        assert!(suggest(-5.0).is_empty());
        assert!(suggest(f64::NAN).is_empty());
        assert!(suggest(f64::INFINITY).is_empty());
    }
}
