//! Shared formatting utilities for list rows and the detail view.

use crate::domain::Business;

/// Placeholder shown for missing values.
pub const MISSING: &str = "-";

/// One `$` per price tier, or `-` when the business has no price.
#[must_use]
pub fn format_price(business: &Business) -> String {
    match business.price_tier() {
        0 => MISSING.to_string(),
        tier => "$".repeat(tier),
    }
}

#[must_use]
pub fn format_rating(rating: Option<f64>) -> String {
    rating.map_or_else(|| MISSING.to_string(), |r| r.to_string())
}

/// Review count in parentheses, e.g. `(120 reviews)`.
#[must_use]
pub fn format_reviews(count: Option<u32>) -> String {
    format!("({} reviews)", count.unwrap_or(0))
}

/// Returns `value`, or `-` when it is blank.
#[must_use]
pub fn or_dash(value: &str) -> String {
    if value.trim().is_empty() {
        MISSING.to_string()
    } else {
        value.to_string()
    }
}

/// Cuts `text` to at most `width` characters, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_uses_one_dollar_per_tier() {
        let mut business = Business::new("1", "A");
        assert_eq!(format_price(&business), "-");
        business.price = Some("$$$".into());
        assert_eq!(format_price(&business), "$$$");
    }

    #[test]
    fn missing_values_become_dashes() {
        assert_eq!(format_rating(None), "-");
        assert_eq!(format_rating(Some(4.0)), "4");
        assert_eq!(format_reviews(None), "(0 reviews)");
        assert_eq!(or_dash("  "), "-");
        assert_eq!(or_dash("Tacos"), "Tacos");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("Café Crème", 20), "Café Crème");
        assert_eq!(truncate("Café Crème", 5), "Café…");
    }
}
