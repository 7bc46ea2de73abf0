//! Reward-points rules.
//!
//! Each [`Rule`] is scored on its own and the receipt's total is the sum of the
//! contributions, so evaluation order never matters.

use crate::domain::model::ValidatedReceipt;
use chrono::{Datelike, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

// Open interval (13:59, 16:01), in minutes after midnight.
const AFTERNOON_AFTER: u32 = 13 * 60 + 59;
const AFTERNOON_BEFORE: u32 = 16 * 60 + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    RetailerAlphanumerics,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl Rule {
    pub const ALL: [Rule; 7] = [
        Rule::RetailerAlphanumerics,
        Rule::RoundDollarTotal,
        Rule::QuarterMultipleTotal,
        Rule::ItemPairs,
        Rule::DescriptionLength,
        Rule::OddPurchaseDay,
        Rule::AfternoonPurchase,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::RetailerAlphanumerics => "retailer_alphanumerics",
            Rule::RoundDollarTotal => "round_dollar_total",
            Rule::QuarterMultipleTotal => "quarter_multiple_total",
            Rule::ItemPairs => "item_pairs",
            Rule::DescriptionLength => "description_length",
            Rule::OddPurchaseDay => "odd_purchase_day",
            Rule::AfternoonPurchase => "afternoon_purchase",
        }
    }

    pub fn points(&self, receipt: &ValidatedReceipt) -> u64 {
        match self {
            Rule::RetailerAlphanumerics => receipt
                .retailer
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .count() as u64,
            Rule::RoundDollarTotal => {
                if is_round_dollar(receipt.total) {
                    ROUND_DOLLAR_POINTS
                } else {
                    0
                }
            }
            Rule::QuarterMultipleTotal => {
                if is_quarter_multiple(receipt.total) {
                    QUARTER_MULTIPLE_POINTS
                } else {
                    0
                }
            }
            Rule::ItemPairs => ITEM_PAIR_POINTS * (receipt.items.len() as u64 / 2),
            Rule::DescriptionLength => receipt
                .items
                .iter()
                .filter(|item| item.short_description.trim().chars().count() % 3 == 0)
                .map(|item| description_bonus(item.price))
                .fold(0u64, u64::saturating_add),
            Rule::OddPurchaseDay => {
                if receipt.purchase_date.day() % 2 == 1 {
                    ODD_DAY_POINTS
                } else {
                    0
                }
            }
            Rule::AfternoonPurchase => {
                let t = receipt.purchase_time;
                let minutes = t.hour() * 60 + t.minute();
                if minutes > AFTERNOON_AFTER && minutes < AFTERNOON_BEFORE {
                    AFTERNOON_POINTS
                } else {
                    0
                }
            }
        }
    }
}

pub fn is_round_dollar(total: Decimal) -> bool {
    total.fract().is_zero()
}

pub fn is_quarter_multiple(total: Decimal) -> bool {
    total
        .checked_rem(Decimal::new(25, 2))
        .is_some_and(|rem| rem.is_zero())
}

/// `ceil(price * 0.2)`. Negative prices contribute nothing; bonuses too large
/// for a `u64` saturate.
fn description_bonus(price: Decimal) -> u64 {
    if price.is_sign_negative() {
        return 0;
    }
    match price.checked_mul(Decimal::new(2, 1)) {
        Some(scaled) => scaled.ceil().to_u64().unwrap_or(u64::MAX),
        None => u64::MAX,
    }
}

/// Per-rule contributions for one receipt, in [`Rule::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointsBreakdown {
    pub contributions: Vec<(Rule, u64)>,
}

impl PointsBreakdown {
    pub fn total(&self) -> u64 {
        self.contributions
            .iter()
            .fold(0u64, |acc, (_, points)| acc.saturating_add(*points))
    }

    pub fn get(&self, rule: Rule) -> u64 {
        self.contributions
            .iter()
            .find(|(r, _)| *r == rule)
            .map(|(_, points)| *points)
            .unwrap_or(0)
    }
}

pub fn breakdown(receipt: &ValidatedReceipt) -> PointsBreakdown {
    PointsBreakdown {
        contributions: Rule::ALL
            .iter()
            .map(|rule| (*rule, rule.points(receipt)))
            .collect(),
    }
}

pub fn calculate_points(receipt: &ValidatedReceipt) -> u64 {
    let breakdown = breakdown(receipt);
    for (rule, points) in &breakdown.contributions {
        tracing::debug!("rule {} -> {} points", rule.name(), points);
    }
    breakdown.total()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ValidatedItem;
    use chrono::{NaiveDate, NaiveTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn item(description: &str, price: &str) -> ValidatedItem {
        ValidatedItem {
            short_description: description.to_string(),
            price: dec(price),
        }
    }

    fn receipt(retailer: &str, date: (i32, u32, u32), time: (u32, u32), items: Vec<ValidatedItem>, total: &str) -> ValidatedReceipt {
        ValidatedReceipt {
            retailer: retailer.to_string(),
            purchase_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            purchase_time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
            items,
            total: dec(total),
        }
    }

    fn target_receipt() -> ValidatedReceipt {
        receipt(
            "Target",
            (2022, 1, 1),
            (13, 1),
            vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Emils Cheese Pizza", "12.25"),
                item("Knorr Creamy Chicken", "1.26"),
                item("Doritos Nacho Cheese", "3.35"),
                item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            "35.35",
        )
    }

    fn corner_market_receipt() -> ValidatedReceipt {
        receipt(
            "M&M Corner Market",
            (2022, 3, 20),
            (14, 33),
            vec![
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
            ],
            "9.00",
        )
    }

    #[test]
    fn test_target_receipt_scores_28() {
        let r = target_receipt();
        let b = breakdown(&r);
        assert_eq!(b.get(Rule::RetailerAlphanumerics), 6);
        assert_eq!(b.get(Rule::ItemPairs), 10);
        assert_eq!(b.get(Rule::DescriptionLength), 3 + 3);
        assert_eq!(b.get(Rule::OddPurchaseDay), 6);
        assert_eq!(calculate_points(&r), 28);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        let r = corner_market_receipt();
        let b = breakdown(&r);
        assert_eq!(b.get(Rule::RetailerAlphanumerics), 14);
        assert_eq!(b.get(Rule::RoundDollarTotal), 50);
        assert_eq!(b.get(Rule::QuarterMultipleTotal), 25);
        assert_eq!(b.get(Rule::ItemPairs), 10);
        assert_eq!(b.get(Rule::AfternoonPurchase), 10);
        assert_eq!(calculate_points(&r), 109);
    }

    #[test]
    fn test_rule_order_does_not_matter() {
        for r in [target_receipt(), corner_market_receipt()] {
            let forward: u64 = Rule::ALL.iter().map(|rule| rule.points(&r)).sum();
            let backward: u64 = Rule::ALL.iter().rev().map(|rule| rule.points(&r)).sum();
            assert_eq!(forward, backward);
            assert_eq!(forward, calculate_points(&r));
            assert_eq!(calculate_points(&r), calculate_points(&r));
        }
    }

    #[test]
    fn test_round_dollar_implies_quarter_multiple() {
        for total in ["0", "1", "9.00", "100.0", "35", "123456789"] {
            assert!(is_round_dollar(dec(total)), "{}", total);
            assert!(is_quarter_multiple(dec(total)), "{}", total);
        }
        assert!(is_quarter_multiple(dec("2.75")));
        assert!(!is_round_dollar(dec("2.75")));
        assert!(!is_quarter_multiple(dec("35.35")));
    }

    #[test]
    fn test_afternoon_window_boundaries() {
        let cases = [((13, 59), 0), ((14, 0), 10), ((15, 30), 10), ((16, 0), 10), ((16, 1), 0), ((2, 30), 0)];
        for ((h, m), expected) in cases {
            let r = receipt("", (2022, 1, 2), (h, m), vec![], "0.01");
            assert_eq!(Rule::AfternoonPurchase.points(&r), expected, "{:02}:{:02}", h, m);
        }
    }

    #[test]
    fn test_item_pairs_use_floor_division() {
        let items = |n: usize| (0..n).map(|_| item("ab", "1.00")).collect::<Vec<_>>();
        for (count, expected) in [(0, 0), (1, 0), (2, 5), (5, 10)] {
            let r = receipt("", (2022, 1, 2), (9, 0), items(count), "0.01");
            assert_eq!(Rule::ItemPairs.points(&r), expected);
        }
    }

    #[test]
    fn test_description_bonus_rounds_up_exactly() {
        // 15.00 * 0.2 is exactly 3 in decimal arithmetic
        assert_eq!(description_bonus(dec("15.00")), 3);
        assert_eq!(description_bonus(dec("12.25")), 3);
        assert_eq!(description_bonus(dec("122.25")), 25);
        assert_eq!(description_bonus(dec("0")), 0);
        assert_eq!(description_bonus(dec("-10.00")), 0);
        assert_eq!(description_bonus(Decimal::MAX), u64::MAX);
    }

    #[test]
    fn test_huge_price_saturates_instead_of_vanishing() {
        let huge = description_bonus(dec("99999999999999999999999"));
        assert_eq!(huge, u64::MAX);
        assert!(huge > description_bonus(dec("99999999999")));

        let r = receipt("", (2022, 1, 2), (9, 0), vec![item("abc", "99999999999999999999999")], "0.01");
        assert_eq!(calculate_points(&r), u64::MAX);
    }

    #[test]
    fn test_blank_description_gets_bonus() {
        let r = receipt("", (2022, 1, 2), (9, 0), vec![item("   ", "4.00")], "0.01");
        assert_eq!(Rule::DescriptionLength.points(&r), 1);
    }

    #[test]
    fn test_description_length_counts_characters() {
        // "Crème" is 5 characters but 6 UTF-8 bytes
        let r = receipt("", (2022, 1, 2), (9, 0), vec![item("Crème", "10.00")], "0.01");
        assert_eq!(Rule::DescriptionLength.points(&r), 0);

        let r = receipt("", (2022, 1, 2), (9, 0), vec![item("Crèmes", "10.00")], "0.01");
        assert_eq!(Rule::DescriptionLength.points(&r), 2);
    }

    #[test]
    fn test_retailer_counts_only_letters_and_digits() {
        let r = receipt("M&M Corner Market 7-11!", (2022, 1, 2), (9, 0), vec![], "0.01");
        assert_eq!(Rule::RetailerAlphanumerics.points(&r), 17);
    }

    #[test]
    fn test_zero_total_gets_both_total_bonuses() {
        let r = receipt("", (2022, 1, 2), (9, 0), vec![], "0");
        assert_eq!(calculate_points(&r), 75);
    }
}
