use crate::domain::model::{Receipt, ValidatedItem, ValidatedReceipt};
use crate::utils::error::{ReceiptError, Result};
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::LazyLock;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

// chrono accepts single-digit fields, so the exact shape is checked first.
static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());
static TIME_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").unwrap());

pub fn parse_purchase_date(value: &str) -> Result<NaiveDate> {
    if !DATE_SHAPE.is_match(value) {
        return Err(ReceiptError::InvalidDate {
            value: value.to_string(),
        });
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ReceiptError::InvalidDate {
        value: value.to_string(),
    })
}

pub fn parse_purchase_time(value: &str) -> Result<NaiveTime> {
    if !TIME_SHAPE.is_match(value) {
        return Err(ReceiptError::InvalidTime {
            value: value.to_string(),
        });
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| ReceiptError::InvalidTime {
        value: value.to_string(),
    })
}

/// Parses a decimal-in-string amount. Anything unparseable counts as zero so
/// scoring can always complete once the date and time are valid.
pub fn parse_amount(field_name: &str, value: &str) -> Decimal {
    match Decimal::from_str(value.trim()) {
        Ok(amount) => amount,
        Err(e) => {
            tracing::debug!("Treating unparseable {} {:?} as 0: {}", field_name, value, e);
            Decimal::ZERO
        }
    }
}

/// Checks the purchase date and time, then parses every amount once.
/// Date is checked before time and the first failure wins.
pub fn validate_receipt(receipt: Receipt) -> Result<ValidatedReceipt> {
    let purchase_date = parse_purchase_date(&receipt.purchase_date)?;
    let purchase_time = parse_purchase_time(&receipt.purchase_time)?;

    let items = receipt
        .items
        .into_iter()
        .map(|item| ValidatedItem {
            price: parse_amount("price", &item.price),
            short_description: item.short_description,
        })
        .collect();

    Ok(ValidatedReceipt {
        total: parse_amount("total", &receipt.total),
        retailer: receipt.retailer,
        purchase_date,
        purchase_time,
        items,
    })
}
