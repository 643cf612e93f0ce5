use super::constants::{fields, kinds, DEFAULT_PRODUCT_NAME};
use super::patterns::is_valid_email;
use super::types::{Record, Value};
use serde::{Deserialize, Serialize};

/// A user record reduced to its identity fields plus an email verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEntry {
    pub username: Value,
    pub email: Value,
    pub is_valid: bool,
}

/// A product record reduced to its line total, before and after discount.
///
/// `total` stays an integer when price and quantity both are; `discounted`
/// is a float once a valid discount applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntry {
    pub name: Value,
    pub total: Value,
    pub discounted: Value,
}

impl ProductEntry {
    pub fn total_amount(&self) -> f64 {
        self.total.as_number().unwrap_or(0.0)
    }

    pub fn discounted_amount(&self) -> f64 {
        self.discounted.as_number().unwrap_or(0.0)
    }
}

/// Kind declared by a record's `type` field, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKind {
    User,
    Product,
    Other(String),
}

impl RecordKind {
    /// `None` when the record has no textual `type` field.
    pub fn of(record: &Record) -> Option<Self> {
        let declared = record.get(fields::TYPE)?.as_str()?.to_lowercase();
        Some(match declared.as_str() {
            kinds::USER => RecordKind::User,
            kinds::PRODUCT => RecordKind::Product,
            _ => RecordKind::Other(declared),
        })
    }
}

/// Entry appended to one of the derived collections.
#[derive(Debug, Clone, PartialEq)]
pub enum SideEntry {
    User(UserEntry),
    Product(ProductEntry),
}

/// Derives the side-collection entry for a record, if its kind calls for one
/// and the fields that kind needs are present.
pub fn aggregate_by_kind(record: &Record) -> Option<SideEntry> {
    match RecordKind::of(record)? {
        RecordKind::User => user_entry(record).map(SideEntry::User),
        RecordKind::Product => product_entry(record).map(SideEntry::Product),
        RecordKind::Other(_) => None,
    }
}

pub fn user_entry(record: &Record) -> Option<UserEntry> {
    let username = record.get(fields::USERNAME)?;
    let email = record.get(fields::EMAIL)?;

    Some(UserEntry {
        username: username.clone(),
        email: email.clone(),
        is_valid: email.as_str().is_some_and(is_valid_email),
    })
}

/// `None` when price or quantity is missing or not numeric.
pub fn product_entry(record: &Record) -> Option<ProductEntry> {
    let total = line_total(record.get(fields::PRICE)?, record.get(fields::QUANTITY)?)?;
    let amount = total.as_number()?;

    let name = record
        .get(fields::NAME)
        .cloned()
        .unwrap_or_else(|| Value::from(DEFAULT_PRODUCT_NAME));

    // A discount that is not a number is treated like an out-of-range one.
    let percent = match record.get(fields::DISCOUNT) {
        None => Some(0.0),
        Some(discount) => arithmetic_operand(discount),
    };
    let discounted = match percent {
        Some(p) if (0.0..=100.0).contains(&p) => Value::Float(apply_discount(amount, p)),
        _ => total.clone(),
    };

    Some(ProductEntry {
        name,
        total,
        discounted,
    })
}

/// Applies a percentage discount; percentages outside `[0, 100]` leave the
/// amount unchanged.
pub fn apply_discount(amount: f64, discount: f64) -> f64 {
    if (0.0..=100.0).contains(&discount) {
        amount * (1.0 - discount / 100.0)
    } else {
        amount
    }
}

/// Integer product when both operands are integral and it fits in `i64`.
fn line_total(price: &Value, quantity: &Value) -> Option<Value> {
    if let (Some(p), Some(q)) = (integral_operand(price), integral_operand(quantity)) {
        if let Some(product) = p.checked_mul(q) {
            return Some(Value::Int(product));
        }
    }
    Some(Value::Float(arithmetic_operand(price)? * arithmetic_operand(quantity)?))
}

fn integral_operand(value: &Value) -> Option<i64> {
    match value {
        Value::Int(i) => Some(*i),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    }
}

/// Numbers and booleans only; numeric text is not arithmetic input.
fn arithmetic_operand(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(_) | Value::Int(_) | Value::Float(_) => value.coerce_number(),
        _ => None,
    }
}
