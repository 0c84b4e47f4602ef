use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog line item that can be included in an order.
///
/// `code` is the unique key; it is also what gets sent in the order payload.
/// After loading, `price` is never negative (see `loader::parse_articles`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// Unit price. Accepts JSON numbers as well as decimal strings.
    #[serde(rename = "precio")]
    pub price: Decimal,
    /// Quantity held in the deposit.
    #[serde(rename = "deposito")]
    pub stock: i64,
}

impl Article {
    pub fn has_valid_price(&self) -> bool {
        self.price >= Decimal::ZERO
    }
}
