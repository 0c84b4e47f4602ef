use serde::{Deserialize, Serialize};

/// A salesperson that can be made responsible for an order.
///
/// Loaded wholesale from the salespeople endpoint and never edited locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Salesperson {
    pub id: i64,
    /// Label shown in the salesperson picker.
    #[serde(rename = "descripcion")]
    pub description: String,
}

/// Envelope returned by the salespeople endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SalespeopleResponse {
    pub vendedores: Vec<Salesperson>,
}
