use serde::Serialize;

use crate::error::ValidationError;
use crate::selection::Selection;

/// Payload for the order creation endpoint.
///
/// Only built from a [`Selection`] that has a salesperson and at least one
/// article, so every `Order` value is sendable. It is serialized once and
/// dropped when the request resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    #[serde(rename = "vendedorId")]
    salesperson_id: i64,
    #[serde(rename = "articulos")]
    articles: Vec<String>,
}

impl Order {
    /// Builds the payload from the current selection.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingSalesperson`] when no salesperson is
    /// chosen, then [`ValidationError::NoArticles`] when the article set is empty.
    pub fn from_selection(selection: &Selection) -> Result<Self, ValidationError> {
        let salesperson_id = selection
            .salesperson()
            .ok_or(ValidationError::MissingSalesperson)?;

        if selection.article_count() == 0 {
            return Err(ValidationError::NoArticles);
        }

        Ok(Self {
            salesperson_id,
            articles: selection.articles().map(str::to_owned).collect(),
        })
    }

    pub fn salesperson_id(&self) -> i64 {
        self.salesperson_id
    }

    pub fn articles(&self) -> &[String] {
        &self.articles
    }
}
