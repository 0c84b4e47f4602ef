//! Decoding of the two read-only lists and per-resource load tracking.
//!
//! The salespeople and article lists load independently. Each has its own
//! [`LoadStatus`] slot inside a [`Catalog`], so a failure of one request can
//! neither hide nor overwrite the outcome of the other.

use serde_json::Value;

use crate::error::LoadError;
use crate::model::article::Article;
use crate::model::salesperson::{SalespeopleResponse, Salesperson};

/// The two lists the form depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Salespeople,
    Articles,
}

/// Lifecycle of one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus<T> {
    #[default]
    NotLoaded,
    Loading,
    Loaded(T),
    Failed(LoadError),
}

impl<T> LoadStatus<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// `true` once the request has resolved, successfully or not.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Loaded(_) | Self::Failed(_))
    }
}

impl<T> From<Result<T, LoadError>> for LoadStatus<T> {
    fn from(result: Result<T, LoadError>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err),
        }
    }
}

/// What the form should render given both load slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    /// At least one list failed; only the failures are shown.
    Failed(Vec<Resource>),
    /// Nothing failed yet but something is still outstanding.
    Loading,
    /// Both lists are available.
    Ready,
}

/// Load state of both lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub salespeople: LoadStatus<Vec<Salesperson>>,
    pub articles: LoadStatus<Vec<Article>>,
}

impl Catalog {
    /// Marks both requests as in flight.
    pub fn begin(&mut self) {
        self.salespeople = LoadStatus::Loading;
        self.articles = LoadStatus::Loading;
    }

    /// Failures win over loading, loading wins over the form. No partial data
    /// is ever shown next to an error.
    pub fn phase(&self) -> FormPhase {
        let mut failed = Vec::new();
        if self.salespeople.error().is_some() {
            failed.push(Resource::Salespeople);
        }
        if self.articles.error().is_some() {
            failed.push(Resource::Articles);
        }

        if !failed.is_empty() {
            FormPhase::Failed(failed)
        } else if self.salespeople.is_settled() && self.articles.is_settled() {
            FormPhase::Ready
        } else {
            FormPhase::Loading
        }
    }

    pub fn salespeople(&self) -> &[Salesperson] {
        self.salespeople.loaded().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn articles(&self) -> &[Article] {
        self.articles.loaded().map(Vec::as_slice).unwrap_or_default()
    }
}

/// Decoded article list with a tally of what was dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleBatch {
    pub articles: Vec<Article>,
    /// Entries discarded because their price was below zero.
    pub negative_price: usize,
    /// Entries discarded because they did not decode as an article.
    pub malformed: usize,
}

impl ArticleBatch {
    pub fn discarded(&self) -> usize {
        self.negative_price + self.malformed
    }
}

/// Decodes the salespeople endpoint body.
///
/// # Errors
///
/// Returns [`LoadError::Format`] unless the body is an object whose
/// `vendedores` key holds an array of salespeople.
pub fn parse_salespeople(body: &str) -> Result<Vec<Salesperson>, LoadError> {
    let response: SalespeopleResponse =
        serde_json::from_str(body).map_err(|e| LoadError::Format(e.to_string()))?;
    Ok(response.vendedores)
}

/// Decodes the articles endpoint body, dropping negative prices.
///
/// Only the outer array is required. Individual entries that fail to decode
/// are skipped and counted in [`ArticleBatch::malformed`] instead of failing
/// the whole list.
///
/// # Errors
///
/// Returns [`LoadError::Format`] when the body is not a JSON array.
pub fn parse_articles(body: &str) -> Result<ArticleBatch, LoadError> {
    let entries: Vec<Value> =
        serde_json::from_str(body).map_err(|e| LoadError::Format(e.to_string()))?;

    let mut batch = ArticleBatch::default();
    for entry in entries {
        match serde_json::from_value::<Article>(entry) {
            Ok(article) if article.has_valid_price() => batch.articles.push(article),
            Ok(_) => batch.negative_price += 1,
            Err(_) => batch.malformed += 1,
        }
    }

    Ok(batch)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_salespeople() {
        let body = json!({ "vendedores": [
            { "id": 1, "descripcion": "Ana" },
            { "id": 2, "descripcion": "Luis" }
        ]})
        .to_string();

        let salespeople = parse_salespeople(&body).unwrap();
        assert_eq!(salespeople.len(), 2);
        assert_eq!(salespeople[0].id, 1);
        assert_eq!(salespeople[1].description, "Luis");
    }

    #[test]
    fn test_parse_salespeople_missing_key() {
        let body = json!({ "sellers": [] }).to_string();
        assert!(matches!(parse_salespeople(&body), Err(LoadError::Format(_))));
    }

    #[test]
    fn test_parse_salespeople_key_not_an_array() {
        let body = json!({ "vendedores": "Ana" }).to_string();
        assert!(matches!(parse_salespeople(&body), Err(LoadError::Format(_))));
    }

    #[test]
    fn test_parse_salespeople_bare_array() {
        let body = json!([{ "id": 1, "descripcion": "Ana" }]).to_string();
        assert!(matches!(parse_salespeople(&body), Err(LoadError::Format(_))));
    }

    #[test]
    fn test_parse_salespeople_not_json() {
        assert!(matches!(
            parse_salespeople("<html>502</html>"),
            Err(LoadError::Format(_))
        ));
    }

    #[test]
    fn test_parse_articles_drops_negative_prices() {
        let body = json!([
            { "codigo": "A1", "descripcion": "Pen", "precio": 1.5, "deposito": 10 },
            { "codigo": "A2", "descripcion": "Bad", "precio": -1, "deposito": 0 },
            { "codigo": "A3", "descripcion": "Free", "precio": 0, "deposito": 3 },
            { "codigo": "A4", "descripcion": "Worse", "precio": -0.01, "deposito": 1 }
        ])
        .to_string();

        let batch = parse_articles(&body).unwrap();
        let codes: Vec<&str> = batch.articles.iter().map(|a| a.code.as_str()).collect();
        assert_eq!(codes, vec!["A1", "A3"]);
        assert_eq!(batch.negative_price, 2);
        assert_eq!(batch.malformed, 0);
        assert_eq!(batch.articles[0].price, Decimal::new(15, 1));
        assert!(batch.articles.iter().all(Article::has_valid_price));
    }

    #[test]
    fn test_parse_articles_length_accounts_for_discards() {
        let body = json!([
            { "codigo": "A1", "descripcion": "Pen", "precio": 2, "deposito": 1 },
            { "codigo": "A2", "descripcion": "Bad", "precio": -5, "deposito": 0 },
            { "codigo": "A3", "precio": "not a number", "deposito": 0 },
            { "codigo": "A4", "descripcion": "Cup", "precio": 3.25, "deposito": 8 }
        ])
        .to_string();

        let batch = parse_articles(&body).unwrap();
        assert_eq!(batch.articles.len(), 4 - batch.discarded());
        assert_eq!(batch.negative_price, 1);
        assert_eq!(batch.malformed, 1);
    }

    #[test]
    fn test_parse_articles_tolerates_missing_description() {
        let body = json!([{ "codigo": "A1", "precio": 1, "deposito": 1 }]).to_string();
        let batch = parse_articles(&body).unwrap();
        assert_eq!(batch.articles[0].description, "");
    }

    #[test]
    fn test_parse_articles_empty_list() {
        let batch = parse_articles("[]").unwrap();
        assert!(batch.articles.is_empty());
        assert_eq!(batch.discarded(), 0);
    }

    #[test]
    fn test_parse_articles_requires_array() {
        let body = json!({ "articulos": [] }).to_string();
        assert!(matches!(parse_articles(&body), Err(LoadError::Format(_))));
    }

    #[test]
    fn test_status_from_result() {
        let ok: Result<Vec<Salesperson>, LoadError> = Ok(Vec::new());
        assert!(LoadStatus::from(ok).loaded().is_some());

        let err: Result<Vec<Salesperson>, LoadError> = Err(LoadError::Transport("reset".into()));
        let status = LoadStatus::from(err);
        assert!(status.is_settled());
        assert_eq!(status.error(), Some(&LoadError::Transport("reset".into())));
    }

    #[test]
    fn test_phase_starts_loading() {
        let mut catalog = Catalog::default();
        catalog.begin();
        assert_eq!(catalog.phase(), FormPhase::Loading);
    }

    #[test]
    fn test_phase_ready_needs_both_lists() {
        let mut catalog = Catalog::default();
        catalog.begin();
        catalog.salespeople = LoadStatus::Loaded(Vec::new());
        assert_eq!(catalog.phase(), FormPhase::Loading);

        catalog.articles = LoadStatus::Loaded(Vec::new());
        assert_eq!(catalog.phase(), FormPhase::Ready);
    }

    #[test]
    fn test_failure_hides_partial_data() {
        let mut catalog = Catalog::default();
        catalog.begin();
        catalog.articles = LoadStatus::Loaded(Vec::new());
        catalog.salespeople = LoadStatus::Failed(LoadError::Format("missing vendedores".into()));

        assert_eq!(
            catalog.phase(),
            FormPhase::Failed(vec![Resource::Salespeople])
        );
    }

    #[test]
    fn test_failure_wins_while_other_is_in_flight() {
        let mut catalog = Catalog::default();
        catalog.begin();
        catalog.articles = LoadStatus::Failed(LoadError::Transport("offline".into()));
        assert_eq!(catalog.phase(), FormPhase::Failed(vec![Resource::Articles]));
    }

    #[test]
    fn test_both_failures_are_kept() {
        let mut catalog = Catalog::default();
        catalog.begin();
        catalog.articles = LoadStatus::Failed(LoadError::Transport("offline".into()));
        catalog.salespeople = LoadStatus::Failed(LoadError::Transport("offline".into()));

        assert_eq!(
            catalog.phase(),
            FormPhase::Failed(vec![Resource::Salespeople, Resource::Articles])
        );
    }
}
