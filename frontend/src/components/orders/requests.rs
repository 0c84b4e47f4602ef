//! HTTP calls made by the order form.
//!
//! Each function turns `gloo_net` failures into the crate's error types and
//! hands decoding to `common::loader`, which is where the response shapes are
//! checked.

use gloo_net::http::Request;

use common::error::{LoadError, SubmitError};
use common::loader::{parse_articles, parse_salespeople, ArticleBatch};
use common::model::order::Order;
use common::model::salesperson::Salesperson;
use common::submission::check_status;

/// Reads the body of a `GET` without looking at the status code; the shape of
/// the body decides whether the load worked.
async fn fetch_body(url: &str) -> Result<String, LoadError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LoadError::Transport(e.to_string()))?;

    response
        .text()
        .await
        .map_err(|e| LoadError::Transport(e.to_string()))
}

pub async fn fetch_salespeople(url: &str) -> Result<Vec<Salesperson>, LoadError> {
    let body = fetch_body(url).await?;
    parse_salespeople(&body)
}

pub async fn fetch_articles(url: &str) -> Result<ArticleBatch, LoadError> {
    let body = fetch_body(url).await?;
    parse_articles(&body)
}

/// Posts the order as JSON. Only the status code is inspected.
pub async fn post_order(url: &str, order: &Order) -> Result<(), SubmitError> {
    let request = Request::post(url)
        .json(order)
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Transport(e.to_string()))?;

    check_status(response.status())
}
