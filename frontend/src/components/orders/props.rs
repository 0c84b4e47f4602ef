//! Properties for the `OrderFormComponent`.
//!
//! The three endpoint locations are the only configuration the form takes.
//! Each defaults to the address of the service the form was built against, so
//! `<OrderFormComponent />` works without any attributes.

use common::endpoints::{DEFAULT_ARTICLES_URL, DEFAULT_ORDERS_URL, DEFAULT_SALESPEOPLE_URL};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct OrderFormProps {
    /// `GET` endpoint answering `{ "vendedores": [...] }`.
    #[prop_or(AttrValue::Static(DEFAULT_SALESPEOPLE_URL))]
    pub salespeople_url: AttrValue,

    /// `GET` endpoint answering a JSON array of articles.
    #[prop_or(AttrValue::Static(DEFAULT_ARTICLES_URL))]
    pub articles_url: AttrValue,

    /// `POST` endpoint receiving `{ "vendedorId": .., "articulos": [..] }`.
    #[prop_or(AttrValue::Static(DEFAULT_ORDERS_URL))]
    pub orders_url: AttrValue,
}
