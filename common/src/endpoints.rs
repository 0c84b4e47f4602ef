//! Default endpoint locations used when the form is mounted without overrides.

/// Salespeople list, `GET`, answers `{ "vendedores": [...] }`.
pub const DEFAULT_SALESPEOPLE_URL: &str =
    "https://run.mocky.io/v3/80bd3e3a-db87-4998-a3ed-d3ee24b1f507";

/// Article catalog, `GET`, answers a bare JSON array.
pub const DEFAULT_ARTICLES_URL: &str = "https://localhost:7207/api/Producto/articulos";

/// Order creation, `POST` with a JSON body.
pub const DEFAULT_ORDERS_URL: &str = "https://localhost:7207/api/Pedidos";
