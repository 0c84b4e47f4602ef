//! Utility functions for the order form.
//!
//! - **User Feedback**: toast notifications and the fixed Spanish notices the
//!   form shows for load and submit outcomes. Error details never reach the
//!   user; they go to the console instead.
//! - **Formatting / parsing**: price cells and the salesperson `<select>` value.

use rust_decimal::Decimal;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use common::error::SubmitError;
use common::loader::Resource;

pub const LOADING: &str = "Cargando...";
pub const SALESPEOPLE_LOAD_FAILED: &str = "Error al obtener los vendedores.";
pub const ARTICLES_LOAD_FAILED: &str = "Error al obtener los artículos.";
pub const SELECTION_INCOMPLETE: &str = "Seleccione un vendedor y como mínimo un artículo.";
pub const ORDER_IN_FLIGHT: &str = "Ya hay un pedido en curso.";
pub const ORDER_SAVED: &str = "Pedido guardado de forma correcta";
pub const ORDER_REJECTED: &str = "Error al guardar el pedido";
pub const ORDER_FAILED: &str = "Hubo un error al guardar el pedido";

/// Generic message shown in place of the form when `resource` failed to load.
pub fn load_error_message(resource: Resource) -> &'static str {
    match resource {
        Resource::Salespeople => SALESPEOPLE_LOAD_FAILED,
        Resource::Articles => ARTICLES_LOAD_FAILED,
    }
}

/// Notice for a submit attempt, whether it stopped at validation or reached
/// the server.
pub fn submit_notice(result: &Result<(), SubmitError>) -> &'static str {
    match result {
        Ok(()) => ORDER_SAVED,
        Err(SubmitError::Validation(_)) => SELECTION_INCOMPLETE,
        Err(SubmitError::InFlight) => ORDER_IN_FLIGHT,
        Err(SubmitError::Rejected(_)) => ORDER_REJECTED,
        Err(SubmitError::Transport(_)) => ORDER_FAILED,
    }
}

/// Two decimals, as shown in the price column.
pub fn format_price(price: Decimal) -> String {
    format!("{:.2}", price.round_dp(2))
}

/// Maps the `<select>` value to a salesperson id. The placeholder option has
/// an empty value and maps to `None`.
pub fn parse_salesperson_value(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Displays a temporary notification message at the bottom of the screen.
///
/// Creates a styled `div`, appends it to `<body>` and removes it after three
/// seconds. Used for every submit outcome, in place of a blocking `alert`.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
