//! Update function for the order form component.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`, mutates
//! the state and returns whether the view should re-render. Network work is
//! spawned from here and reports back through `ctx.link()`.

use gloo_console::{error, log, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::loader::LoadStatus;

use super::helpers::{show_toast, submit_notice};
use super::messages::Msg;
use super::requests::post_order;
use super::state::OrderFormComponent;

pub fn update(
    component: &mut OrderFormComponent,
    ctx: &Context<OrderFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::SalespeopleLoaded(result) => {
            match &result {
                Ok(salespeople) => log!(format!("Vendedores cargados: {}", salespeople.len())),
                Err(err) => error!(format!("Error al obtener los vendedores: {err}")),
            }
            component.catalog.salespeople = LoadStatus::from(result);
            true
        }
        Msg::ArticlesLoaded(result) => {
            match &result {
                Ok(batch) => {
                    log!(format!("Artículos cargados: {}", batch.articles.len()));
                    if batch.discarded() > 0 {
                        warn!(format!(
                            "Artículos descartados: {} con precio negativo, {} con formato inválido",
                            batch.negative_price, batch.malformed
                        ));
                    }
                }
                Err(err) => error!(format!("Error al obtener los artículos: {err}")),
            }
            component.catalog.articles = LoadStatus::from(result.map(|batch| batch.articles));
            true
        }
        Msg::Select(action) => {
            let next = component.selection.reduce(action);
            if next == component.selection {
                return false;
            }
            component.selection = next;
            true
        }
        Msg::Submit => match component.gate.begin(&component.selection) {
            Ok(order) => {
                let url = ctx.props().orders_url.to_string();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = post_order(&url, &order).await;
                    link.send_message(Msg::SubmitFinished(result));
                });
                true
            }
            Err(err) => {
                warn!(format!("Pedido no enviado: {err}"));
                show_toast(submit_notice(&Err(err)));
                false
            }
        },
        Msg::SubmitFinished(result) => {
            component.gate.finish();
            match &result {
                Ok(()) => log!("Pedido guardado"),
                Err(err) => error!(format!("Error al guardar el pedido: {err}")),
            }
            show_toast(submit_notice(&result));
            true
        }
    }
}
