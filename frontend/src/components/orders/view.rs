//! View rendering for the order form.
//!
//! Until both lists are in, the component shows either the failure notices or
//! the loading text, never a half-populated form.

use web_sys::HtmlSelectElement;
use yew::html::Scope;
use yew::prelude::*;

use common::loader::FormPhase;
use common::model::article::Article;
use common::selection::SelectionAction;

use super::helpers::{format_price, load_error_message, parse_salesperson_value, LOADING};
use super::messages::Msg;
use super::state::OrderFormComponent;
use super::styles;

pub fn view(component: &OrderFormComponent, ctx: &Context<OrderFormComponent>) -> Html {
    match component.catalog.phase() {
        FormPhase::Failed(resources) => html! {
            <div class="order-form-error">
                { for resources.into_iter().map(|resource| html! { <div>{ load_error_message(resource) }</div> }) }
            </div>
        },
        FormPhase::Loading => html! { <div>{ LOADING }</div> },
        FormPhase::Ready => build_form(component, ctx.link()),
    }
}

fn build_form(component: &OrderFormComponent, link: &Scope<OrderFormComponent>) -> Html {
    let sending = component.gate.is_sending();

    html! {
        <div style={styles::ROOT}>
            <h2>{"Creacion de Pedido"}</h2>
            { build_salesperson_picker(component, link) }
            <div>
                <h2>{"Artículos"}</h2>
                { build_article_table(component, link) }
            </div>
            <button
                onclick={link.callback(|_| Msg::Submit)}
                disabled={sending}
                style={if sending { styles::SUBMIT_BUTTON_BUSY } else { styles::SUBMIT_BUTTON }}
            >
                { if sending { "Guardando..." } else { "Guardar Pedido" } }
            </button>
        </div>
    }
}

fn build_salesperson_picker(component: &OrderFormComponent, link: &Scope<OrderFormComponent>) -> Html {
    let selected = component.selection.salesperson();
    let options = component
        .catalog
        .salespeople()
        .iter()
        .map(|salesperson| {
            html! {
                <option
                    key={salesperson.id.to_string()}
                    value={salesperson.id.to_string()}
                    selected={selected == Some(salesperson.id)}
                >
                    { salesperson.description.clone() }
                </option>
            }
        })
        .collect::<Html>();

    html! {
        <div style={styles::FIELD}>
            <label for="vendedor" style={styles::LABEL}>{"Vendedor:"}</label>
            <select
                id="vendedor"
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::Select(SelectionAction::SelectSalesperson(parse_salesperson_value(&select.value())))
                })}
            >
                <option value="" selected={selected.is_none()}>{"Seleccione un vendedor"}</option>
                { options }
            </select>
        </div>
    }
}

fn build_article_table(component: &OrderFormComponent, link: &Scope<OrderFormComponent>) -> Html {
    let articles = component.catalog.articles();
    let rows = if articles.is_empty() {
        html! {
            <tr>
                <td colspan="5" style={styles::CELL_CENTER}>{"Sin artículos disponibles."}</td>
            </tr>
        }
    } else {
        articles
            .iter()
            .map(|article| article_row(component, link, article))
            .collect::<Html>()
    };

    html! {
        <table style={styles::TABLE}>
            <thead>
                <tr>
                    <th style={styles::HEADER_LEFT}>{"Seleccionar"}</th>
                    <th style={styles::HEADER_LEFT}>{"Código"}</th>
                    <th style={styles::HEADER_LEFT}>{"Descripción"}</th>
                    <th style={styles::HEADER_RIGHT}>{"Precio"}</th>
                    <th style={styles::HEADER_CENTER}>{"Depósito"}</th>
                </tr>
            </thead>
            <tbody>
                { rows }
            </tbody>
        </table>
    }
}

fn article_row(
    component: &OrderFormComponent,
    link: &Scope<OrderFormComponent>,
    article: &Article,
) -> Html {
    let code = article.code.clone();
    let on_toggle = link.callback(move |_: Event| {
        Msg::Select(SelectionAction::ToggleArticle(code.clone()))
    });

    html! {
        <tr key={article.code.clone()}>
            <td style={styles::CELL_CENTER}>
                <input
                    type="checkbox"
                    onchange={on_toggle}
                    checked={component.selection.is_selected(&article.code)}
                />
            </td>
            <td style={styles::CELL}>{ article.code.clone() }</td>
            <td style={styles::CELL}>{ article.description.clone() }</td>
            <td style={styles::CELL_RIGHT}>{ format_price(article.price) }</td>
            <td style={styles::CELL_CENTER}>{ article.stock }</td>
        </tr>
    }
}
