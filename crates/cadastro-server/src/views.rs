// File: src/views.rs
// Purpose: Maud templates for the registration page

use cadastro_form::{Field, FormContext};
use maud::{html, Markup, DOCTYPE};

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@1.9.12";

/// Full registration page
pub fn page(ctx: &FormContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Cadastro de Usuário" }
                script src=(HTMX_SRC) {}
            }
            body {
                div class="container" {
                    div class="form-container" {
                        h1 { "Cadastro de Usuário" }
                        (form(ctx))
                    }
                }
            }
        }
    }
}

/// Success banner plus the form itself
pub fn form(ctx: &FormContext) -> Markup {
    html! {
        @if ctx.show_success {
            div class="success-message" {
                p { "✅ Cadastro realizado com sucesso!" }
            }
        }
        form id="registration-form" class="registration-form" method="post" action="/submit" novalidate {
            @for field in Field::ALL {
                (field_group(field, ctx))
            }
            button type="submit" class="submit-btn" { "Cadastrar" }
        }
    }
}

/// Label, input and inline error for one field
///
/// Each keystroke posts the value and swaps in the (possibly cleared) error.
pub fn field_group(field: Field, ctx: &FormContext) -> Markup {
    let key = field.key();
    let error_class = ctx.has_error(field).then_some("error");

    html! {
        div class="form-group" {
            label for=(key) { (field.label()) }
            input
                id=(key)
                name=(key)
                type=(field.input_type())
                value=(ctx.get_value(field))
                placeholder=(field.placeholder())
                class=[error_class]
                hx-post=(format!("/fields/{}", key))
                hx-trigger="input changed"
                hx-target=(format!("#{}", error_id(field)))
                hx-swap="outerHTML";
            (field_error(field, ctx))
        }
    }
}

/// Inline error slot; rendered empty when the field has no error
pub fn field_error(field: Field, ctx: &FormContext) -> Markup {
    html! {
        span id=(error_id(field)) class="error-message" {
            @if let Some(message) = ctx.get_error(field) {
                (message)
            }
        }
    }
}

fn error_id(field: Field) -> String {
    format!("{}-error", field.key())
}
