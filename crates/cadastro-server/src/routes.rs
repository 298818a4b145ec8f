// File: src/routes.rs
// Purpose: HTTP handlers forwarding edit and submit events to the form controller

use crate::views;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Form, Router,
};
use cadastro_form::{Field, FormContext, FormController};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    controller: FormController,
}

pub fn router(controller: FormController) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/fields/:field", post(edit_handler))
        .route("/submit", post(submit_handler))
        .route("/api/state", get(state_handler))
        .with_state(AppState { controller })
}

async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let ctx = state.controller.context().await;
    Html(views::page(&ctx).into_string())
}

/// One keystroke: store the value, return the field's error slot
async fn edit_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let field: Field = match key.parse() {
        Ok(field) => field,
        Err(err) => {
            warn!(%err, "edit for unknown field rejected");
            return (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()).into_response();
        }
    };

    // htmx posts the input under its own name; plain clients may use `value`
    let value = form
        .get(field.key())
        .or_else(|| form.get("value"))
        .cloned()
        .unwrap_or_default();

    let next = state.controller.edit(field, value).await;
    Html(views::field_error(field, &FormContext::from(&next)).into_string()).into_response()
}

/// Full form post: sync posted values, then run the validation pass
async fn submit_handler(
    State(state): State<AppState>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    for (key, value) in form {
        match key.parse::<Field>() {
            Ok(field) => {
                state.controller.edit(field, value).await;
            }
            Err(err) => debug!(%err, "ignoring posted key"),
        }
    }

    let outcome = state.controller.submit().await;
    let status = if outcome.is_accepted() {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    let ctx = state.controller.context().await;
    (status, Html(views::page(&ctx).into_string())).into_response()
}

async fn state_handler(State(state): State<AppState>) -> Json<FormContext> {
    Json(state.controller.context().await)
}
