use std::sync::Arc;

use axum::{Form, extract::State, response::Html};
use serde::Deserialize;

use crate::{error::AppError, order::natural_sort_desc, render::index_page, state};

#[derive(Deserialize)]
pub struct Submission {
    echotext: String,
}

pub async fn index_handler(
    State(state): State<Arc<state::State>>,
) -> Result<Html<String>, AppError> {
    render_board(&state, "").await
}

pub async fn submit_handler(
    State(state): State<Arc<state::State>>,
    Form(submission): Form<Submission>,
) -> Result<Html<String>, AppError> {
    state.messages.append(&submission.echotext).await?;

    render_board(&state, &submission.echotext).await
}

async fn render_board(state: &state::State, echo: &str) -> Result<Html<String>, AppError> {
    let messages = state.messages.list_all().await?;
    let keys = natural_sort_desc(messages.keys().cloned().collect());

    Ok(Html(index_page(echo, &keys, &messages)))
}
