//! Contact form handlers.

use actix_web::{HttpResponse, web};

use folio_core::domain::NewMessage;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/contact
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<NewMessage>,
) -> AppResult<HttpResponse> {
    let message = super::accept(body)?;

    let stored = state.content.messages.create(message).await?;
    tracing::info!(message_id = stored.id, "Contact message stored");

    Ok(HttpResponse::Created().json(stored))
}

/// GET /api/contact/schema
pub async fn schema() -> HttpResponse {
    super::describe::<NewMessage>()
}
