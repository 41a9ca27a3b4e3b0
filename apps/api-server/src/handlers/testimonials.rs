//! Testimonial handlers.
//!
//! Submissions are published immediately; there is no moderation step.

use actix_web::{HttpResponse, web};

use folio_core::domain::NewTestimonial;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/testimonials
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let testimonials = state.content.testimonials.list().await?;
    Ok(HttpResponse::Ok().json(testimonials))
}

/// POST /api/testimonials
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<NewTestimonial>,
) -> AppResult<HttpResponse> {
    let testimonial = super::accept(body)?;

    let stored = state.content.testimonials.create(testimonial).await?;
    tracing::info!(testimonial_id = stored.id, "Testimonial published");

    Ok(HttpResponse::Created().json(stored))
}

/// GET /api/testimonials/schema
pub async fn schema() -> HttpResponse {
    super::describe::<NewTestimonial>()
}
