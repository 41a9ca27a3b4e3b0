//! HTTP handlers and route configuration.

mod blog;
mod contact;
mod content;
mod health;
mod testimonials;

#[cfg(test)]
mod tests;

use actix_web::{HttpResponse, web};

use folio_core::domain::InsertSchema;

use crate::middleware::error::{AppError, AppResult, json_error_handler};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(
            web::scope("/api")
                .route("/health", web::get().to(health::health_check))
                // Read-only content
                .route("/clubs", web::get().to(content::list_clubs))
                .route("/marketing", web::get().to(content::list_marketing_work))
                .route("/projects", web::get().to(content::list_projects))
                .service(
                    web::scope("/blog-posts")
                        .route("", web::get().to(blog::list))
                        .route("/latest", web::get().to(blog::latest)),
                )
                // Public writes
                .service(
                    web::scope("/testimonials")
                        .route("", web::get().to(testimonials::list))
                        .route("", web::post().to(testimonials::create))
                        .route("/schema", web::get().to(testimonials::schema)),
                )
                .service(
                    web::scope("/contact")
                        .route("", web::post().to(contact::create))
                        .route("/schema", web::get().to(contact::schema)),
                )
                .default_service(web::to(not_found)),
        );
}

/// Unwrap a JSON body and hold it to its insert schema.
fn accept<S: InsertSchema>(body: web::Json<S>) -> AppResult<S> {
    let payload = body.into_inner();
    payload.check()?;
    Ok(payload)
}

/// Publish the JSON Schema of an insert payload.
fn describe<S: InsertSchema>() -> HttpResponse {
    HttpResponse::Ok().json(S::describe())
}

async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound)
}
