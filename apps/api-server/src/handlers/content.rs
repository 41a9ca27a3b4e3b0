//! Read-only content collections.

use actix_web::{HttpResponse, web};


use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/clubs
pub async fn list_clubs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let clubs = state.content.clubs.list().await?;
    Ok(HttpResponse::Ok().json(clubs))
}

/// GET /api/marketing
pub async fn list_marketing_work(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let work = state.content.marketing.list().await?;
    Ok(HttpResponse::Ok().json(work))
}

/// GET /api/projects
pub async fn list_projects(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let projects = state.content.projects.list().await?;
    Ok(HttpResponse::Ok().json(projects))
}
