//! Blog post handlers.

use actix_web::{HttpResponse, web};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/blog-posts - newest first.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.content.blog_posts.list_published().await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/blog-posts/latest - the newest post, or `null` when there is none.
pub async fn latest(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let post = state.content.blog_posts.latest().await?;
    Ok(HttpResponse::Ok().json(post))
}
