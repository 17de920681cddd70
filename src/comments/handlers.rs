use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use super::error::CommentsError;
use super::service::CommentService;
use super::types::{Comment, CreateCommentRequest, UpdateCommentRequest};
use crate::shared::state::AppState;

pub fn configure_comments_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/comment", post(create_comment_handler))
        .route(
            "/comments-by-ticket-id/:id",
            get(list_comments_by_ticket_handler),
        )
        .route(
            "/comment/:id",
            get(get_comment_handler)
                .put(update_comment_handler)
                .delete(delete_comment_handler),
        )
}

pub async fn create_comment_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), CommentsError> {
    let service = CommentService::new(state.conn.clone());
    let comment = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

pub async fn list_comments_by_ticket_handler(
    State(state): State<Arc<AppState>>,
    Path(ticket_id): Path<i32>,
) -> Result<Json<Vec<Comment>>, CommentsError> {
    let service = CommentService::new(state.conn.clone());
    let comments = service.list_by_ticket(ticket_id).await?;
    Ok(Json(comments))
}

pub async fn get_comment_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Comment>, CommentsError> {
    let service = CommentService::new(state.conn.clone());
    let comment = service.get(id).await?;
    Ok(Json(comment))
}

pub async fn update_comment_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateCommentRequest>,
) -> Result<(StatusCode, Json<Comment>), CommentsError> {
    let service = CommentService::new(state.conn.clone());
    let comment = service.update(id, request).await?;
    Ok((StatusCode::ACCEPTED, Json(comment)))
}

pub async fn delete_comment_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<String, CommentsError> {
    let service = CommentService::new(state.conn.clone());
    service.delete(id).await?;
    Ok(format!("Comment {id} deleted"))
}
