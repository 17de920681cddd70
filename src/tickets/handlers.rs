use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use super::error::TicketsError;
use super::service::TicketService;
use super::types::{CreateTicketRequest, Ticket, UpdateTicketRequest};
use crate::shared::state::AppState;

pub fn configure_tickets_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ticket", post(create_ticket_handler))
        .route("/tickets", get(list_tickets_handler))
        .route(
            "/ticket/:id",
            get(get_ticket_handler)
                .put(update_ticket_handler)
                .delete(delete_ticket_handler),
        )
}

pub async fn create_ticket_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateTicketRequest>,
) -> Result<(StatusCode, Json<Ticket>), TicketsError> {
    let service = TicketService::new(state.conn.clone());
    let ticket = service.create(request).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

pub async fn list_tickets_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Ticket>>, TicketsError> {
    let service = TicketService::new(state.conn.clone());
    let tickets = service.list().await?;
    Ok(Json(tickets))
}

pub async fn get_ticket_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<Ticket>, TicketsError> {
    let service = TicketService::new(state.conn.clone());
    let ticket = service.get(id).await?;
    Ok(Json(ticket))
}

pub async fn update_ticket_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateTicketRequest>,
) -> Result<(StatusCode, Json<Ticket>), TicketsError> {
    let service = TicketService::new(state.conn.clone());
    let ticket = service.update(id, request).await?;
    Ok((StatusCode::ACCEPTED, Json(ticket)))
}

pub async fn delete_ticket_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<String, TicketsError> {
    let service = TicketService::new(state.conn.clone());
    service.delete(id).await?;
    Ok(format!("Ticket {id} deleted"))
}
