use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::schema::tickets;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable)]
pub struct Ticket {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub status: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = tickets)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub status: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateTicketRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Fields absent from the request stay `None` and are skipped by the
/// changeset; `updated` is refreshed on every update.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = tickets)]
pub struct TicketChangeset {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub updated: DateTime<Utc>,
}
