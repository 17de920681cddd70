use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::schema::comments;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable)]
pub struct Comment {
    pub id: i32,
    pub body: String,
    pub created: DateTime<Utc>,
    pub ticket_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment {
    pub body: String,
    pub created: DateTime<Utc>,
    pub ticket_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub ticket_id: i32,
    pub body: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCommentRequest {
    pub body: Option<String>,
}
