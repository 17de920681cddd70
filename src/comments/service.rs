use chrono::Utc;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use log::error;

use super::error::CommentsError;
use super::types::{Comment, CreateCommentRequest, NewComment, UpdateCommentRequest};
use crate::shared::schema::{comments, tickets};
use crate::shared::utils::DbPool;

type Conn = PooledConnection<ConnectionManager<SqliteConnection>>;

pub struct CommentService {
    pool: DbPool,
}

impl CommentService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<Conn, CommentsError> {
        self.pool.get().map_err(|e| {
            error!("Failed to get database connection: {e}");
            CommentsError::DatabaseConnection
        })
    }

    /// The referenced ticket is verified before the insert; a missing
    /// ticket creates no row.
    pub async fn create(&self, request: CreateCommentRequest) -> Result<Comment, CommentsError> {
        let mut conn = self.conn()?;

        let ticket_exists: bool = diesel::select(exists(tickets::table.find(request.ticket_id)))
            .get_result(&mut conn)
            .map_err(|e| {
                error!("Failed to check ticket {}: {e}", request.ticket_id);
                CommentsError::QueryFailed
            })?;
        if !ticket_exists {
            return Err(CommentsError::TicketNotFound(request.ticket_id));
        }

        let new_comment = NewComment {
            body: request.body,
            created: Utc::now(),
            ticket_id: request.ticket_id,
        };

        diesel::insert_into(comments::table)
            .values(&new_comment)
            .get_result(&mut conn)
            .map_err(|e| {
                error!("Failed to insert comment: {e}");
                CommentsError::CreateFailed
            })
    }

    /// An empty result set is reported as NotFound, whether the ticket is
    /// missing or simply has no comments yet.
    pub async fn list_by_ticket(&self, ticket_id: i32) -> Result<Vec<Comment>, CommentsError> {
        let mut conn = self.conn()?;
        let found: Vec<Comment> = comments::table
            .filter(comments::ticket_id.eq(ticket_id))
            .load(&mut conn)
            .map_err(|e| {
                error!("Failed to load comments for ticket {ticket_id}: {e}");
                CommentsError::QueryFailed
            })?;
        if found.is_empty() {
            return Err(CommentsError::NoComments(ticket_id));
        }
        Ok(found)
    }

    pub async fn get(&self, id: i32) -> Result<Comment, CommentsError> {
        let mut conn = self.conn()?;
        comments::table
            .find(id)
            .first(&mut conn)
            .optional()
            .map_err(|e| {
                error!("Failed to load comment {id}: {e}");
                CommentsError::QueryFailed
            })?
            .ok_or(CommentsError::NotFound(id))
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateCommentRequest,
    ) -> Result<Comment, CommentsError> {
        let mut conn = self.conn()?;

        if let Some(body) = request.body {
            let updated = diesel::update(comments::table.find(id))
                .set(comments::body.eq(body))
                .execute(&mut conn)
                .map_err(|e| {
                    error!("Failed to update comment {id}: {e}");
                    CommentsError::UpdateFailed
                })?;
            if updated == 0 {
                return Err(CommentsError::NotFound(id));
            }
        }

        comments::table
            .find(id)
            .first(&mut conn)
            .optional()
            .map_err(|e| {
                error!("Failed to load comment {id}: {e}");
                CommentsError::QueryFailed
            })?
            .ok_or(CommentsError::NotFound(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), CommentsError> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(comments::table.find(id))
            .execute(&mut conn)
            .map_err(|e| {
                error!("Failed to delete comment {id}: {e}");
                CommentsError::DeleteFailed
            })?;
        if deleted == 0 {
            return Err(CommentsError::NotFound(id));
        }
        Ok(())
    }
}
