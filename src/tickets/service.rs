use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};
use log::error;

use super::error::TicketsError;
use super::types::{CreateTicketRequest, NewTicket, Ticket, TicketChangeset, UpdateTicketRequest};
use crate::shared::schema::tickets;
use crate::shared::utils::DbPool;

type Conn = PooledConnection<ConnectionManager<SqliteConnection>>;

pub struct TicketService {
    pool: DbPool,
}

impl TicketService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> Result<Conn, TicketsError> {
        self.pool.get().map_err(|e| {
            error!("Failed to get database connection: {e}");
            TicketsError::DatabaseConnection
        })
    }

    pub async fn create(&self, request: CreateTicketRequest) -> Result<Ticket, TicketsError> {
        let mut conn = self.conn()?;
        let now = Utc::now();
        let new_ticket = NewTicket {
            title: request.title,
            description: request.description,
            status: "open".to_string(),
            created: now,
            updated: now,
        };

        diesel::insert_into(tickets::table)
            .values(&new_ticket)
            .get_result(&mut conn)
            .map_err(|e| {
                error!("Failed to insert ticket: {e}");
                TicketsError::CreateFailed
            })
    }

    pub async fn list(&self) -> Result<Vec<Ticket>, TicketsError> {
        let mut conn = self.conn()?;
        tickets::table.load(&mut conn).map_err(|e| {
            error!("Failed to load tickets: {e}");
            TicketsError::QueryFailed
        })
    }

    pub async fn get(&self, id: i32) -> Result<Ticket, TicketsError> {
        let mut conn = self.conn()?;
        tickets::table
            .find(id)
            .first(&mut conn)
            .optional()
            .map_err(|e| {
                error!("Failed to load ticket {id}: {e}");
                TicketsError::QueryFailed
            })?
            .ok_or(TicketsError::NotFound(id))
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateTicketRequest,
    ) -> Result<Ticket, TicketsError> {
        let mut conn = self.conn()?;
        let changes = TicketChangeset {
            title: request.title,
            description: request.description,
            status: request.status,
            updated: Utc::now(),
        };

        let updated = diesel::update(tickets::table.find(id))
            .set(&changes)
            .execute(&mut conn)
            .map_err(|e| {
                error!("Failed to update ticket {id}: {e}");
                TicketsError::UpdateFailed
            })?;
        if updated == 0 {
            return Err(TicketsError::NotFound(id));
        }

        tickets::table.find(id).first(&mut conn).map_err(|e| {
            error!("Failed to load ticket {id}: {e}");
            TicketsError::QueryFailed
        })
    }

    pub async fn delete(&self, id: i32) -> Result<(), TicketsError> {
        let mut conn = self.conn()?;
        let deleted = diesel::delete(tickets::table.find(id))
            .execute(&mut conn)
            .map_err(|e| {
                error!("Failed to delete ticket {id}: {e}");
                TicketsError::DeleteFailed
            })?;
        if deleted == 0 {
            return Err(TicketsError::NotFound(id));
        }
        Ok(())
    }
}
