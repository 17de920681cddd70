use diesel::connection::SimpleConnection;
use diesel::QueryResult;
use diesel::SqliteConnection;
use log::info;

/// Schema for the two ticketing tables. Runs once at startup and only
/// creates what is absent; existing tables are never altered.
///
/// The comments FK is declared but not enforced (SQLite default), so
/// deleting a ticket leaves its comments in place.
pub fn create_ticketing_tables_migration() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS tickets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'open',
        created TIMESTAMP NOT NULL,
        updated TIMESTAMP NOT NULL
    );

    CREATE TABLE IF NOT EXISTS comments (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        body TEXT NOT NULL,
        created TIMESTAMP NOT NULL,
        ticket_id INTEGER NOT NULL REFERENCES tickets(id)
    );

    CREATE INDEX IF NOT EXISTS idx_comments_ticket ON comments(ticket_id);
    "#
}

pub fn run_migrations(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.batch_execute(create_ticketing_tables_migration())?;
    info!("Database schema ready");
    Ok(())
}
