use axum::http::StatusCode;
use axum::response::IntoResponse;

#[derive(Debug, Clone)]
pub enum TicketsError {
    DatabaseConnection,
    NotFound(i32),
    CreateFailed,
    QueryFailed,
    UpdateFailed,
    DeleteFailed,
}

impl std::fmt::Display for TicketsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseConnection => write!(f, "Database connection failed"),
            Self::NotFound(id) => write!(f, "Ticket {id} not found"),
            Self::CreateFailed => write!(f, "Failed to create ticket"),
            Self::QueryFailed => write!(f, "Failed to load tickets"),
            Self::UpdateFailed => write!(f, "Failed to update ticket"),
            Self::DeleteFailed => write!(f, "Failed to delete ticket"),
        }
    }
}

impl std::error::Error for TicketsError {}

impl IntoResponse for TicketsError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
