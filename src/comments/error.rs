use axum::http::StatusCode;
use axum::response::IntoResponse;

#[derive(Debug, Clone)]
pub enum CommentsError {
    DatabaseConnection,
    NotFound(i32),
    TicketNotFound(i32),
    NoComments(i32),
    CreateFailed,
    QueryFailed,
    UpdateFailed,
    DeleteFailed,
}

impl std::fmt::Display for CommentsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseConnection => write!(f, "Database connection failed"),
            Self::NotFound(id) => write!(f, "Comment {id} not found"),
            Self::TicketNotFound(id) => write!(f, "Ticket {id} not found"),
            Self::NoComments(id) => write!(f, "No comments found for ticket {id}"),
            Self::CreateFailed => write!(f, "Failed to create comment"),
            Self::QueryFailed => write!(f, "Failed to load comments"),
            Self::UpdateFailed => write!(f, "Failed to update comment"),
            Self::DeleteFailed => write!(f, "Failed to delete comment"),
        }
    }
}

impl std::error::Error for CommentsError {}

impl IntoResponse for CommentsError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            Self::NotFound(_) | Self::TicketNotFound(_) | Self::NoComments(_) => {
                StatusCode::NOT_FOUND
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}
