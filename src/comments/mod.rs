mod error;
mod handlers;
mod service;
mod types;

pub use error::*;
pub use handlers::*;
pub use service::*;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_error_display() {
        assert_eq!(CommentsError::NotFound(3).to_string(), "Comment 3 not found");
        assert_eq!(
            CommentsError::TicketNotFound(9).to_string(),
            "Ticket 9 not found"
        );
        assert_eq!(
            CommentsError::NoComments(4).to_string(),
            "No comments found for ticket 4"
        );
    }

    #[test]
    fn test_not_found_variants_map_to_404() {
        use axum::http::StatusCode;
        use axum::response::IntoResponse;

        for err in [
            CommentsError::NotFound(1),
            CommentsError::TicketNotFound(1),
            CommentsError::NoComments(1),
        ] {
            assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn test_update_request_accepts_empty_body() {
        let request: UpdateCommentRequest = serde_json::from_str("{}").unwrap();
        assert!(request.body.is_none());
    }

    #[test]
    fn test_create_request_requires_ticket_id() {
        let result: Result<CreateCommentRequest, _> =
            serde_json::from_str(r#"{"body": "no ticket"}"#);
        assert!(result.is_err());
    }
}
