use actix_web::{web, HttpResponse};

use dc_core::repositories::{EventRepository, TokenRepository, UserRepository};
use dc_core::services::mail::MailServiceTrait;

use crate::app::AppState;
use crate::dto::event::DeleteEventRequest;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for DELETE /api/events
///
/// Deletes the event named by `{"id": ...}`. Events owned by another user
/// are reported as not found.
///
/// ## Errors
/// - 404 Not Found: Unknown event or not owned by the caller
pub async fn delete_event<U, T, M, E>(
    state: web::Data<AppState<U, T, M, E>>,
    auth: AuthContext,
    request: web::Json<DeleteEventRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailServiceTrait + ?Sized + 'static,
    E: EventRepository + 'static,
{
    match state.event_service.delete_event(auth.user_id, request.id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(&error),
    }
}
