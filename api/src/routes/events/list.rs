use actix_web::{web, HttpResponse};

use dc_core::repositories::{EventRepository, TokenRepository, UserRepository};
use dc_core::services::mail::MailServiceTrait;

use crate::app::AppState;
use crate::dto::event::EventListResponse;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/events
pub async fn list_events<U, T, M, E>(
    state: web::Data<AppState<U, T, M, E>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailServiceTrait + ?Sized + 'static,
    E: EventRepository + 'static,
{
    match state.event_service.list_events(auth.user_id).await {
        Ok(events) => HttpResponse::Ok().json(EventListResponse { status: 200, events }),
        Err(error) => handle_domain_error(&error),
    }
}
