use actix_web::{web, HttpResponse};
use validator::Validate;

use dc_core::repositories::{EventRepository, TokenRepository, UserRepository};
use dc_core::services::mail::MailServiceTrait;

use crate::app::AppState;
use crate::dto::event::{CreateEventRequest, EventCreatedResponse};
use crate::handlers::{handle_domain_error, validation_error_response};
use crate::middleware::auth::AuthContext;

/// Handler for POST /api/events
///
/// # Request Body
///
/// ```json
/// {
///     "timeStart": "2024-05-01T09:00:00Z",
///     "name": "Sprint planning",
///     "description": "optional",
///     "isAllDay": false
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// {
///     "status": 201,
///     "message": "Event created",
///     "eventId": "5b0c..."
/// }
/// ```
pub async fn create_event<U, T, M, E>(
    state: web::Data<AppState<U, T, M, E>>,
    auth: AuthContext,
    request: web::Json<CreateEventRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    M: MailServiceTrait + ?Sized + 'static,
    E: EventRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .event_service
        .create_event(auth.user_id, request.into_inner().into())
        .await
    {
        Ok(event) => HttpResponse::Created().json(EventCreatedResponse {
            status: 201,
            message: "Event created".to_string(),
            event_id: event.id,
        }),
        Err(error) => handle_domain_error(&error),
    }
}
