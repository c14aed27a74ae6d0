//! Domain entities representing core business objects.

pub mod event;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use event::{Event, NewEvent, EVENT_NAME_MAX_LENGTH, EVENT_NAME_MIN_LENGTH};
pub use token::{
    AccessClaims, IssuedRefreshToken, RefreshClaims, RefreshTokenRecord, TokenPair,
    ACCESS_TOKEN_EXPIRY_MINUTES, REFRESH_TOKEN_EXPIRY_DAYS,
};
pub use user::User;
