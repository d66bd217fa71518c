pub mod admin;
pub mod auth;
pub mod events;
pub mod middleware;
pub mod reservations;
pub mod router;
pub mod users;

pub use middleware::*;
pub use router::build_router;
