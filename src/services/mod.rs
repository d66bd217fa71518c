pub mod auth;
pub mod availability;
pub mod event;
pub mod reservation;
