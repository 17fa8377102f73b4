pub mod auth;
pub mod pickup;
pub mod reservation;
pub mod tour;
