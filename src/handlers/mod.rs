pub mod auth;
pub mod images;
pub mod pickups;
pub mod reservations;
pub mod tours;
