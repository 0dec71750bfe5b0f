pub mod auth;
pub mod guests;
pub mod health;
pub mod hotels;
pub mod managers;
pub mod reservations;
pub mod rooms;
