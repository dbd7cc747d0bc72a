pub mod cars;
pub mod content;
pub mod public;
pub mod requests;
pub mod reservations;
pub mod users;
