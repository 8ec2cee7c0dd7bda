pub mod repository;
pub mod routes;
pub mod cors;
pub mod error;
pub mod catchers;

pub use shared::{models::*, error::*};
