// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod category_repository;
pub mod event_repository;
pub mod user_repository;
pub mod venue_repository;

pub use category_repository::*;
pub use event_repository::*;
pub use user_repository::*;
pub use venue_repository::*;
