// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod category;
pub mod event;
pub mod user;
pub mod venue;

pub use category::*;
pub use event::*;
pub use user::*;
pub use venue::*;
