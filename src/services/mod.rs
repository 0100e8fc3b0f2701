// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod auth_service;
pub mod event_service;

pub use auth_service::*;
pub use event_service::*;
