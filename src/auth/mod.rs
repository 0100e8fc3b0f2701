// src/auth/mod.rs
// DOCUMENTATION: Authentication primitives
// PURPOSE: Password hashing, token signing and the protected-route guard

pub mod extractor;
pub mod jwt;
pub mod password;

pub use extractor::AuthenticatedUser;
pub use jwt::JwtManager;
pub use password::{hash_password_blocking, verify_password_blocking};
