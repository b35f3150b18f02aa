//! Service layer for business logic orchestration.
//!
//! Services sit between controllers and repositories. The battle service wraps the
//! repository for the read operations and import seeding; the auth service checks
//! login credentials and the token service signs and verifies access tokens.

pub mod auth;
pub mod battle;
pub mod token;
