//! HTTP request handlers.
//!
//! Controllers extract request data, call the matching service and convert domain
//! models into DTOs. Authentication for the battle routes is applied by the router
//! through `middleware::auth::require_token`.

pub mod auth;
pub mod battle;

#[cfg(test)]
mod test;
