//! User validation API
//!
//! A single `POST /users` endpoint whose JSON body is bound, checked by the
//! validator registered for its type, and only then handed to the handler.

pub mod app;
pub mod common;
pub mod health;
pub mod logging_middleware;
pub mod users;
