//! HTTP proxy that relays chat queries to the Coze conversational API.

pub mod config;
pub mod error;
pub mod message;
pub mod routes;
pub mod services;
pub mod state;
