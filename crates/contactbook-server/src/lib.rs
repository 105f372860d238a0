//! HTTP/JSON API server for the contactbook registry.
//!
//! Exposes list, lookup and create over HTTP on top of a
//! [`ContactStore`](contactbook_storage::ContactStore). This crate contains the
//! server configuration, request schema, error mapping, and route
//! definitions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
