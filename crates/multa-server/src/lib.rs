//! HTTP extraction service for transit infraction notice PDFs.
//!
//! Library target so the router can be exercised in integration tests; the
//! `multa-server` binary is a thin wrapper around [`routes::build_router`].

pub mod config;
pub mod routes;
