//! Shared data model for the badge configuration tool.
//!
//! Everything in this crate is free of I/O so that both the server and a
//! browser front-end can depend on it:
//! - `model`: the stored `Configuration` document and the session views sent to clients.
//! - `naming`: filename sanitization and derivation for new saves.
//! - `editor`: the client-side editing session and its save routing.
//! - `badges`: the per-language badge JSON generator.
//! - `requests`: request payloads exchanged with the server.

pub mod badges;
pub mod editor;
pub mod error;
pub mod model;
pub mod naming;
pub mod requests;
