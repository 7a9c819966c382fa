//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — cards, kits, session, order payload, report structs.
//! - `constants.rs` — seed catalogue, kit table, fallback labels.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/network side effects.
//!
//! ## Compatibility note
//! `Card` and `OrderPayload` field names are shared with the catalogue
//! snapshot and the order endpoint. Rename with care.

pub mod constants;
pub mod models;
