//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `admin.rs` — admin studio: open/close, catalogue list/add/remove.
//! - `shop.rs` — kit choice, gallery, quantities, checkout, summary, reset.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Save the session after every step change.

pub mod admin;
pub mod shop;

pub use admin::handle_admin_commands;
pub use shop::handle_shop_commands;
