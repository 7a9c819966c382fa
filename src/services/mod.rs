//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `ledger.rs` — card id → quantity bookkeeping and quantity parsing.
//! - `wizard.rs` — step enum transition table and the session controller.
//! - `progress.rs` — selection total vs kit target (the continue affordance).
//! - `catalogue.rs` — catalogue store over a snapshot port.
//! - `order.rs` — manifest, summary record, mail link, order delivery.
//! - `storage.rs` — data dir, session persistence, audit log.
//! - `config.rs` — `config.toml` loading and endpoint resolution.
//! - `errors.rs` — domain error enum and machine codes.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod catalogue;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod order;
pub mod output;
pub mod progress;
pub mod storage;
pub mod wizard;
