use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

use cli::{AdminCommands, Cli, Commands};
use commands::{handle_admin_commands, handle_shop_commands};
use domain::constants::{all_kits, CATALOGUE_SLOT};
use domain::models::{
    GalleryItem, LedgerUpdate, OrderDetails, Step, StepReport, SummaryReport,
};
use services::catalogue::{CardDraft, CatalogueStore, FileSnapshot};
use services::config::{load_config, resolve_endpoint, ConfigFile, ENDPOINT_ENV};
use services::errors::ShopError;
use services::ledger::parse_quantity;
use services::order::{
    mailto_link, submit_order, summary_lines, summary_text, DisabledSink, HttpOrderSink,
    OrderSink,
};
use services::output::{print_error, print_one, print_out};
use services::storage::{audit, data_dir, load_session, save_session};
use services::wizard::{allowed_triggers, Trigger, Wizard};

type Catalogue = CatalogueStore<FileSnapshot>;

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        tracing::debug!(error = ?e, "command failed");
        print_error(cli.json, &e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CONNOISSEUR_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let dir = data_dir()?;
    let config = load_config(&dir)?;
    let mut wizard = Wizard::resume(load_session(&dir)?);
    let mut catalogue = CatalogueStore::load(FileSnapshot::in_dir(&dir, CATALOGUE_SLOT))?;

    if handle_admin_commands(cli, &dir, &mut wizard, &mut catalogue)? {
        return Ok(());
    }
    handle_shop_commands(cli, &dir, &config, &mut wizard, &catalogue)
}
