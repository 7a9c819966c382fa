use crate::*;

pub fn handle_shop_commands(
    cli: &Cli,
    dir: &Path,
    config: &ConfigFile,
    wizard: &mut Wizard,
    catalogue: &Catalogue,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Kits => {
            let kits = all_kits();
            print_out(cli.json, &kits, |k| {
                format!(
                    "{}\t{}\t{} cards\t{}",
                    k.kit.as_str(),
                    k.label,
                    k.size,
                    k.price
                )
            })?;
        }
        Commands::Kit { kit } => {
            let chosen = wizard.choose_kit(*kit)?;
            save_session(dir, wizard.session())?;
            audit(dir, "kit", serde_json::json!({"kit": kit}));
            print_one(cli.json, chosen, |k| {
                format!("{}: select {} cards", k.label, k.size)
            })?;
        }
        Commands::Gallery => {
            let ledger = &wizard.session().ledger;
            let items: Vec<GalleryItem> = catalogue
                .cards()
                .iter()
                .map(|c| GalleryItem {
                    id: c.id.clone(),
                    title: c.title.clone(),
                    category: c.category.clone(),
                    image_url: c.image_url.clone(),
                    quantity: ledger.quantity(&c.id),
                })
                .collect();
            print_out(cli.json, &items, |i| {
                format!("{}\t{}\t{}\t{}", i.id, i.title, i.category, i.quantity)
            })?;
        }
        Commands::Adjust { id, delta } => {
            let quantity = wizard.adjust(id, *delta)?;
            ledger_updated(cli, dir, wizard, catalogue, id, quantity)?;
        }
        Commands::Set { id, value } => {
            let quantity = wizard.set_exact(id, parse_quantity(value))?;
            ledger_updated(cli, dir, wizard, catalogue, id, quantity)?;
        }
        Commands::Status => {
            let progress = wizard.progress().ok_or(ShopError::NoKit)?;
            print_one(cli.json, progress.report(), |r| {
                format!("{}/{}\t{}\t{}", r.total, r.target, r.headline, r.message)
            })?;
        }
        Commands::Continue => {
            if wizard.step() == Step::Gallery {
                let progress = wizard.progress().ok_or(ShopError::NoKit)?;
                if !progress.can_continue() {
                    return Err(ShopError::SelectionUnbalanced {
                        total: progress.total,
                        target: progress.target,
                        message: progress.message(),
                    }
                    .into());
                }
            }
            wizard.proceed_to_checkout()?;
            save_session(dir, wizard.session())?;
            print_step(cli.json, wizard)?;
        }
        Commands::Back => {
            wizard.back_to_gallery()?;
            save_session(dir, wizard.session())?;
            print_step(cli.json, wizard)?;
        }
        Commands::Submit {
            name,
            email,
            address,
        } => {
            let details = OrderDetails {
                name: name.clone(),
                email: email.clone(),
                address: address.clone(),
            };
            if wizard.session().ledger.is_empty() {
                tracing::warn!("submitting an order with no cards selected");
            }
            let mut sink = order_sink(cli, config);
            let date = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
            let report = submit_order(wizard, catalogue.cards(), details, sink.as_mut(), date)?;
            save_session(dir, wizard.session())?;
            audit(
                dir,
                "submit",
                serde_json::json!({"kit": report.kit, "manifest": report.manifest}),
            );
            print_one(cli.json, &report, |r| {
                format!("order placed for {}\t{}\t{}", r.order.name, r.kit, r.manifest)
            })?;
            sink.settle();
        }
        Commands::Summary { mailto } => {
            wizard.require_step("viewing the summary", Step::Summary)?;
            let kit = wizard.kit().ok_or(ShopError::NoKit)?;
            let order = wizard
                .session()
                .order
                .clone()
                .ok_or_else(|| anyhow::anyhow!("no order details recorded"))?;
            let items = summary_lines(&wizard.session().ledger, catalogue.cards());
            let text = summary_text(&kit, &order, &items);
            let link = mailto_link(&config.orders.mail_recipient, &order, &text);
            // JSON output carries both the text and the link, so `--mailto` is moot there.
            if cli.json {
                print_one(
                    true,
                    SummaryReport {
                        kit: kit.label.to_string(),
                        size: kit.size,
                        order,
                        items,
                        text,
                        mailto: link,
                    },
                    |_| String::new(),
                )?;
            } else if *mailto {
                println!("{}", link);
            } else {
                print!("{}", text);
            }
        }
        Commands::Reset => {
            wizard.reset();
            save_session(dir, wizard.session())?;
            audit(dir, "reset", serde_json::json!({}));
            print_step(cli.json, wizard)?;
        }
        Commands::Session => {
            print_step(cli.json, wizard)?;
        }
        Commands::Admin { .. } => {}
    }

    Ok(())
}

fn ledger_updated(
    cli: &Cli,
    dir: &Path,
    wizard: &Wizard,
    catalogue: &Catalogue,
    id: &str,
    quantity: u32,
) -> anyhow::Result<()> {
    if catalogue.find(id).is_none() {
        tracing::warn!(%id, "card is not in the catalogue");
    }
    save_session(dir, wizard.session())?;
    let progress = wizard.progress().ok_or(ShopError::NoKit)?;
    let update = LedgerUpdate {
        id: id.to_string(),
        quantity,
        progress: progress.report(),
    };
    print_one(cli.json, update, |u| {
        format!(
            "{}\t{}\t{}/{}\t{}",
            u.id, u.quantity, u.progress.total, u.progress.target, u.progress.message
        )
    })
}

fn print_step(json: bool, wizard: &Wizard) -> anyhow::Result<()> {
    let report = StepReport {
        step: wizard.step(),
        kit: wizard.session().kit,
        total_selected: wizard.session().ledger.total(),
        actions: allowed_triggers(wizard.step())
            .iter()
            .map(Trigger::as_str)
            .collect(),
    };
    print_one(json, report, |r| {
        format!("step: {}\tnext: {}", r.step, r.actions.join(", "))
    })
}

/// Falls back to a disabled sink rather than failing checkout.
fn order_sink(cli: &Cli, config: &ConfigFile) -> Box<dyn OrderSink> {
    let endpoint = resolve_endpoint(
        cli.endpoint.as_deref(),
        std::env::var(ENDPOINT_ENV).ok(),
        config,
    );
    match endpoint {
        Some(url) => match HttpOrderSink::new(url, config.orders.timeout_ms) {
            Ok(sink) => Box::new(sink),
            Err(e) => {
                tracing::warn!(error = %e, "order sync client unavailable");
                Box::new(DisabledSink)
            }
        },
        None => Box::new(DisabledSink),
    }
}
