use crate::*;

pub fn handle_admin_commands(
    cli: &Cli,
    dir: &Path,
    wizard: &mut Wizard,
    catalogue: &mut Catalogue,
) -> anyhow::Result<bool> {
    let Commands::Admin { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        AdminCommands::Open => {
            wizard.open_admin()?;
            save_session(dir, wizard.session())?;
            audit(dir, "admin_open", serde_json::json!({}));
            print_one(cli.json, wizard.step(), |s| format!("step: {}", s))?;
        }
        AdminCommands::Close => {
            wizard.close_admin()?;
            save_session(dir, wizard.session())?;
            print_one(cli.json, wizard.step(), |s| format!("step: {}", s))?;
        }
        AdminCommands::List => {
            print_out(cli.json, catalogue.cards(), |c| {
                format!("{}\t{}\t{}\t{}", c.id, c.title, c.category, c.image_url)
            })?;
        }
        AdminCommands::Add {
            title,
            category,
            image,
        } => {
            wizard.require_step("publishing a design", Step::Admin)?;
            let draft = CardDraft {
                title: title.clone(),
                category: category.clone(),
                image_url: image.clone(),
            };
            let card = catalogue.card_from_draft(draft, chrono::Utc::now().timestamp_millis())?;
            catalogue.add(card.clone())?;
            audit(
                dir,
                "card_add",
                serde_json::json!({"id": card.id, "title": card.title}),
            );
            print_one(cli.json, card, |c| format!("added {}\t{}", c.id, c.title))?;
        }
        AdminCommands::Remove { id } => {
            wizard.require_step("removing a design", Step::Admin)?;
            let removed = catalogue.remove(id)?;
            audit(
                dir,
                "card_remove",
                serde_json::json!({"id": id, "removed": removed}),
            );
            print_one(cli.json, removed, |n| format!("removed {} entries", n))?;
        }
    }

    Ok(true)
}
