//! # CLI Layer
//!
//! One possible client of the larder library. This layer is the only place
//! that reads arguments, talks to the terminal, asks for confirmation, and
//! turns errors into exit codes. Everything it does goes through
//! [`LarderApi`].
//!
//! - `run()`: parse, set up logging and context, dispatch
//! - `handle_*()`: per-command handlers that call the API and print
//! - rendering lives in `render.rs`, prompting in `prompt.rs`

use super::logging::init_tracing;
use super::prompt::answer_on_terminal;
use super::render::{
    print_messages, render_expiring, render_full_ingredients, render_ingredient_list,
    render_text_list,
};
use super::setup::{Cli, Commands, Details};
use chrono::Utc;
use clap::Parser;
use larder::api::{
    ConfigAction, ExpirationInput, IngredientFilter, LarderApi, ListView, NewIngredient,
};
use larder::error::{LarderError, Result};
use larder::init::initialize;
use larder::lifecycle::{EditSession, Transition};
use larder::lookup::{parse_product_response, LookupOutcome, ProductLookup};
use larder::model::Ripeness;
use larder::store::fs::FileStore;
use std::io::Read;
use tracing::debug;

struct AppContext {
    api: LarderApi<FileStore>,
    assume_yes: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = AppContext {
        api: initialize()?.api,
        assume_yes: cli.yes,
    };

    match cli.command {
        Some(Commands::Add {
            name,
            details,
            status,
        }) => handle_add(&mut ctx, name.join(" "), details, status),
        Some(Commands::List {
            missing,
            recent,
            category,
            location,
            confection,
        }) => {
            let view = if missing {
                ListView::Missing
            } else if recent {
                ListView::Recent
            } else {
                ListView::All
            };
            let filter = IngredientFilter {
                view,
                category,
                location,
                confection,
            };
            handle_list(&mut ctx, filter)
        }
        Some(Commands::Expiring) => handle_expiring(&mut ctx),
        Some(Commands::Show { indexes }) => handle_show(&mut ctx, indexes),
        Some(Commands::Edit {
            index,
            name,
            details,
            status,
            opened,
            closed,
            check,
        }) => {
            let opened = match (opened, closed) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let edit = EditRequest {
                name,
                details,
                status,
                opened,
                check,
            };
            handle_edit(&mut ctx, &index, edit)
        }
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Scan { code }) => handle_scan(&mut ctx, &code),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, IngredientFilter::default()),
    }
}

fn handle_add(
    ctx: &mut AppContext,
    name: String,
    details: Details,
    status: Option<Ripeness>,
) -> Result<()> {
    let expiration = match (details.expires, details.estimate) {
        (Some(date), _) => ExpirationInput::Exact(date),
        (None, Some(estimate)) => ExpirationInput::Estimate(estimate),
        (None, None) => ExpirationInput::Unknown,
    };
    let new = NewIngredient {
        name,
        brand: details.brand,
        category: details.category,
        location: details.location,
        confection: details.confection,
        ripeness: status,
        expiration,
    };

    let result = ctx.api.add_ingredient(new, Utc::now())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, filter: IngredientFilter) -> Result<()> {
    let result = ctx.api.list_ingredients(&filter)?;
    print!("{}", render_ingredient_list(&result.listed));
    print_messages(&result.messages);
    Ok(())
}

fn handle_expiring(ctx: &mut AppContext) -> Result<()> {
    let now = Utc::now();
    let result = ctx.api.expiring(now)?;
    print!("{}", render_expiring(&result.listed, ctx.api.settings(), now));
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.view_ingredients(&indexes)?;
    print!("{}", render_full_ingredients(&result.listed, Utc::now()));
    print_messages(&result.messages);
    Ok(())
}

struct EditRequest {
    name: Option<String>,
    details: Details,
    status: Option<Ripeness>,
    opened: Option<bool>,
    check: bool,
}

/// Field edits land first, then the lifecycle transitions in the order the
/// edit form applies them: type, ripeness, opened, manual check.
fn handle_edit(ctx: &mut AppContext, index: &str, edit: EditRequest) -> Result<()> {
    let mut session = ctx.api.begin_edit(index, Utc::now())?;

    if let Some(name) = edit.name {
        session.set_name(name);
    }
    if let Some(brand) = edit.details.brand {
        session.set_brand(Some(brand));
    }
    if let Some(category) = edit.details.category {
        session.set_category(Some(category));
    }
    if let Some(location) = edit.details.location {
        session.set_location(Some(location));
    }
    if let Some(date) = edit.details.expires {
        session.set_expiration(Some(date));
    }
    if let Some(estimate) = edit.details.estimate {
        session.set_estimate(estimate);
    }

    if let Some(confection) = edit.details.confection {
        let transition = session.apply_type_change(Some(confection));
        settle(ctx, &mut session, transition)?;
    }
    if let Some(status) = edit.status {
        if !session.draft().is_fresh() {
            println!("Ripeness only applies to fresh items; ignoring --status.");
        }
        let transition = session.apply_ripeness_change(Some(status));
        settle(ctx, &mut session, transition)?;
    }
    if let Some(opened) = edit.opened {
        let transition = session.apply_opened_change(opened);
        settle(ctx, &mut session, transition)?;
    }
    if edit.check {
        let transition = session.apply_manual_check();
        settle(ctx, &mut session, transition)?;
    }

    if !session.is_modified() {
        println!("Nothing to change.");
        return Ok(());
    }

    let result = ctx.api.save_edit(&session)?;
    print_messages(&result.messages);
    Ok(())
}

/// Shows the transition's prompt, if any, and commits or cancels it.
fn settle(ctx: &AppContext, session: &mut EditSession, transition: Transition) -> Result<()> {
    let accepted = match transition.prompt() {
        Some(prompt) => answer_on_terminal(prompt, ctx.assume_yes)?,
        None => true,
    };

    if accepted {
        session.commit(transition);
    } else {
        session.cancel(transition);
        println!("Change discarded.");
    }
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_ingredients(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

/// Resolves a code from a product response piped in on stdin, e.g. the
/// output of `curl https://world.openfoodfacts.org/api/v0/product/<code>.json`.
struct StdinLookup;

impl ProductLookup for StdinLookup {
    fn lookup(&self, code: &str) -> Result<LookupOutcome> {
        let mut body = String::new();
        std::io::stdin()
            .read_to_string(&mut body)
            .map_err(|e| LarderError::Lookup(format!("could not read product response: {}", e)))?;
        debug!(code, bytes = body.len(), "read product response");
        parse_product_response(&body)
    }
}

fn handle_scan(ctx: &mut AppContext, code: &str) -> Result<()> {
    let result = ctx.api.scan(&StdinLookup, code)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    let lines: Vec<String> = result.messages.iter().map(|m| m.content.clone()).collect();
    print!("{}", render_text_list(&lines, "No configuration values."));
    Ok(())
}
