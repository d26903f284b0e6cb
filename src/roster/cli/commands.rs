//! # CLI Layer
//!
//! This module is **one possible UI client** for the roster. It runs an
//! interactive session: one command per line on stdin, results on stdout,
//! errors on stderr.
//!
//! It is the only place that:
//! - Reads stdin and writes stdout/stderr
//! - Parses arguments (clap, per line)
//! - Prompts for input (dialoguer, on terminals only)
//! - Decides how a `RosterError` is shown to the user
//!
//! No error ends the session. Validation failures and unknown ids are printed
//! and the next line is read; only setup failures exit the process.

use super::logging::init_logging;
use super::prompt::fill_form;
use super::render::{print_error, print_messages, render_form, render_list, render_profile};
use super::setup::{get_command_help, get_session_help, split_line, Cli, FormArgs, Line, LineCommand};
use anyhow::Context;
use clap::Parser;
use roster::api::{CmdMessage, RosterApi};
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::form::FormField;
use roster::session::EditState;
use roster::store::memory::InMemoryStore;
use roster::store::EmployeeStore;
use std::io::{BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::debug;

/// How long a submit waits for a pending image before going ahead without it.
const INLINE_IMAGE_WAIT: Duration = Duration::from_secs(2);

struct AppContext {
    api: RosterApi<InMemoryStore>,
    interactive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = RosterConfig::load(cli.config.as_deref()).context("loading configuration")?;

    let use_color = config.color && !cli.no_color && std::io::stdout().is_terminal();
    if !use_color {
        console::set_colors_enabled(false);
        colored::control::set_override(false);
    }
    init_logging(&config.log_level, cli.verbose, use_color)?;
    debug!(?config, "configuration loaded");

    let mut ctx = init_context(&cli, &config)?;
    session_loop(&mut ctx)
}

fn init_context(cli: &Cli, config: &RosterConfig) -> anyhow::Result<AppContext> {
    let mut api = RosterApi::new(InMemoryStore::new());
    if config.seed_sample_records && !cli.no_seed {
        let result = api.seed_sample_records().context("seeding sample employees")?;
        debug!(count = result.affected.len(), "sample employees loaded");
    }
    Ok(AppContext {
        api,
        interactive: std::io::stdin().is_terminal(),
    })
}

fn session_loop(ctx: &mut AppContext) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    if ctx.interactive {
        print!("{}", render_list(&ctx.api.store().list()));
        println!("Type `help` for commands.");
    }

    loop {
        if ctx.interactive {
            print!("{}", prompt(ctx));
            std::io::stdout().flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading input")?;
        if dispatch(ctx, &line) == Flow::Quit {
            break;
        }
    }
    Ok(())
}

fn prompt(ctx: &AppContext) -> String {
    match ctx.api.edit_state() {
        EditState::Editing(id) => format!("roster[edit {}]> ", id),
        EditState::Idle => "roster> ".to_string(),
    }
}

fn dispatch(ctx: &mut AppContext, line: &str) -> Flow {
    let words = match split_line(line) {
        Ok(words) => words,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Flow::Continue;
        }
    };
    if words.is_empty() || words[0].starts_with('#') {
        return Flow::Continue;
    }

    let command = match Line::try_parse_from(&words) {
        Ok(parsed) => parsed.command,
        Err(e) => {
            eprint!("{}", e);
            return Flow::Continue;
        }
    };
    debug!(?command, "dispatching");

    let outcome = match command {
        LineCommand::Quit => return Flow::Quit,
        LineCommand::List { json } => handle_list(ctx, json),
        LineCommand::Submit(args) => handle_submit(ctx, args),
        LineCommand::Set { field, value } => handle_set(ctx, field, value),
        LineCommand::Image { path, clear } => handle_image(ctx, path, clear),
        LineCommand::Form => handle_form(ctx),
        LineCommand::Edit { id } => handle_edit(ctx, &id),
        LineCommand::Cancel => handle_cancel(ctx),
        LineCommand::Delete { id } => handle_delete(ctx, &id),
        LineCommand::Search { query } => handle_search(ctx, &query.join(" ")),
        LineCommand::View { id, json } => handle_view(ctx, id, json),
        LineCommand::Back => handle_back(ctx),
        LineCommand::Help { command } => handle_help(command),
    };

    if let Err(e) = outcome {
        print_error(&e);
    }
    Flow::Continue
}

fn handle_list(ctx: &mut AppContext, json: bool) -> Result<()> {
    let result = ctx.api.list()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result.listed)?);
    } else {
        print!("{}", render_list(&result.listed));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_submit(ctx: &mut AppContext, args: FormArgs) -> Result<()> {
    let editing = matches!(ctx.api.edit_state(), EditState::Editing(_));
    if args.is_empty() && ctx.interactive && (editing || ctx.api.form().is_blank()) {
        let image = fill_form(ctx.api.form_mut())
            .map_err(|e| RosterError::Io(std::io::Error::other(e.to_string())))?;
        if let Some(path) = image {
            ctx.api.attach_image(path);
        }
    } else {
        for (field, value) in args.inputs() {
            ctx.api.set_field(field, value);
        }
        if let Some(path) = args.image {
            ctx.api.attach_image(path);
        }
    }
    wait_for_image(ctx);

    let result = ctx.api.submit()?;
    print_messages(&result.messages);
    Ok(())
}

/// Gives a pending image a short chance to finish before the form is submitted.
fn wait_for_image(ctx: &mut AppContext) {
    let deadline = Instant::now() + INLINE_IMAGE_WAIT;
    while ctx.api.form().image().is_pending() && Instant::now() < deadline {
        if let Some(reason) = ctx.api.form_mut().refresh_image() {
            print_messages(&[CmdMessage::error(format!(
                "Image could not be read: {}",
                reason
            ))]);
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}

fn handle_set(ctx: &mut AppContext, field: FormField, value: Vec<String>) -> Result<()> {
    ctx.api.set_field(field, value.join(" "));
    Ok(())
}

fn handle_image(ctx: &mut AppContext, path: Option<PathBuf>, clear: bool) -> Result<()> {
    match (path, clear) {
        (_, true) => ctx.api.form_mut().clear_image(),
        (Some(path), false) => ctx.api.attach_image(path),
        (None, false) => println!("Usage: image <PATH> | image --clear"),
    }
    Ok(())
}

fn handle_form(ctx: &mut AppContext) -> Result<()> {
    if let Some(reason) = ctx.api.form_mut().refresh_image() {
        print_messages(&[CmdMessage::error(format!(
            "Image could not be read: {}",
            reason
        ))]);
    }
    let editing = match ctx.api.edit_state() {
        EditState::Editing(id) => Some(id),
        EditState::Idle => None,
    };
    print!(
        "{}",
        render_form(ctx.api.form(), ctx.api.submit_mode(), editing)
    );
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.begin_edit(id)?;
    print_messages(&result.messages);
    handle_form(ctx)
}

fn handle_cancel(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.cancel_edit()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(ctx: &mut AppContext, query: &str) -> Result<()> {
    if query.trim().is_empty() {
        println!("Usage: search <ID>");
        return Ok(());
    }
    let result = ctx.api.search(query)?;
    if let Some(employee) = &result.profile {
        print!("{}", render_profile(employee));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, id: Option<String>, json: bool) -> Result<()> {
    let result = match id {
        Some(id) => ctx.api.view(&id)?,
        None => ctx.api.current_profile()?,
    };
    if let Some(employee) = &result.profile {
        if json {
            println!("{}", serde_json::to_string_pretty(employee)?);
        } else {
            print!("{}", render_profile(employee));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_back(ctx: &mut AppContext) -> Result<()> {
    ctx.api.back()?;
    print!("{}", render_list(&ctx.api.store().list()));
    Ok(())
}

fn handle_help(command: Option<String>) -> Result<()> {
    match command.as_deref().and_then(get_command_help) {
        Some(help) => print!("{}", help),
        None => {
            if let Some(name) = command {
                eprintln!("Unknown command: {}", name);
            }
            print!("{}", get_session_help());
        }
    }
    Ok(())
}
