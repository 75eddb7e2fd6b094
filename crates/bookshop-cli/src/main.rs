//! Bookshop CLI - inventory manager for a small bookshop
//!
//! Runs the interactive menu by default, with one-shot subcommands for
//! scripting the same operations.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod menu;
mod output;
mod ui;

use clap::Parser;
use tracing::debug;

use crate::app::{fallback_ui_context, AppContext};
use crate::cli::{Cli, Commands};
use crate::commands::{books, browse, menu as menu_cmd, misc};
use crate::errors::{exit_code_for, hint_for};
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = AppContext::new(&cli).and_then(|ctx| {
        debug!(db = %ctx.db_path().display(), "resolved database path");
        run(&ctx, &cli)
    });

    if let Err(e) = result {
        let ui_ctx = fallback_ui_context(&cli);

        let full = format!("{:#}", e);
        let message = match full.find("\nHint:") {
            Some(idx) => &full[..idx],
            None => full.as_str(),
        };
        let hint = hint_for(&e);

        print_error(&ui_ctx, message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        None | Some(Commands::Menu) => menu_cmd::handle_menu(ctx),
        Some(Commands::Add(args)) => books::handle_add(ctx, args),
        Some(Commands::Quantity(args)) => books::handle_quantity(ctx, args),
        Some(Commands::Edit(args)) => books::handle_edit(ctx, args),
        Some(Commands::Delete(args)) => books::handle_delete(ctx, args),
        Some(Commands::Search(args)) => browse::handle_search(ctx, args),
        Some(Commands::List(args)) => browse::handle_list(ctx, args),
        Some(Commands::Completions { shell }) => misc::handle_completions(*shell),
    }
}
