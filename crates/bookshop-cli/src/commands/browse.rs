use bookshop_core::{BookSelection, StorageEngine};

use crate::app::AppContext;
use crate::cli::{ListArgs, SearchArgs};
use crate::output::{print_books, search_json};
use crate::ui::theme::{styled, styles};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let storage = ctx.open_storage()?;
    let books = storage.fetch(&BookSelection::All)?;

    let ui_ctx = ctx.ui_context(args.json);
    print_books(&ui_ctx, &books)
}

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let storage = ctx.open_storage()?;
    let books = storage.fetch(&BookSelection::All)?;
    let matches = ctx.matcher(args.limit).find(&args.query, &books);

    let ui_ctx = ctx.ui_context(args.json);
    if ui_ctx.mode.is_json() {
        let output = search_json(&args.query, &matches, &books);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let found: Vec<_> = matches
        .iter()
        .filter_map(|m| books.iter().find(|book| book.id == m.id).cloned())
        .collect();

    if !ctx.quiet() && ui_ctx.mode.is_pretty() {
        let count = format!("{} matches found.", found.len());
        println!("{}", styled(&count, styles::dim(), ui_ctx.color));
    }
    print_books(&ui_ctx, &found)
}
