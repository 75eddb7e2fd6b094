use bookshop_core::{BookField, BookId, NewBook, StorageEngine};

use crate::app::AppContext;
use crate::cli::{AddArgs, DeleteArgs, EditArgs, QuantityArgs};
use crate::errors::CliError;
use crate::helpers::confirm_delete;
use crate::ui::{badge, Badge, OutputMode, UiContext};

fn report(ui_ctx: &UiContext, quiet: bool, message: &str, fields: &[(&str, String)]) {
    if quiet {
        return;
    }
    match ui_ctx.mode {
        OutputMode::Pretty => println!("{}", badge(ui_ctx, Badge::Ok, message)),
        OutputMode::Plain | OutputMode::Json => {
            println!("status=ok");
            for (key, value) in fields {
                println!("{}={}", key, value);
            }
        }
    }
}

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let storage = ctx.open_storage()?;
    let id = storage.create(&NewBook::new(
        args.title.clone(),
        args.author.clone(),
        args.quantity,
    ))?;

    report(
        &ctx.ui_context(false),
        ctx.quiet(),
        &format!("{} added successfully! (ID {})", args.title, id),
        &[("id", id.to_string())],
    );
    Ok(())
}

pub fn handle_quantity(ctx: &AppContext, args: &QuantityArgs) -> anyhow::Result<()> {
    let storage = ctx.open_storage()?;
    let id = BookId::new(args.id);
    storage.update_quantity(id, args.quantity)?;

    report(
        &ctx.ui_context(false),
        ctx.quiet(),
        &format!("Book {} updated a quantity of {}", id, args.quantity),
        &[("id", id.to_string()), ("quantity", args.quantity.to_string())],
    );
    Ok(())
}

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let (field, value) = match (&args.title, &args.author) {
        (Some(title), None) => (BookField::Title, title),
        (None, Some(author)) => (BookField::Author, author),
        _ => {
            return Err(CliError::invalid_input("Pass exactly one of --title or --author").into())
        }
    };

    let storage = ctx.open_storage()?;
    let id = BookId::new(args.id);
    storage.edit_field(id, field, value)?;

    report(
        &ctx.ui_context(false),
        ctx.quiet(),
        &format!("Book {} {} updated", id, field),
        &[("id", id.to_string()), ("field", field.to_string())],
    );
    Ok(())
}

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let storage = ctx.open_storage()?;
    let id = BookId::new(args.id);
    let ui_ctx = ctx.ui_context(false);

    if !args.yes {
        let prompt = match storage.get(id)? {
            Some(book) => format!("Delete '{}' by {}?", book.title, book.author),
            None => format!("Delete book {}?", id),
        };
        if !confirm_delete(&prompt)? {
            if !ctx.quiet() {
                match ui_ctx.mode {
                    OutputMode::Pretty => {
                        println!("{}", badge(&ui_ctx, Badge::Info, "Deletion cancelled."))
                    }
                    OutputMode::Plain | OutputMode::Json => println!("status=cancelled"),
                }
            }
            return Ok(());
        }
    }

    let removed = storage.delete(id)?;
    let message = if removed {
        format!("Book {} deleted successfully.", id)
    } else {
        format!("No book with ID {}; nothing deleted.", id)
    };
    report(
        &ui_ctx,
        ctx.quiet(),
        &message,
        &[("id", id.to_string()), ("deleted", removed.to_string())],
    );
    Ok(())
}
