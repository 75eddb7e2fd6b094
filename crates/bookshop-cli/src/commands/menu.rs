use std::io;

use crate::app::AppContext;
use crate::menu::Menu;

pub fn handle_menu(ctx: &AppContext) -> anyhow::Result<()> {
    let storage = ctx.open_storage()?;
    let stdin = io::stdin();
    let stdout = io::stdout();

    Menu::new(
        &storage,
        ctx.matcher(None),
        ctx.ui_context(false),
        stdin.lock(),
        stdout.lock(),
    )
    .run()
}
