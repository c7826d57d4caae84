//! Interactive terminal browser for the catalog
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::models::PromptRecord;

/// Run the interactive TUI until the user quits
pub fn run_interactive(records: Vec<PromptRecord>) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(records);

    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
