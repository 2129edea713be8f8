use std::io;

use anyhow::Result;
use ghiblib::{Config, Console, Session};

/// Run the interactive menu on stdin/stdout.
pub fn run_menu(config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout());
    let mut session = Session::new(console).with_default_path(config.library_path.clone());

    if config.autoload {
        session.autoload()?;
    }

    session.run()
}
