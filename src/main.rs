use anyhow::Context;
use minsh::editor::{Buffered, Terminal};
use minsh::{Config, OsSystem, Shell, logging};
use std::{io, process};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    logging::init(config.log_level);

    let mut shell = Shell::new(OsSystem).context("failed to read the working directory")?;

    let result = if termion::is_tty(&io::stdin()) {
        shell.repl(&mut Terminal::new(), &config.prompt, io::stdout(), io::stderr())
    } else {
        let mut input = Buffered::new(io::stdin().lock(), io::stdout());
        shell.repl(&mut input, &config.prompt, io::stdout(), io::stderr())
    };
    let code = result.context("shell terminated")?;

    process::exit(code)
}
