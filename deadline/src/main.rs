use std::io::Write;

use anyhow::Context;
use clap::Parser;
use deadline::adapter::error_message;
use deadline::cli::Cli;
use deadline::logger;
use deadline::time::Locale;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    match cli.run() {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{output}").context("writing result to stdout")?;
            Ok(())
        }
        Err(e) => {
            tracing::error!("deadline not calculated: {e}");
            eprintln!("⚠️ {}", error_message(&e, Locale::from(cli.locale)));
            std::process::exit(1);
        }
    }
}
