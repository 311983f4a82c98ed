mod generate;
mod inspect;
mod scan;

use clap::{Parser, Subcommand};
use tracing::{error, info, metadata::LevelFilter};
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Subcommand)]
enum Command {
    /// Generate a C# enum source file from a list of member names.
    ///
    /// Member names can be given on the command line, derived from the files in a directory,
    /// or both.
    Generate(generate::Args),

    /// List the member names a directory scan would contribute, without generating anything.
    Scan(scan::Args),

    /// Read a generated source file back and print its members and values.
    Inspect(inspect::Args),
}

#[derive(Parser)]
struct Args {
    /// Tool to run.
    #[clap(subcommand)]
    command: Command,
}

fn fallible_main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Generate(args) => generate::generate(args)?,
        Command::Scan(args) => scan::scan(args)?,
        Command::Inspect(args) => inspect::inspect(args)?,
    }

    Ok(())
}

fn main() {
    let subscriber = tracing_subscriber::registry().with(
        tracing_subscriber::fmt::layer()
            .without_time()
            .with_writer(std::io::stderr)
            .with_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::DEBUG.into())
                    .from_env_lossy(),
            ),
    );
    tracing::subscriber::set_global_default(subscriber)
        .expect("cannot set default tracing subscriber");

    info!("enumgen version {}", env!("CARGO_PKG_VERSION"));

    match fallible_main() {
        Ok(_) => (),
        Err(err) => {
            error!("{err:?}");
            std::process::exit(1);
        }
    }
}
