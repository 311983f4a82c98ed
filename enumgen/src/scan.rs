use camino::Utf8PathBuf;
use clap::Parser;
use enumgen_assets::{list_members, list_members_recursive};
use tracing::debug;

#[derive(Debug, Parser)]
pub struct Args {
    /// Directory to scan.
    dir: Utf8PathBuf,

    /// File name pattern. Matched files contribute their names with the extension stripped.
    #[clap(short, long, default_value = "*.prefab")]
    pattern: String,

    /// Search subdirectories too.
    #[clap(short, long)]
    recursive: bool,
}

pub fn scan(args: Args) -> anyhow::Result<()> {
    let members = if args.recursive {
        list_members_recursive(&args.dir, &args.pattern)
    } else {
        list_members(&args.dir, &args.pattern)
    }?;
    debug!("{} members found in {}", members.len(), args.dir);

    for name in &members {
        println!("{name}");
    }

    Ok(())
}
