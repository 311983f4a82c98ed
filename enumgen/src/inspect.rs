use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use enumgen_csharp::read::read_source;
use tracing::warn;

#[derive(Debug, Parser)]
pub struct Args {
    /// The generated .cs file to read back.
    file: Utf8PathBuf,
}

pub fn inspect(args: Args) -> anyhow::Result<()> {
    let source = std::fs::read_to_string(&args.file)
        .with_context(|| format!("cannot read source file at {}", args.file))?;
    let def = read_source(&source).with_context(|| {
        format!(
            "{} does not look like a generated enum source file",
            args.file
        )
    })?;

    println!("namespace {}", def.namespace());
    println!("enum      {}", def.name());
    for member in def.members() {
        println!("{:>11} {}", member.value, member.name);
    }
    for collision in def.collisions() {
        warn!("{collision}");
    }

    Ok(())
}
