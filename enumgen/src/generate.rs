use anyhow::{anyhow, bail, Context};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use enumgen_assets::{list_members, list_members_recursive};
use enumgen_core::{def::EnumDef, members::MemberList, values::ValueMode};
use enumgen_csharp::emit::{emit, EmitOptions};
use tracing::{debug, info, warn};

/// How the generated members get their values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// 0, 1, 2, … in list order.
    #[default]
    Increment,
    /// 1, 2, 4, … in list order, for enums meant to be combined with bitwise OR.
    BitFlag,
    /// A stable hash of each member's name, independent of list order.
    FileHash,
}

impl From<Mode> for ValueMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Increment => ValueMode::Increment,
            Mode::BitFlag => ValueMode::BitFlag,
            Mode::FileHash => ValueMode::FileHash,
        }
    }
}

#[derive(Debug, Parser)]
pub struct Args {
    /// Name of the generated enum type. Also decides the output file name, `<EnumName>.cs`.
    enum_name: String,

    /// Member names, in declaration order.
    ///
    /// Appended after any members scanned from --from-dir.
    members: Vec<String>,

    /// Namespace to declare the enum in. May be dotted, e.g. `Game.Generated`.
    #[clap(short, long)]
    namespace: String,

    /// Derive member names from the files in this directory.
    ///
    /// Every file matching --pattern contributes its name, extension stripped, sorted by name.
    #[clap(short = 'd', long)]
    from_dir: Option<Utf8PathBuf>,

    /// File name pattern for --from-dir.
    #[clap(short, long, default_value = "*.prefab")]
    pattern: String,

    /// Search subdirectories of --from-dir too.
    #[clap(short, long)]
    recursive: bool,

    /// How members get their values.
    #[clap(short, long, value_enum, default_value_t)]
    mode: Mode,

    /// Directory to write `<EnumName>.cs` into. Must already exist.
    #[clap(short, long, default_value = "Assets/Generated")]
    output_dir: Utf8PathBuf,

    /// Separate consecutive members with blank lines.
    #[clap(long)]
    blank_lines: bool,

    /// Leave out the banner comment marking the file as generated.
    #[clap(long)]
    no_header: bool,

    /// Print the source to stdout instead of writing a file.
    #[clap(long)]
    stdout: bool,
}

pub fn generate(args: Args) -> anyhow::Result<()> {
    let mut members = MemberList::new();
    if let Some(dir) = &args.from_dir {
        let scanned = if args.recursive {
            list_members_recursive(dir, &args.pattern)
        } else {
            list_members(dir, &args.pattern)
        }
        .with_context(|| format!("cannot list members from {dir}"))?;
        debug!("{} members scanned from {dir}", scanned.len());
        for name in scanned {
            members.push(name);
        }
    }
    for name in &args.members {
        members.push(name.clone());
    }
    if members.is_empty() {
        if args.from_dir.is_none() {
            bail!("no members given; pass member names or use --from-dir");
        }
        warn!("no files matched the pattern; the generated enum will be empty");
    }

    let def = EnumDef::resolve(&args.namespace, &args.enum_name, &members, args.mode.into())
        .context("cannot assign member values")?;
    for collision in def.collisions() {
        warn!("{collision}");
    }

    let source = emit(
        &def,
        &EmitOptions {
            blank_lines_between_members: args.blank_lines,
            header: !args.no_header,
        },
    )
    .context("cannot emit enum source")?;

    if args.stdout {
        print!("{source}");
        return Ok(());
    }

    let output_path = args.output_dir.join(format!("{}.cs", args.enum_name));
    write_source_file(&output_path, &source)
        .with_context(|| format!("cannot write {output_path}"))?;
    info!(
        "Generated {output_path} with {} members",
        def.members().len()
    );

    Ok(())
}

/// Writes `source` to `path` through a temporary file in the same directory, so a failed write
/// cannot leave a truncated source file where the generated one used to be.
///
/// The parent directory must already exist. Generated files land inside an established asset
/// tree, and creating directories on the fly would turn a typo in --output-dir into a stray
/// folder instead of an error.
fn write_source_file(path: &Utf8Path, source: &str) -> anyhow::Result<()> {
    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("{path} has no file name"))?;
    let temp_path = path.with_file_name(format!(".{file_name}.tmp"));
    let written = std::fs::write(&temp_path, source)
        .and_then(|()| std::fs::rename(&temp_path, path));
    if let Err(error) = written {
        _ = std::fs::remove_file(&temp_path);
        return Err(error.into());
    }
    Ok(())
}
