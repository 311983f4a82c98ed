use std::fmt::{self, Write};

use enumgen_core::def::EnumDef;
use thiserror::Error;

use crate::ident;

/// The banner the .NET code generators put at the top of machine-written files. Unity and IDE
/// tooling recognize it and go easy on such files, so we emit it too.
const HEADER: &str = "\
//------------------------------------------------------------------------------
// <auto-generated>
//     This code was generated by a tool.
//     Changes to this file may cause incorrect behavior and will be lost if
//     the code is regenerated.
// </auto-generated>
//------------------------------------------------------------------------------
";

/// Knobs for the emitted text, covering the two `CodeGeneratorOptions` settings that matter for
/// this shape. The defaults give the compact form: no blank separator lines, banner on.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Insert a blank line between consecutive member declarations, CodeDOM's
    /// `BlankLinesBetweenMembers`. Off by default.
    pub blank_lines_between_members: bool,
    /// Start the file with the `<auto-generated>` banner.
    pub header: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            blank_lines_between_members: false,
            header: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum EmitError {
    #[error("{0:?} is not a valid C# namespace name")]
    InvalidNamespace(String),
    #[error("{0:?} is not a valid C# identifier")]
    InvalidEnumName(String),
    #[error("member {0:?} is not a valid C# identifier")]
    InvalidMemberName(String),
    #[error("formatting error: {0}")]
    Fmt(#[from] fmt::Error),
}

/// Emits the full source text for `def`: one namespace block wrapping one `public enum` block
/// wrapping one explicitly valued member per line, in declaration order.
pub fn emit(def: &EnumDef, options: &EmitOptions) -> Result<String, EmitError> {
    let mut source = String::new();
    write_source(&mut source, def, options)?;
    Ok(source)
}

/// Like [`emit`], but writing into any [`fmt::Write`].
///
/// Every name is validated before anything is written: the output is either complete and
/// syntactically valid C#, or nothing. Names that are C# keywords are emitted with an `@`
/// escape rather than rejected.
pub fn write_source(
    mut writer: impl Write,
    def: &EnumDef,
    options: &EmitOptions,
) -> Result<(), EmitError> {
    validate(def)?;

    if options.header {
        writer.write_str(HEADER)?;
        writer.write_char('\n')?;
    }

    let namespace = def
        .namespace()
        .split('.')
        .map(ident::escape)
        .collect::<Vec<_>>()
        .join(".");
    writeln!(writer, "namespace {namespace}")?;
    writeln!(writer, "{{")?;
    writeln!(writer, "    public enum {}", ident::escape(def.name()))?;
    writeln!(writer, "    {{")?;
    for (i, member) in def.members().iter().enumerate() {
        if options.blank_lines_between_members && i != 0 {
            writer.write_char('\n')?;
        }
        writeln!(
            writer,
            "        {} = {},",
            ident::escape(&member.name),
            member.value
        )?;
    }
    writeln!(writer, "    }}")?;
    writeln!(writer, "}}")?;

    Ok(())
}

fn validate(def: &EnumDef) -> Result<(), EmitError> {
    if !ident::is_namespace(def.namespace()) {
        return Err(EmitError::InvalidNamespace(def.namespace().to_owned()));
    }
    if !ident::is_identifier(def.name()) {
        return Err(EmitError::InvalidEnumName(def.name().to_owned()));
    }
    for member in def.members() {
        if !ident::is_identifier(&member.name) {
            return Err(EmitError::InvalidMemberName(member.name.clone()));
        }
    }
    Ok(())
}
