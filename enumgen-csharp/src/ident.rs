//! C# identifier rules, as far as this tool needs them.

use std::borrow::Cow;

/// The reserved keywords of C#, sorted so [`is_keyword`] can binary search.
///
/// Contextual keywords (`var`, `yield`, `async`, …) are legal identifiers and deliberately not
/// listed; only the reserved ones need an escape.
pub const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

pub fn is_keyword(name: &str) -> bool {
    KEYWORDS.binary_search(&name).is_ok()
}

/// Whether `name` has the shape of a C# identifier, ignoring keyword status.
///
/// Deliberately stricter than the language: C# identifiers may contain Unicode letters, but
/// names derived from asset files rarely need them, and the ASCII rule behaves the same in every
/// editor and on every platform.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Whether `name` is a legal dotted namespace name, like `Game` or `Game.Items`.
///
/// Segments that are keywords are allowed; they get escaped on emission.
pub fn is_namespace(name: &str) -> bool {
    !name.is_empty() && name.split('.').all(is_identifier)
}

/// Escapes `name` for use as an identifier in emitted source.
///
/// Keywords get an `@` prefix (`class` becomes `@class`), the same escape CodeDOM's
/// `CreateEscapedIdentifier` produces for a member named after a keyword. Anything else passes
/// through unchanged.
pub fn escape(name: &str) -> Cow<'_, str> {
    if is_keyword(name) {
        Cow::Owned(format!("@{name}"))
    } else {
        Cow::Borrowed(name)
    }
}
