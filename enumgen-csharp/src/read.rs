//! Reading generated files back into an [`EnumDef`].
//!
//! This is not a C# parser. It accepts exactly the shape [`crate::emit`] produces: line comments,
//! one namespace block, one `public enum` block, and explicitly valued members, with `@` escapes
//! and negative values allowed. Anything else is an error, which doubles as a shape check for
//! files that claim to be generated.

use enumgen_core::def::EnumDef;
use enumgen_core::values::Member;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("expected {expected} at offset {offset}")]
    Expected {
        expected: &'static str,
        offset: usize,
    },
    #[error("member {name:?} has the value {value:?}, which does not fit in an int")]
    ValueOutOfRange { name: String, value: String },
    #[error("unexpected content at offset {offset} after the enum was closed")]
    TrailingContent { offset: usize },
}

/// Reads the source text of one generated file and recovers its definition.
///
/// Round-trips with the emitter: names come back unescaped (`@class` reads as `class`) and in
/// declaration order, with the values they were declared with.
pub fn read_source(source: &str) -> Result<EnumDef, ReadError> {
    let mut reader = Reader {
        input: source,
        position: 0,
    };

    reader.skip_trivia();
    reader.expect_word("namespace")?;
    let namespace = reader.dotted_name()?;
    reader.skip_trivia();
    reader.expect_char('{', "`{` opening the namespace")?;

    reader.skip_trivia();
    reader.expect_word("public")?;
    reader.skip_trivia();
    reader.expect_word("enum")?;
    let name = reader.identifier("an enum name")?.to_owned();
    reader.skip_trivia();
    reader.expect_char('{', "`{` opening the enum")?;

    let mut members = vec![];
    loop {
        reader.skip_trivia();
        if reader.current_char() == Some('}') {
            reader.advance_char();
            break;
        }
        let member_name = reader.identifier("a member name")?.to_owned();
        reader.skip_trivia();
        reader.expect_char('=', "`=` before the member's value")?;
        reader.skip_trivia();
        let value = reader.integer(&member_name)?;
        members.push(Member {
            name: member_name,
            value,
        });
        reader.skip_trivia();
        match reader.current_char() {
            Some(',') => reader.advance_char(),
            Some('}') => (),
            _ => {
                return Err(Reader::expected_at(reader.position, "`,` or `}`"));
            }
        }
    }

    reader.skip_trivia();
    reader.expect_char('}', "`}` closing the namespace")?;
    reader.skip_trivia();
    if reader.current_char().is_some() {
        return Err(ReadError::TrailingContent {
            offset: reader.position,
        });
    }

    Ok(EnumDef::from_parts(namespace, name, members))
}

struct Reader<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Reader<'a> {
    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn advance_char(&mut self) {
        if let Some(c) = self.current_char() {
            self.position += c.len_utf8();
        }
    }

    /// Skips whitespace and `//` line comments, which is all the trivia the emitter produces.
    fn skip_trivia(&mut self) {
        loop {
            match self.current_char() {
                Some(c) if c.is_whitespace() => self.advance_char(),
                Some('/') if self.input[self.position..].starts_with("//") => {
                    while !matches!(self.current_char(), None | Some('\n')) {
                        self.advance_char();
                    }
                }
                _ => break,
            }
        }
    }

    fn expected_at(offset: usize, expected: &'static str) -> ReadError {
        ReadError::Expected { expected, offset }
    }

    fn expect_char(&mut self, c: char, expected: &'static str) -> Result<(), ReadError> {
        if self.current_char() == Some(c) {
            self.advance_char();
            Ok(())
        } else {
            Err(Self::expected_at(self.position, expected))
        }
    }

    /// Reads a bare word: letters, digits, and underscores. Keywords are matched with this, so
    /// `@namespace` the identifier never passes for `namespace` the keyword.
    fn word(&mut self) -> &'a str {
        let start = self.position;
        while matches!(self.current_char(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.advance_char();
        }
        &self.input[start..self.position]
    }

    fn expect_word(&mut self, keyword: &'static str) -> Result<(), ReadError> {
        self.skip_trivia();
        let offset = self.position;
        if self.word() == keyword {
            Ok(())
        } else {
            self.position = offset;
            Err(Self::expected_at(offset, keyword))
        }
    }

    /// Reads an identifier, dropping the `@` escape if one is present.
    fn identifier(&mut self, expected: &'static str) -> Result<&'a str, ReadError> {
        self.skip_trivia();
        if self.current_char() == Some('@') {
            self.advance_char();
        }
        let offset = self.position;
        let word = self.word();
        if word.is_empty() {
            Err(Self::expected_at(offset, expected))
        } else {
            Ok(word)
        }
    }

    fn dotted_name(&mut self) -> Result<String, ReadError> {
        let mut name = self.identifier("a namespace name")?.to_owned();
        while self.current_char() == Some('.') {
            self.advance_char();
            name.push('.');
            name.push_str(self.identifier("a namespace segment")?);
        }
        Ok(name)
    }

    fn integer(&mut self, member_name: &str) -> Result<i32, ReadError> {
        let start = self.position;
        if self.current_char() == Some('-') {
            self.advance_char();
        }
        while matches!(self.current_char(), Some(c) if c.is_ascii_digit()) {
            self.advance_char();
        }
        let text = &self.input[start..self.position];
        if text.is_empty() || text == "-" {
            return Err(Self::expected_at(start, "an integer value"));
        }
        text.parse().map_err(|_| ReadError::ValueOutOfRange {
            name: member_name.to_owned(),
            value: text.to_owned(),
        })
    }
}
