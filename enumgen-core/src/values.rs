use thiserror::Error;

use crate::hash::fnv1a_32;

/// How the members of a generated enum get their integer values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueMode {
    /// 0, 1, 2, … in declaration order.
    #[default]
    Increment,
    /// 1 << 0, 1 << 1, … in declaration order, so members can be combined with bitwise OR.
    BitFlag,
    /// A stable hash of the member's name, independent of its position in the list.
    FileHash,
}

/// One symbolic name together with the value it will be declared with.
///
/// Values are `i32` because the generated enum's underlying type is C# `int`. `FileHash` values
/// are 32-bit hashes reinterpreted as `i32`, so they are frequently negative; that is fine, the
/// engine's own string hash behaves the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub value: i32,
}

/// How many distinct bit flags fit in the generated enum.
///
/// The sign bit of the underlying `int` is left unused so that flag values stay positive and can
/// be OR-ed together without sign surprises.
pub const MAX_BIT_FLAGS: usize = 31;

#[derive(Debug, Error)]
pub enum ValueError {
    #[error("too many members for bit flags: {count} given, but only 31 fit in an int")]
    TooManyFlags { count: usize },
}

/// Assigns a value to each name in list order using the given mode.
///
/// Pure; the input is only read. Overflowing the value range is detected and reported rather
/// than wrapped: a `BitFlag` list with more than [`MAX_BIT_FLAGS`] members fails.
pub fn assign_values(names: &[String], mode: ValueMode) -> Result<Vec<Member>, ValueError> {
    if mode == ValueMode::BitFlag && names.len() > MAX_BIT_FLAGS {
        return Err(ValueError::TooManyFlags { count: names.len() });
    }
    Ok(names
        .iter()
        .enumerate()
        .map(|(i, name)| Member {
            name: name.clone(),
            value: match mode {
                ValueMode::Increment => i as i32,
                ValueMode::BitFlag => 1 << i,
                ValueMode::FileHash => fnv1a_32(name) as i32,
            },
        })
        .collect())
}
