//! The C# surface of the generator: identifier rules, the source emitter, and a reader for the
//! files the emitter produces.

pub mod emit;
pub mod ident;
pub mod read;
