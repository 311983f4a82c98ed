pub mod def;
pub mod hash;
pub mod members;
pub mod values;
