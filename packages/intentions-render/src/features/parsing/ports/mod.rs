//! Parsing ports

pub mod parser;

pub use parser::Parser;
