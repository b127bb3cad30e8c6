//! Site abstractions.

pub mod hitomi;
