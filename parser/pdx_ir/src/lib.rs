//! Core data types for the pdx-script toolkit.
//!
//! This crate holds everything downstream stages share: interned symbols,
//! byte-range locations, the script syntax tree, and the CSV line model.
//! It has no knowledge of encodings or grammars; those live in
//! `pdx_source` and `pdx_parse`.

/// Assert the size of a type at compile time.
///
/// Keeps hot types from silently growing; a failure here is a build error.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod ast;
mod csv;
mod interner;
mod location;

pub use ast::{Ast, LocationMap, Node, NodeId, NodeKind};
pub use csv::LineObject;
pub use interner::{Symbol, SymbolInterner};
pub use location::NodeLocation;
