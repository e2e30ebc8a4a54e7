pub mod collect;
pub mod document;
pub mod filter;
pub mod tree;
pub mod types;
