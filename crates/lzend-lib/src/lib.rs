// LZ-End: linear-time LZ-End factorization
//
// A Rust implementation of the Kempa-Kosolobov LZ-End parsing algorithm,
// with the block RMQ and B-tree predecessor structures that drive it.

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod btree_map;
pub mod constants;
pub mod parser;
pub mod phrase;
pub mod rmq;
pub mod suffix;

// Re-export common types at crate root
pub use btree_map::BTreeMap;
pub use parser::{parse, ParseError};
pub use phrase::Phrase;
pub use rmq::{Rmq, SparseTable};

/// Version information
pub fn version() -> (u8, u8, u8) {
    constants::VERSION
}
