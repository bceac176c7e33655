// src/logic/piles/mod.rs
//! カードの山たち。土台の `Stack` と、ルール付きの組札・場札。

pub mod column;
pub mod foundation;
pub mod stack;

pub use column::Column;
pub use foundation::Foundation;
pub use stack::{Pile, Stack};
