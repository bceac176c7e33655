// src/logic/rules/mod.rs
//! ソリティアのルール関連モジュールをまとめるよ！
//! どれも山の中身を読むだけの純粋な判定関数で、カードは動かさない。

pub mod common;
pub mod foundation;
pub mod move_validation;
pub mod stock_waste;
pub mod tableau;
pub mod win_condition;


pub use common::*;
pub use foundation::*;
pub use move_validation::*;
pub use stock_waste::*;
pub use tableau::*;
pub use win_condition::*;
