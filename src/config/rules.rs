// src/config/rules.rs
//! クロンダイクの盤面サイズに関する定数だよ。

pub const NUM_SUITS: usize = 4;
pub const NUM_RANKS: usize = 13;
pub const DECK_SIZE: usize = NUM_SUITS * NUM_RANKS; // 52枚
pub const NUM_FOUNDATIONS: usize = NUM_SUITS;
pub const NUM_COLUMNS: usize = 7;
/// 配り終えたときに場札にあるカードの合計 (1+2+...+7)
pub const DEALT_CARDS: usize = NUM_COLUMNS * (NUM_COLUMNS + 1) / 2;
