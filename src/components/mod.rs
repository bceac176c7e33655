// src/components/mod.rs
//! データだけを持つ型を置く場所だよ。振る舞いは logic/ 側。

pub mod card;
pub mod game_state;
pub mod stack;
