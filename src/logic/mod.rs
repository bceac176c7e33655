// src/logic/mod.rs
//! ゲームの振る舞い。山、山札、ルール判定、自動移動のヒント。

pub mod auto_move;
pub mod deck;
pub mod piles;
pub mod rules;
