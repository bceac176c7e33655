// src/systems/win_condition_system.rs

use crate::components::game_state::GameStatus;
use crate::logic::piles::{Foundation, Pile};
use crate::logic::rules::check_win_condition;

/// ゲームの勝利条件をチェックするシステムだよ！🏆
///
/// 組札の枚数を見て判定するだけ。状態はどこにも書き込まないので、
/// 「ゲームオーバー」への遷移を決めるのは呼び出し側。
pub struct WinConditionSystem;

impl WinConditionSystem {
    pub fn status(foundations: &[Foundation]) -> GameStatus {
        let foundation_card_count = foundations.iter().map(|pile| pile.size()).sum();
        if check_win_condition(foundation_card_count) {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }
}
