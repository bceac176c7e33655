// src/components/game_state.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::config::DrawCount;

/// ゲーム全体の状態だよ！🏆
///
/// テーブルはこれを保存しない。組札の枚数を見て毎回計算するだけ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中
    Playing,
    /// 4つの組札が全部 K まで揃った
    Won,
}

/// 表示側に渡すテーブル全体の写し。
///
/// 山札の中身は順番ごと入っているけど、裏向きのカードをどう見せるかは表示側の仕事。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSnapshot {
    pub draw_count: DrawCount,
    pub status: GameStatus,
    pub deck: Vec<Card>,
    pub waste: Vec<Card>,
    /// `ALL_SUITS` の順。
    pub foundations: Vec<Vec<Card>>,
    pub columns: Vec<Vec<Card>>,
}

impl TableSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
