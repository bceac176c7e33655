//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::config::rules::DECK_SIZE;

/// 組札にあるカードの合計枚数でクリアを判定する。
pub fn check_win_condition(foundation_card_count: usize) -> bool {
    foundation_card_count == DECK_SIZE
}
