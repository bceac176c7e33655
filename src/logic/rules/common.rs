//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::card::Suit;

/// カードの色（赤か黒か）。スートから決まって、変わることはない。
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// `upper` を `lower` の上に場札のルールで重ねられるか。
/// 色違いで、ランクがちょうど1つ下ならOK。
pub fn stacks_on(lower: &Card, upper: &Card) -> bool {
    lower.color() != upper.color() && upper.rank.value() + 1 == lower.rank.value()
}

/// 下から上の順に並んだカードが、全部表向きで「降順・色交互」になっているか。
/// 空のスライスは run とみなさない。
pub fn is_valid_run(cards: &[Card]) -> bool {
    !cards.is_empty()
        && cards.iter().all(|card| card.is_face_up)
        && cards
            .iter()
            .tuple_windows()
            .all(|(lower, upper)| stacks_on(lower, upper))
}
