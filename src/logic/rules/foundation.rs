//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::trace;

use crate::components::card::{Card, Rank, Suit};

/// `card` をスート `foundation_suit` の組札に置けるかチェックする。
///
/// 空の組札には A だけ。空でなければ同じスートで、一番上より1つ大きいランクだけ。
pub fn can_move_to_foundation(foundation_suit: Suit, top: Option<&Card>, card: &Card) -> bool {
    if card.suit != foundation_suit {
        trace!(
            "[Foundation Rule] {:?} {:?}: suit mismatch with {:?} pile",
            card.rank,
            card.suit,
            foundation_suit
        );
        return false;
    }

    let result = match top {
        None => card.rank == Rank::Ace,
        Some(top) => top.suit == card.suit && card.rank.value() == top.rank.value() + 1,
    };
    trace!(
        "[Foundation Rule] {:?} {:?} onto {:?}: {}",
        card.rank,
        card.suit,
        top.map(|t| t.rank),
        result
    );
    result
}
