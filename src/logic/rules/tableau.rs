//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::trace;

use super::common::stacks_on;
use crate::components::card::{Card, Rank};

/// `card` を一番上が `top` の場札に置けるかチェックする。
///
/// 空の列には K だけ。そうでなければ色違いでランクが1つ下のカードだけ。
pub fn can_move_to_tableau(top: Option<&Card>, card: &Card) -> bool {
    let result = match top {
        None => card.rank == Rank::King,
        Some(top) => stacks_on(top, card),
    };
    trace!(
        "[Rule Check] Moving {:?}({:?}) onto {:?}: {}",
        card.rank,
        card.color(),
        top.map(|t| (t.rank, t.color())),
        result
    );
    result
}
