// src/logic/rules/move_validation.rs
//! 移動先の種類に応じてルール関数を振り分けるよ。

use log::trace;

use super::{foundation, tableau};
use crate::components::card::Card;
use crate::components::stack::StackType;

/// `card` を、一番上が `top` の `target` に置けるか。
/// 山札と捨て札へ直接置くことはできない。
pub fn is_move_valid(target: StackType, top: Option<&Card>, card: &Card) -> bool {
    match target {
        StackType::Tableau(_) => tableau::can_move_to_tableau(top, card),
        StackType::Foundation(suit) => foundation::can_move_to_foundation(suit, top, card),
        StackType::Stock | StackType::Waste => {
            trace!("[Rules Validation] Moving to {:?} is not allowed.", target);
            false
        }
    }
}
