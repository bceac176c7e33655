// src/logic/auto_move.rs
//! 組札に自動で上げられるカードを探すよ！🪄
//! 見つけるだけで、動かすのは呼び出し側 (`Table::apply`)。

use log::debug;
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::logic::piles::Pile;
use crate::logic::rules;
use crate::protocol::Command;
use crate::table::Table;

/// 組札に上げられるカードがある場所。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AutoMove {
    FromWaste,
    FromColumn(usize),
}

impl AutoMove {
    /// この移動を実行するコマンド。
    pub fn command(self) -> Command {
        match self {
            AutoMove::FromWaste => Command::DiscardToFoundation,
            AutoMove::FromColumn(column) => Command::ColumnToFoundation { column },
        }
    }
}

fn fits_foundation(table: &Table, card: &Card) -> bool {
    let target = StackType::Foundation(card.suit);
    rules::is_move_valid(target, table.foundation(card.suit).peek(), card)
}

/// 捨て札、場札の左の列から順に見て、最初に組札へ上げられるものを返す。
pub fn find_automatic_foundation_move(table: &Table) -> Option<AutoMove> {
    if table.waste().peek().is_some_and(|card| fits_foundation(table, card)) {
        debug!("[AutoMove] discard top can go to its foundation");
        return Some(AutoMove::FromWaste);
    }

    let found = table
        .columns()
        .iter()
        .position(|column| column.peek().is_some_and(|card| card.is_face_up && fits_foundation(table, card)))
        .map(AutoMove::FromColumn);
    if let Some(AutoMove::FromColumn(column)) = found {
        debug!("[AutoMove] column {} top can go to its foundation", column);
    }
    found
}
