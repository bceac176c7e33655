// src/systems/deal_system.rs

use log::{debug, info};

use crate::error::Result;
use crate::logic::deck::Deck;
use crate::logic::piles::{Column, Pile};

/// 初期カード配置システム！
/// ゲーム開始時に、山札から7つの場札にカードを配る役割を担うよ。
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// 場札にカードを配る。
    ///
    /// 列 `i` (0始まり) には裏向きで `i` 枚、そのあと表向きで1枚。
    /// つまり列 `i` は `i + 1` 枚になって、一番上だけ表。残りは山札に裏向きのまま。
    /// ルールを飛ばして積む `push_raw` を使うのはここだけ。
    ///
    /// 山札が足りなければ `EmptyStack` を返す (普通の52枚なら起きない)。
    pub fn execute(&self, deck: &mut Deck, columns: &mut [Column]) -> Result<()> {
        for (index, column) in columns.iter_mut().enumerate() {
            while column.size() < index {
                column.push_raw(deck.take()?);
            }
            let mut card = deck.take()?;
            card.flip();
            column.push_raw(card);
            debug!("dealt {} cards to {}", column.size(), column.kind());
        }
        info!(
            "deal complete: {} cards on the tableau, {} left in the deck",
            columns.iter().map(|c| c.size()).sum::<usize>(),
            deck.size()
        );
        Ok(())
    }
}
