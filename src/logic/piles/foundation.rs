// src/logic/piles/foundation.rs

use std::fmt;

use log::trace;

use super::stack::{summary, Pile, Stack};
use crate::components::card::{Card, Suit};
use crate::components::stack::StackType;
use crate::config::rules::NUM_RANKS;
use crate::error::{EngineError, Result};
use crate::logic::rules::can_move_to_foundation;

/// 組札 (Foundation)。スートごとに1つあって、A から K まで順番に積むよ。
///
/// ルールを飛ばしてまとめて積む方法は用意していない。入口は `add` だけ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Foundation {
    suit: Suit,
    stack: Stack,
}

impl Foundation {
    pub fn new(suit: Suit) -> Self {
        Self {
            suit,
            stack: Stack::new(StackType::Foundation(suit)),
        }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// `card` を置けるかどうかだけ調べる。
    pub fn accepts(&self, card: &Card) -> bool {
        can_move_to_foundation(self.suit, self.peek(), card)
    }

    /// ルールに合えば積む。合わなければ `IllegalMove` で、組札は変わらない。
    pub fn add(&mut self, card: Card) -> Result<()> {
        if !self.accepts(&card) {
            return Err(EngineError::illegal(&card, self.kind()));
        }
        trace!("{:?} {:?} -> {}", card.rank, card.suit, self.kind());
        self.stack.push(card);
        Ok(())
    }

    /// 一番上のカードを取り出す。
    pub fn take(&mut self) -> Result<Card> {
        self.stack.take()
    }

    /// K まで13枚揃ったか。
    pub fn is_complete(&self) -> bool {
        self.size() == NUM_RANKS
    }
}

impl Pile for Foundation {
    fn stack(&self) -> &Stack {
        &self.stack
    }
}

impl fmt::Display for Foundation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        summary(f, self)
    }
}
