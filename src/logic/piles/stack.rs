// src/logic/piles/stack.rs
//! すべての山の土台になる `Stack` と、読み取り用の `Pile` トレイトだよ。

use std::fmt;

use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::error::{EngineError, Result};

/// 山に共通の読み取り操作。
///
/// 実装する型は中身の `Stack` を見せるだけでいい。あとはデフォルト実装が全部やってくれる。
pub trait Pile {
    fn stack(&self) -> &Stack;

    /// 山の種類 (どこの山か)。
    fn kind(&self) -> StackType {
        self.stack().kind
    }

    fn size(&self) -> usize {
        self.stack().cards.len()
    }

    fn is_empty(&self) -> bool {
        self.stack().cards.is_empty()
    }

    /// 一番上 (最後に積んだ) カード。空なら `EmptyStack`。
    fn top(&self) -> Result<&Card> {
        self.peek().ok_or(EngineError::EmptyStack(self.kind()))
    }

    /// `top` の Option 版。
    fn peek(&self) -> Option<&Card> {
        self.stack().cards.last()
    }

    /// 下から上の順に並んだ中身。
    fn cards(&self) -> &[Card] {
        &self.stack().cards
    }
}

/// 下から上へ並んだカードの列。最後の要素が「一番上」。
///
/// ルールのチェックはしない。ルールが必要な山 (組札・場札) はこれを包んで使うよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    kind: StackType,
    cards: Vec<Card>,
}

impl Stack {
    pub fn new(kind: StackType) -> Self {
        Self {
            kind,
            cards: Vec::new(),
        }
    }

    /// 一番上のカードを取り出して返す。空なら `EmptyStack`。
    pub fn take(&mut self) -> Result<Card> {
        self.cards.pop().ok_or(EngineError::EmptyStack(self.kind))
    }

    /// カードをそのまま上に積む。ルールチェックなし、配るときと内部の移動専用。
    pub(crate) fn add_many<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// 上から `count` 枚を、下から上の順のまま切り離す。
    pub(crate) fn split_off_top(&mut self, count: usize) -> Vec<Card> {
        let at = self.cards.len().saturating_sub(count);
        self.cards.split_off(at)
    }

    /// 中身を全部取り出して空にする。
    pub(crate) fn drain_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// 中身を丸ごと差し替える。失敗した移動の巻き戻し用。
    pub(crate) fn replace(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}

impl Pile for Stack {
    fn stack(&self) -> &Stack {
        self
    }
}

/// "<column: 3 cards>" みたいな短い要約。
pub(crate) fn summary(f: &mut fmt::Formatter<'_>, pile: &impl Pile) -> fmt::Result {
    let size = pile.size();
    let maybe_s = if size == 1 { "" } else { "s" };
    write!(f, "<{}: {} card{}>", pile.kind().label(), size, maybe_s)
}

impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        summary(f, self)
    }
}
