// src/logic/piles/column.rs

use std::fmt;

use log::trace;

use super::stack::{summary, Pile, Stack};
use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::error::{EngineError, Result};
use crate::logic::rules::{can_move_to_tableau, is_valid_run};

/// 場札 (Tableau) の1列。K から A へ、色を交互にして積んでいくよ。
///
/// 空でない列の一番上は、カードを取り除いた直後に必ず表向きになる (自動めくり)。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    stack: Stack,
}

impl Column {
    pub fn new(index: u8) -> Self {
        Self {
            stack: Stack::new(StackType::Tableau(index)),
        }
    }

    /// `card` を一番上に置けるかどうかだけ調べる。
    pub fn accepts(&self, card: &Card) -> bool {
        can_move_to_tableau(self.peek(), card)
    }

    /// ルールに合えば1枚積む。合わなければ `IllegalMove` で、列は変わらない。
    pub fn add(&mut self, card: Card) -> Result<()> {
        if !self.accepts(&card) {
            return Err(EngineError::illegal(&card, self.kind()));
        }
        self.stack.push(card);
        Ok(())
    }

    /// 下から上の順に並んだ run をまとめて積む。
    ///
    /// ルールを見るのは一番下 (`cards[0]`) が今の一番上に乗るかどうか。
    /// run 自体が空、裏向きを含む、降順・色交互になっていない場合も `IllegalMove`。
    pub fn add_sequence(&mut self, cards: Vec<Card>) -> Result<()> {
        let Some(base) = cards.first() else {
            return Err(EngineError::IllegalMove {
                card: None,
                target: self.kind(),
            });
        };
        if !self.accepts(base) || !is_valid_run(&cards) {
            return Err(EngineError::illegal(base, self.kind()));
        }
        self.stack.add_many(cards);
        Ok(())
    }

    /// 一番上の1枚を取り出す。下に裏向きのカードが出てきたら表にするよ。
    pub fn take(&mut self) -> Result<Card> {
        let card = self.stack.take()?;
        self.reveal_top();
        Ok(card)
    }

    /// 上から `count` 枚を run として取り出す (下から上の順のまま)。
    /// 足りなければ `InsufficientCards` で、列は変わらない。
    pub fn take_run(&mut self, count: usize) -> Result<Vec<Card>> {
        // 列にない枚数は取れない。ここで断れば列には一切触っていない
        if count > self.size() {
            return Err(EngineError::InsufficientCards {
                requested: count,
                available: self.size(),
            });
        }
        // 上から count 枚を、下→上の並びのまま切り出す
        let run = self.stack.split_off_top(count);
        // 裏向きのカードが一番上に出てきたら表にする
        self.reveal_top();
        Ok(run)
    }

    /// 一番上が裏向きなら表にする。めくったら `true`。
    pub fn reveal_top(&mut self) -> bool {
        let kind = self.kind();
        match self.stack.top_mut() {
            Some(top) if !top.is_face_up => {
                top.flip();
                trace!("{}: auto-revealed {:?} {:?}", kind, top.rank, top.suit);
                true
            }
            _ => false,
        }
    }

    /// ルールを無視して積む。最初に配るとき専用だよ。
    pub(crate) fn push_raw(&mut self, card: Card) {
        self.stack.push(card);
    }

    /// 中身をスナップショットで丸ごと戻す。失敗した移動の巻き戻し用。
    pub(crate) fn restore(&mut self, snapshot: Vec<Card>) {
        self.stack.replace(snapshot);
    }

    pub fn face_down_count(&self) -> usize {
        self.cards().iter().filter(|card| !card.is_face_up).count()
    }

    /// 一番上から続く「動かせる」run の長さ (表向きで降順・色交互)。
    pub fn movable_run_len(&self) -> usize {
        let cards = self.cards();
        (1..=cards.len())
            .take_while(|&n| is_valid_run(&cards[cards.len() - n..]))
            .last()
            .unwrap_or(0)
    }
}

impl Pile for Column {
    fn stack(&self) -> &Stack {
        &self.stack
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        summary(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use crate::error::ErrorKind;

    fn face_up(suit: Suit, rank: Rank) -> Card {
        let mut card = Card::new(suit, rank);
        card.flip();
        card
    }

    /// 裏向き2枚 + 表向き K♠ Q♥ の列を作る。
    fn sample_column() -> Column {
        let mut column = Column::new(0);
        column.push_raw(Card::new(Suit::Club, Rank::Four));
        column.push_raw(Card::new(Suit::Diamond, Rank::Nine));
        column.push_raw(face_up(Suit::Spade, Rank::King));
        column.push_raw(face_up(Suit::Heart, Rank::Queen));
        column
    }

    #[test]
    fn empty_column_takes_only_kings() {
        let mut column = Column::new(0);
        let err = column.add(face_up(Suit::Heart, Rank::Five)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalMove);
        assert!(column.is_empty());
        assert!(column.add(face_up(Suit::Heart, Rank::King)).is_ok());
    }

    #[test]
    fn add_requires_alternating_descending() {
        let mut column = sample_column();
        assert!(column.add(face_up(Suit::Diamond, Rank::Jack)).is_err(), "同色はダメ");
        assert!(column.add(face_up(Suit::Spade, Rank::Ten)).is_err(), "ランク違いはダメ");
        assert_eq!(column.size(), 4);
        assert!(column.add(face_up(Suit::Club, Rank::Jack)).is_ok());
        assert_eq!(column.size(), 5);
    }

    #[test]
    fn take_reveals_new_top() {
        let mut column = sample_column();
        column.take().unwrap();
        assert!(column.top().unwrap().is_face_up, "K♠ は元から表");
        column.take().unwrap();
        let top = column.top().unwrap();
        assert_eq!(top, &Card::new(Suit::Diamond, Rank::Nine));
        assert!(top.is_face_up, "裏向きだった 9♦ が自動でめくられるはず");
        assert_eq!(column.face_down_count(), 1);
    }

    #[test]
    fn take_from_empty_column_errors() {
        let mut column = Column::new(3);
        assert_eq!(column.take(), Err(EngineError::EmptyStack(StackType::Tableau(3))));
    }

    #[test]
    fn take_run_preserves_order_and_reveals() {
        let mut column = sample_column();
        let run = column.take_run(2).unwrap();
        assert_eq!(run, vec![Card::new(Suit::Spade, Rank::King), Card::new(Suit::Heart, Rank::Queen)]);
        assert_eq!(column.size(), 2);
        assert!(column.top().unwrap().is_face_up);
    }

    #[test]
    fn take_run_too_many_leaves_column_untouched() {
        let mut column = sample_column();
        let before = column.clone();
        assert_eq!(
            column.take_run(5),
            Err(EngineError::InsufficientCards { requested: 5, available: 4 })
        );
        assert_eq!(column, before);
        assert!(!column.cards()[1].is_face_up);
    }

    #[test]
    fn add_sequence_checks_base_and_run() {
        let mut target = Column::new(1);
        target.push_raw(face_up(Suit::Diamond, Rank::Eight));

        // 7♣ 6♥ は 8♦ に乗る
        let run = vec![face_up(Suit::Club, Rank::Seven), face_up(Suit::Heart, Rank::Six)];
        assert!(target.add_sequence(run).is_ok());
        assert_eq!(target.size(), 3);

        // 土台が合わない
        let bad_base = vec![face_up(Suit::Heart, Rank::Five), face_up(Suit::Spade, Rank::Four)];
        assert!(target.add_sequence(bad_base).is_err());

        // run の中身が崩れている
        let broken = vec![face_up(Suit::Spade, Rank::Five), face_up(Suit::Club, Rank::Four)];
        assert!(target.add_sequence(broken).is_err());

        assert!(target.add_sequence(Vec::new()).is_err(), "空の run はダメ");
        assert_eq!(target.size(), 3);
    }

    #[test]
    fn movable_run_len_stops_at_face_down() {
        let column = sample_column();
        assert_eq!(column.movable_run_len(), 2);
        assert_eq!(Column::new(0).movable_run_len(), 0);
    }

    #[test]
    fn display_summary() {
        assert_eq!(sample_column().to_string(), "<column: 4 cards>");
    }
}
