// src/logic/deck.rs

use std::fmt;

use itertools::Itertools;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::components::stack::StackType;
use crate::config::rules::DECK_SIZE;
use crate::error::Result;
use crate::logic::piles::stack::{summary, Pile, Stack};

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スート順・ランク順に並んでいて、すべて裏向き。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。乱数生成器は呼び出し側が渡す。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// 山札 (Stock)。まだ引いていないカードを裏向きで持っている。
///
/// 減るのは `take` だけ、増えるのは捨て札を戻す `recycle` だけ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    stack: Stack,
}

impl Deck {
    /// 52枚揃ったシャッフル済みの山札。
    pub fn new_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::from_cards(create_standard_deck());
        deck.shuffle(rng);
        deck
    }

    /// 並びを指定して山札を作る。最後の要素が一番上 (最初に引かれる)。
    /// 向きはすべて裏向きにそろえるよ。
    pub fn from_cards(cards: Vec<Card>) -> Self {
        let mut stack = Stack::new(StackType::Stock);
        stack.add_many(cards.into_iter().map(|mut card| {
            card.is_face_up = false;
            card
        }));
        Self { stack }
    }

    /// 中身を並び順通りの52枚に戻す。
    pub fn reset(&mut self) -> &mut Self {
        *self = Self::from_cards(create_standard_deck());
        self
    }

    pub(crate) fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        // いったん全部抜いて、混ぜて、そのまま戻すだけ
        let mut cards = self.stack.drain_all();
        shuffle_deck(&mut cards, rng);
        self.stack.replace(cards);
        self
    }

    /// 52種類のカードがちょうど1枚ずつ入っているか。
    /// ゲームを始められるのはこの状態の山札だけ。
    pub fn is_complete(&self) -> bool {
        self.size() == DECK_SIZE && self.distinct_count() == DECK_SIZE
    }

    /// (スート, ランク) が何種類あるか。向きは関係なし。
    pub fn distinct_count(&self) -> usize {
        // Card の Hash / Eq はスートとランクだけを見るので、そのまま unique できる
        self.cards().iter().unique().count()
    }

    /// 一番上のカードを引く。空なら `EmptyStack`。
    pub fn take(&mut self) -> Result<Card> {
        self.stack.take()
    }

    /// 捨て札を全部裏返して山札に戻す。
    ///
    /// `discarded` は捨てた順 (最後が一番新しい)。逆順に積むので、
    /// 一番古い捨て札が山札の一番上に来て、次に最初に引かれる。
    pub(crate) fn recycle(&mut self, discarded: Vec<Card>) {
        debug!("recycling {} cards into the deck", discarded.len());
        self.stack.add_many(discarded.into_iter().rev().map(|mut card| {
            card.is_face_up = false;
            card
        }));
    }
}

impl Pile for Deck {
    fn stack(&self) -> &Stack {
        &self.stack
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        summary(f, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn deck_creation() {
        let deck = create_standard_deck();
        assert_eq!(deck.len(), 52);

        let unique: HashSet<&Card> = deck.iter().collect();
        assert_eq!(unique.len(), 52, "デッキに重複したカードが見つかりました！");
        assert!(deck.iter().all(|card| !card.is_face_up), "デッキに表向きのカードが含まれています！");
    }

    #[test]
    fn shuffled_deck_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::new_shuffled(&mut rng);
        assert_eq!(deck.size(), 52);

        let shuffled: HashSet<&Card> = deck.cards().iter().collect();
        let standard = create_standard_deck();
        assert!(standard.iter().all(|card| shuffled.contains(card)));
        assert!(deck.cards().iter().all(|card| !card.is_face_up));
    }

    #[test]
    fn same_seed_same_order() {
        let a = Deck::new_shuffled(&mut StdRng::seed_from_u64(99));
        let b = Deck::new_shuffled(&mut StdRng::seed_from_u64(99));
        let key = |d: &Deck| d.cards().iter().map(|c| (c.suit, c.rank)).collect::<Vec<_>>();
        assert_eq!(key(&a), key(&b));
    }

    #[test]
    fn from_cards_turns_everything_face_down() {
        let mut up = Card::new(Suit::Heart, Rank::Ace);
        up.flip();
        let deck = Deck::from_cards(vec![up]);
        assert!(!deck.top().unwrap().is_face_up);
    }

    #[test]
    fn take_until_empty() {
        let mut deck = Deck::from_cards(vec![Card::new(Suit::Club, Rank::Two)]);
        assert_eq!(deck.take(), Ok(Card::new(Suit::Club, Rank::Two)));
        assert_eq!(deck.take(), Err(crate::error::EngineError::EmptyStack(StackType::Stock)));
    }

    #[test]
    fn recycle_puts_oldest_discard_on_top() {
        let mut deck = Deck::from_cards(Vec::new());
        let mut discarded = vec![
            Card::new(Suit::Club, Rank::Ace),
            Card::new(Suit::Club, Rank::Two),
            Card::new(Suit::Club, Rank::Three),
        ];
        discarded.iter_mut().for_each(|card| {
            card.flip();
        });
        deck.recycle(discarded);

        assert_eq!(deck.size(), 3);
        assert!(deck.cards().iter().all(|card| !card.is_face_up));
        assert_eq!(deck.take(), Ok(Card::new(Suit::Club, Rank::Ace)));
        assert_eq!(deck.take(), Ok(Card::new(Suit::Club, Rank::Two)));
    }

    #[test]
    fn reset_refills_in_order() {
        let mut deck = Deck::from_cards(Vec::new());
        deck.reset();
        assert_eq!(deck.size(), 52);
        assert_eq!(deck.top(), Ok(&Card::new(Suit::Spade, Rank::King)));
        deck.shuffle(&mut StdRng::seed_from_u64(1));
        assert_eq!(deck.size(), 52);
        assert!(deck.is_complete(), "混ぜても52種類そろったまま");
    }

    #[test]
    fn duplicates_and_short_decks_are_not_complete() {
        let mut cards = create_standard_deck();
        cards[0] = Card::new(Suit::Spade, Rank::King);
        let duplicated = Deck::from_cards(cards.clone());
        assert_eq!(duplicated.size(), 52);
        assert_eq!(duplicated.distinct_count(), 51);
        assert!(!duplicated.is_complete());

        cards.truncate(30);
        assert!(!Deck::from_cards(cards).is_complete());
        assert!(Deck::new_shuffled(&mut StdRng::seed_from_u64(3)).is_complete());
    }
}
