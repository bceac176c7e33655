// src/components/card.rs

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::logic::rules::common::CardColor;

/// カードのスート（マーク）だよ！♣️♦️♥️♠️
///
/// 並び順は `ALL_SUITS` と組札 (Foundation) のインデックスで共通。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

/// カードのランク。A は 1、K は 13 として扱うよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

impl Suit {
    /// `ALL_SUITS` の中での位置 (0-3)。組札の配列インデックスに使う。
    pub fn index(self) -> usize {
        self as usize
    }

    /// スートの名前 (小文字、複数形)。
    pub fn name(self) -> &'static str {
        match self {
            Suit::Club => "clubs",
            Suit::Diamond => "diamonds",
            Suit::Heart => "hearts",
            Suit::Spade => "spades",
        }
    }

    /// 表示用の記号 ♣ ♦ ♥ ♠
    pub fn glyph(self) -> char {
        match self {
            Suit::Club => '\u{2663}',
            Suit::Diamond => '\u{2666}',
            Suit::Heart => '\u{2665}',
            Suit::Spade => '\u{2660}',
        }
    }

    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }
}

impl FromStr for Suit {
    type Err = EngineError;

    /// 大文字小文字は区別しないよ。単数形 ("club") も受け付ける。
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "clubs" | "club" => Ok(Suit::Club),
            "diamonds" | "diamond" => Ok(Suit::Diamond),
            "hearts" | "heart" => Ok(Suit::Heart),
            "spades" | "spade" => Ok(Suit::Spade),
            _ => Err(EngineError::InvalidSuit(s.to_string())),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Rank {
    /// 数値 (1-13)。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// A, J, Q, K はアルファベット、それ以外は数字。
    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self> {
        ALL_RANKS
            .get(usize::from(value).wrapping_sub(1))
            .copied()
            .ok_or(EngineError::InvalidRank(value))
    }
}

/// 一枚のカード。🃏
///
/// `suit` と `rank` は作ったあと変わらない。`is_face_up` だけが `flip` で変わるよ。
/// 等しさ (`==`) とハッシュは向きを無視して、スートとランクだけで決まる。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作る。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            is_face_up: false,
        }
    }

    /// 生の値からカードを作るよ。ランクは 1-13、スートは4種類の名前のどれか。
    pub fn try_new(rank: u8, suit: &str) -> Result<Self> {
        let rank = Rank::try_from(rank)?;
        let suit = suit.parse::<Suit>()?;
        Ok(Self::new(suit, rank))
    }

    /// 向きをひっくり返す。チェーンできるように自分を返すよ。
    pub fn flip(&mut self) -> &mut Self {
        self.is_face_up = !self.is_face_up;
        self
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn is_red(&self) -> bool {
        self.color() == CardColor::Red
    }

    pub fn symbol(&self) -> &'static str {
        self.rank.symbol()
    }

    pub fn glyph(&self) -> char {
        self.suit.glyph()
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

impl fmt::Display for Card {
    /// 表向きなら "A♠"、裏向きなら "--"。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_face_up {
            write!(f, "{}{}", self.symbol(), self.glyph())
        } else {
            f.write_str("--")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn create_card_starts_face_down() {
        let card = Card::new(Suit::Spade, Rank::Ace);
        assert_eq!(card.suit, Suit::Spade);
        assert_eq!(card.rank, Rank::Ace);
        assert!(!card.is_face_up);
    }

    #[test]
    fn try_new_validates_rank_and_suit() {
        let card = Card::try_new(12, "Hearts").expect("Q of hearts は作れるはず");
        assert_eq!(card.rank, Rank::Queen);
        assert_eq!(card.suit, Suit::Heart);

        assert_eq!(Card::try_new(0, "spades"), Err(EngineError::InvalidRank(0)));
        assert_eq!(Card::try_new(14, "spades"), Err(EngineError::InvalidRank(14)));
        assert_eq!(
            Card::try_new(3, "stars"),
            Err(EngineError::InvalidSuit("stars".to_string()))
        );
    }

    #[test]
    fn flip_toggles_and_chains() {
        let mut card = Card::new(Suit::Club, Rank::Seven);
        assert!(card.flip().is_face_up);
        assert!(!card.flip().flip().flip().is_face_up);
    }

    #[test]
    fn equality_ignores_orientation() {
        let mut up = Card::new(Suit::Diamond, Rank::Ten);
        up.flip();
        let down = Card::new(Suit::Diamond, Rank::Ten);
        assert_eq!(up, down);
        assert_ne!(down, Card::new(Suit::Heart, Rank::Ten));

        let set: HashSet<Card> = [up, down].into_iter().collect();
        assert_eq!(set.len(), 1, "向き違いでも同じカードとして扱われるはず");
    }

    #[test]
    fn color_and_symbols() {
        assert!(Card::new(Suit::Heart, Rank::Two).is_red());
        assert!(Card::new(Suit::Diamond, Rank::Two).is_red());
        assert!(!Card::new(Suit::Club, Rank::Two).is_red());
        assert!(!Card::new(Suit::Spade, Rank::Two).is_red());

        assert_eq!(Rank::Ace.symbol(), "A");
        assert_eq!(Rank::Ten.symbol(), "10");
        assert_eq!(Rank::Jack.symbol(), "J");
        assert_eq!(Rank::King.value(), 13);
    }

    #[test]
    fn display_hides_face_down_cards() {
        let mut card = Card::new(Suit::Spade, Rank::Queen);
        assert_eq!(card.to_string(), "--");
        card.flip();
        assert_eq!(card.to_string(), "Q\u{2660}");
    }

    #[test]
    fn rank_comparison() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Queen < Rank::King);
        for (i, rank) in ALL_RANKS.iter().enumerate() {
            assert_eq!(Rank::try_from(i as u8 + 1), Ok(*rank));
        }
    }
}
