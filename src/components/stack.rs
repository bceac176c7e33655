// src/components/stack.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::components::card::Suit;

/// カードが置かれる場所の種類だよ。
/// エラーやログ、スナップショットで「どの山か」を示すのに使う。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 山札 (Stock)。ここからカードを引く。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
    /// 組札 (Foundation)。スートごとに1つ。
    Foundation(Suit),
    /// 場札 (Tableau)。列番号 (0-6) を持つ。
    Tableau(u8),
}

impl StackType {
    /// `Display` 用の短いラベル。
    pub(crate) fn label(&self) -> &'static str {
        match self {
            StackType::Stock => "deck",
            StackType::Waste => "discard pile",
            StackType::Foundation(_) => "ace pile",
            StackType::Tableau(_) => "column",
        }
    }
}

impl fmt::Display for StackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackType::Foundation(suit) => write!(f, "{} ({})", self.label(), suit),
            StackType::Tableau(index) => write!(f, "{} {}", self.label(), index),
            _ => f.write_str(self.label()),
        }
    }
}
