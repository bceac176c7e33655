// src/error.rs
//! エンジンが返すエラーをまとめるよ。

use thiserror::Error;

use crate::components::card::Card;
use crate::components::stack::StackType;

/// エラーの大分類。表示側はこれを見てメッセージを出し分ける。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 引数が範囲外 (ランク、スート、めくる枚数、山札の中身、列番号)。プログラムのバグ。
    InvalidConfig,
    /// 空の山からカードを取ろうとした。
    EmptyStack,
    /// 移動先がそのカードを受け付けない。山の中身は呼び出し前と同じ。
    IllegalMove,
    /// 列にあるより多い枚数を取ろうとした。
    InsufficientCards,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("rank must be between 1-13, got {0}")]
    InvalidRank(u8),

    #[error("'{0}' is not a valid card suit")]
    InvalidSuit(String),

    #[error("draw count must be 1 or 3, got {0}")]
    InvalidDrawCount(u8),

    #[error("a deck must hold the 52 distinct cards, got {cards} cards ({distinct} distinct)")]
    InvalidDeck { cards: usize, distinct: usize },

    #[error("column index {index} is out of range")]
    ColumnOutOfRange { index: usize },

    #[error("{0} is empty")]
    EmptyStack(StackType),

    #[error("illegal move onto {target}")]
    IllegalMove { card: Option<Card>, target: StackType },

    #[error("not enough cards: requested {requested}, column has {available}")]
    InsufficientCards { requested: usize, available: usize },
}

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::InvalidRank(_)
            | EngineError::InvalidSuit(_)
            | EngineError::InvalidDrawCount(_)
            | EngineError::InvalidDeck { .. }
            | EngineError::ColumnOutOfRange { .. } => ErrorKind::InvalidConfig,
            EngineError::EmptyStack(_) => ErrorKind::EmptyStack,
            EngineError::IllegalMove { .. } => ErrorKind::IllegalMove,
            EngineError::InsufficientCards { .. } => ErrorKind::InsufficientCards,
        }
    }

    pub(crate) fn illegal(card: &Card, target: StackType) -> Self {
        EngineError::IllegalMove {
            card: Some(card.clone()),
            target,
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
