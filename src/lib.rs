// src/lib.rs

//! クロンダイク・ソリティアのルールエンジンだよ！🃏
//!
//! 山札・捨て札・組札4つ・場札7列を [`Table`] が全部持っていて、
//! 5つの移動操作 (めくる、捨て札→場札、捨て札→組札、場札→場札、場札→組札) を
//! ルールチェック付きで実行する。失敗した移動は必ず巻き戻してからエラーを返すよ。
//!
//! 画面描画やキー入力はこのクレートの外。表示側は [`Table`] の読み取りメソッドで
//! 山の中身を見て、[`Command`] か各メソッドで操作する。

pub mod components;
pub mod config;
pub mod error;
pub mod logic;
pub mod protocol;
pub mod systems;
pub mod table;

pub use components::card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
pub use components::game_state::{GameStatus, TableSnapshot};
pub use components::stack::StackType;
pub use config::{DrawCount, GameConfig};
pub use error::{EngineError, ErrorKind, Result};
pub use logic::auto_move::{find_automatic_foundation_move, AutoMove};
pub use logic::deck::Deck;
pub use logic::piles::{Column, Foundation, Pile, Stack};
pub use logic::rules::CardColor;
pub use protocol::{Command, MoveOutcome};
pub use table::{DrawOutcome, Table};
