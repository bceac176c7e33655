// src/table.rs
//! ゲームの本体！山札・捨て札・組札4つ・場札7列を全部持っているテーブルだよ。🃏
//!
//! カードを動かせるのはこのテーブルだけ。山どうしは直接やりとりしない。
//! 移動に失敗したときは、触った山を全部呼び出し前の状態に戻してからエラーを返す。
//! 「失敗した移動」と「何もしなかった」は、どの山から見ても区別できない。
//!
//! 内部でロックはしない。複数スレッドから使うなら、呼び出し側でテーブル全体を
//! 1つの Mutex で守るなどして、操作を順番に流してね。

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::components::card::{Suit, ALL_SUITS};
use crate::components::game_state::{GameStatus, TableSnapshot};
use crate::components::stack::StackType;
use crate::config::rules::{NUM_COLUMNS, NUM_FOUNDATIONS};
use crate::config::{DrawCount, GameConfig};
use crate::error::{EngineError, Result};
use crate::logic::deck::Deck;
use crate::logic::piles::{Column, Foundation, Pile, Stack};
use crate::logic::rules::{can_deal_from_stock, can_reset_stock_from_waste};
use crate::protocol::{Command, MoveOutcome};
use crate::systems::{DealInitialCardsSystem, WinConditionSystem};

/// `draw_from_pile` の結果。引く操作は失敗しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawOutcome {
    /// 山札から n 枚めくって捨て札に置いた (山札が途中で尽きたら n は少なくなる)。
    Drew(usize),
    /// 山札が空だったので、捨て札 n 枚を山札に戻した。
    Recycled(usize),
    /// 山札も捨て札も空だった。
    Nothing,
}

#[derive(Debug, Clone)]
pub struct Table {
    config: GameConfig,
    deck: Deck,
    waste: Stack,
    foundations: [Foundation; NUM_FOUNDATIONS],
    columns: [Column; NUM_COLUMNS],
}

impl Table {
    /// シャッフルした新しいゲーム。`draw_count` は 1 か 3。
    pub fn new(draw_count: u8) -> Result<Self> {
        Self::with_rng(draw_count, &mut thread_rng())
    }

    /// シードを固定したゲーム。同じシードなら同じ配り方になる。
    pub fn seeded(draw_count: u8, seed: u64) -> Result<Self> {
        Self::with_rng(draw_count, &mut StdRng::seed_from_u64(seed))
    }

    pub fn with_rng<R: Rng + ?Sized>(draw_count: u8, rng: &mut R) -> Result<Self> {
        let config = GameConfig::new(draw_count)?;
        Self::deal(config, Deck::new_shuffled(rng))
    }

    /// 設定から作る。`seed` があればそれで、なければ OS の乱数でシャッフル。
    pub fn from_config(config: GameConfig) -> Result<Self> {
        let deck = match config.seed {
            Some(seed) => Deck::new_shuffled(&mut StdRng::seed_from_u64(seed)),
            None => Deck::new_shuffled(&mut thread_rng()),
        };
        Self::deal(config, deck)
    }

    /// 並びを指定した山札から配る。決まった配り方を再現したいとき用。
    ///
    /// 52種類がちょうど1枚ずつ入っていない山札は `InvalidDeck` で断る。
    pub fn from_deck(draw_count: DrawCount, deck: Deck) -> Result<Self> {
        // 重複や足りないカードがあると「52枚が1回ずつ」が最初から崩れるので、配る前に弾く
        if !deck.is_complete() {
            return Err(EngineError::InvalidDeck {
                cards: deck.size(),
                distinct: deck.distinct_count(),
            });
        }
        Self::deal(
            GameConfig {
                draw_count,
                seed: None,
            },
            deck,
        )
    }

    fn deal(config: GameConfig, mut deck: Deck) -> Result<Self> {
        let mut columns: [Column; NUM_COLUMNS] = std::array::from_fn(|i| Column::new(i as u8));
        DealInitialCardsSystem.execute(&mut deck, &mut columns)?;
        info!("new game: draw {}", config.draw_count.get());
        Ok(Self {
            config,
            deck,
            waste: Stack::new(StackType::Waste),
            foundations: ALL_SUITS.map(Foundation::new),
            columns,
        })
    }

    /// 新しいゲームに配り直す。`draw_count` が不正ならテーブルはそのまま。
    pub fn reset_game(&mut self, draw_count: u8) -> Result<()> {
        self.reset_game_with_rng(draw_count, &mut thread_rng())
    }

    pub fn reset_game_with_rng<R: Rng + ?Sized>(&mut self, draw_count: u8, rng: &mut R) -> Result<()> {
        *self = Self::with_rng(draw_count, rng)?;
        Ok(())
    }

    // --- 読み取り ---

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn draw_count(&self) -> DrawCount {
        self.config.draw_count
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn waste(&self) -> &Stack {
        &self.waste
    }

    pub fn foundation(&self, suit: Suit) -> &Foundation {
        &self.foundations[suit.index()]
    }

    /// `ALL_SUITS` の順。
    pub fn foundations(&self) -> &[Foundation] {
        &self.foundations
    }

    pub fn column(&self, index: usize) -> Result<&Column> {
        self.columns
            .get(index)
            .ok_or(EngineError::ColumnOutOfRange { index })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// 組札を数えて判定するだけ。テーブルは「終わった」状態を持たない。
    pub fn status(&self) -> GameStatus {
        WinConditionSystem::status(&self.foundations)
    }

    /// テーブル上の全カード枚数 (いつでも 52 のはず)。
    pub fn card_count(&self) -> usize {
        self.deck.size()
            + self.waste.size()
            + self.foundations.iter().map(|p| p.size()).sum::<usize>()
            + self.columns.iter().map(|c| c.size()).sum::<usize>()
    }

    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            draw_count: self.config.draw_count,
            status: self.status(),
            deck: self.deck.cards().to_vec(),
            waste: self.waste.cards().to_vec(),
            foundations: self.foundations.iter().map(|p| p.cards().to_vec()).collect(),
            columns: self.columns.iter().map(|c| c.cards().to_vec()).collect(),
        }
    }

    // --- 操作 ---

    /// 山札から `draw_count` 枚まで捨て札にめくる。
    ///
    /// 山札が空なら、捨て札を全部裏返して山札に戻す (一番古い捨て札が次に出る)。
    pub fn draw_from_pile(&mut self) -> DrawOutcome {
        if can_deal_from_stock(self.deck.is_empty()) {
            let mut drawn = 0;
            // 3枚めくりでも、山札が途中で尽きたらそこでおしまい (エラーにはしない)
            for _ in 0..self.config.draw_count.get() {
                let Ok(mut card) = self.deck.take() else {
                    break;
                };
                card.flip(); // 捨て札は全部表向き
                self.waste.push(card);
                drawn += 1;
            }
            debug!("drew {} card(s), {} left in the deck", drawn, self.deck.size());
            DrawOutcome::Drew(drawn)
        } else if can_reset_stock_from_waste(self.deck.is_empty(), self.waste.is_empty()) {
            // 山札が空っぽ！捨て札をまるごと山札に戻す。
            // 裏返しと並べ替えは Deck::recycle がやってくれる
            let discarded = self.waste.drain_all();
            let count = discarded.len();
            self.deck.recycle(discarded);
            DrawOutcome::Recycled(count)
        } else {
            // 山札も捨て札も空。何もすることがない
            DrawOutcome::Nothing
        }
    }

    /// 捨て札の一番上を場札 `column` に移す。
    /// 置けなければカードを捨て札に戻してから `IllegalMove`。
    pub fn discard_to_column(&mut self, column: usize) -> Result<()> {
        // 列番号を先に確かめる。範囲外ならどの山にも触らない
        self.check_column(column)?;
        let card = self.waste.take()?; // 捨て札が空なら EmptyStack がそのまま返る
        if let Err(err) = self.columns[column].add(card.clone()) {
            // 置けなかったカードは捨て札の一番上に戻す。向きも表のまま
            self.waste.push(card);
            return Err(err);
        }
        debug!("discard -> column {}: {}", column, card);
        Ok(())
    }

    /// 捨て札の一番上を、同じスートの組札に移す。
    pub fn discard_to_foundation(&mut self) -> Result<()> {
        let card = self.waste.take()?;
        if let Err(err) = self.foundations[card.suit.index()].add(card.clone()) {
            self.waste.push(card);
            return Err(err);
        }
        debug!("discard -> {} foundation: {}", card.suit, card);
        Ok(())
    }

    /// 場札 `src` の上から `count` 枚を、場札 `dst` に run ごと移す。
    ///
    /// 置けなければ `src` をスナップショットから丸ごと戻す (自動めくりも含めて元通り)。
    pub fn column_to_column(&mut self, src: usize, dst: usize, count: usize) -> Result<()> {
        self.check_column(src)?;
        self.check_column(dst)?;
        if src == dst {
            return Err(EngineError::IllegalMove {
                card: self.columns[src].peek().cloned(),
                target: self.columns[dst].kind(),
            });
        }

        // take_run は自動めくりまでするので、裏向きだったカードの向きごと覚えておく
        let snapshot = self.columns[src].cards().to_vec();
        let run = self.columns[src].take_run(count)?;
        if let Err(err) = self.columns[dst].add_sequence(run) {
            // 置けなかった！取り出した run は捨てて、src を丸ごと元に戻す
            self.columns[src].restore(snapshot);
            return Err(err);
        }
        // take_run でもうめくってあるはずだけど、念のため新しい一番上を確認
        self.columns[src].reveal_top();
        debug!("column {} -> column {}: {} card(s)", src, dst, count);
        Ok(())
    }

    /// 場札 `column` の一番上を、同じスートの組札に移す。
    pub fn column_to_foundation(&mut self, column: usize) -> Result<()> {
        self.check_column(column)?;
        let snapshot = self.columns[column].cards().to_vec();
        let card = self.columns[column].take()?;
        let suit = card.suit;
        if let Err(err) = self.foundations[suit.index()].add(card) {
            self.columns[column].restore(snapshot);
            return Err(err);
        }
        self.columns[column].reveal_top();
        debug!("column {} -> {} foundation", column, suit);
        Ok(())
    }

    /// 表示・入力側から来たコマンドを1つ実行する。
    pub fn apply(&mut self, command: Command) -> Result<MoveOutcome> {
        match command {
            Command::ResetGame { draw_count } => {
                self.reset_game(draw_count)?;
                Ok(MoveOutcome::Reset)
            }
            Command::Draw => Ok(MoveOutcome::Draw(self.draw_from_pile())),
            Command::DiscardToColumn { column } => {
                self.discard_to_column(column).map(|_| MoveOutcome::Moved)
            }
            Command::DiscardToFoundation => self.discard_to_foundation().map(|_| MoveOutcome::Moved),
            Command::ColumnToColumn { from, to, count } => {
                self.column_to_column(from, to, count).map(|_| MoveOutcome::Moved)
            }
            Command::ColumnToFoundation { column } => {
                self.column_to_foundation(column).map(|_| MoveOutcome::Moved)
            }
        }
    }

    fn check_column(&self, index: usize) -> Result<()> {
        if index < NUM_COLUMNS {
            Ok(())
        } else {
            Err(EngineError::ColumnOutOfRange { index })
        }
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
