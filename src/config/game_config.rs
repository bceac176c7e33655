// src/config/game_config.rs
//! 1ゲーム分の設定。今のところ「何枚めくるか」と乱数シードだけ。

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// 山札から一度にめくる枚数。1枚めくりか3枚めくりのどちらか。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DrawCount {
    #[default]
    One,
    Three,
}

impl DrawCount {
    pub fn get(self) -> usize {
        match self {
            DrawCount::One => 1,
            DrawCount::Three => 3,
        }
    }
}

impl TryFrom<u8> for DrawCount {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(DrawCount::One),
            3 => Ok(DrawCount::Three),
            other => Err(EngineError::InvalidDrawCount(other)),
        }
    }
}

impl From<DrawCount> for u8 {
    fn from(value: DrawCount) -> Self {
        match value {
            DrawCount::One => 1,
            DrawCount::Three => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub draw_count: DrawCount,
    /// `Some` なら毎回同じ並びで配る。テストやリプレイ用。
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn new(draw_count: u8) -> Result<Self> {
        Ok(Self {
            draw_count: DrawCount::try_from(draw_count)?,
            seed: None,
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// JSON から読み込む。足りない項目はデフォルト (1枚めくり、シードなし)。
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
