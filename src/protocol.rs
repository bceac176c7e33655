// src/protocol.rs

// 表示・入力側からテーブルに送るコマンドと、その結果の形を定義するよ！💌
// キー入力の解釈や「どの列を選んだか」の管理は表示側の仕事。
// ここに来るのは「何をしたいか」が決まったあとのコマンドだけ。
use serde::{Deserialize, Serialize};

use crate::table::DrawOutcome;

/// テーブルへの操作。`Table::apply` で実行する。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// 新しいゲームを配る。
    ResetGame { draw_count: u8 },
    /// 山札をめくる (空なら捨て札を戻す)。
    Draw,
    DiscardToColumn { column: usize },
    DiscardToFoundation,
    /// `from` 列の上から `count` 枚を `to` 列へ。
    ColumnToColumn { from: usize, to: usize, count: usize },
    ColumnToFoundation { column: usize },
}

/// コマンドが成功したときの結果。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Reset,
    Draw(DrawOutcome),
    Moved,
}
