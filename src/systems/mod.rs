// src/systems/mod.rs
//! テーブル全体にまたがる処理。配る処理と、クリア判定。

pub mod deal_system;
pub mod win_condition_system;

pub use deal_system::DealInitialCardsSystem;
pub use win_condition_system::WinConditionSystem;
