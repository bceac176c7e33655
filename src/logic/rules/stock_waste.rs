//! 山札 (Stock) と捨て札 (Waste) に関するルールを定義するよ。

/// ストック（山札）からウェスト（捨て札）にカードを配れるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// ストックが空のときに、ウェストからストックにカードを戻せるかチェックする。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> bool {
    stock_is_empty && !waste_is_empty
}
