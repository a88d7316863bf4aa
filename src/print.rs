//! Builds the console comparison grid from a grouped price matrix.

use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::grid::PriceGrid;

/// Suffix on every cell matching its row's minimum price, so the cheapest offers stand out in
/// plain console output.
const MIN_MARKER: char = '*';

/// Price in 만원 to one decimal place, the way the provider listings read: 129,000원 → `12.9`.
pub fn format_man_won(price: u32) -> String {
    format!("{:.1}", price as f64 / 10_000.0)
}

/// One comparison row per slot in chronological order, one column per club in alphabetical
/// order. Cells carry the provider initial, the price in 만원 and the minimum marker; gaps
/// render as `-`.
pub fn tabulate(grid: &PriceGrid, year: i32) -> Table {
    let clubs: Vec<&str> = grid.clubs().collect();
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default()
                    .with(MinWidth(12))
                    .with(HAlign::Left)
                    .with(Separator(true)),
            )];
            for _ in &clubs {
                cols.push(Col::new(
                    Styles::default().with(MinWidth(8)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row({
            let mut header_cells = vec!["날짜/시간대".into()];
            for club in &clubs {
                header_cells.push((*club).into());
            }
            Row::new(Styles::default().with(Header(true)), header_cells)
        });

    for slot in grid.slots_chronological(year) {
        let min = grid.row_min(slot);
        let mut row_cells = vec![slot.to_string().into()];
        for club in &clubs {
            let cell = match grid.cell(slot, club) {
                Some(record) => {
                    let mut text =
                        format!("{} {}", record.source.initial(), format_man_won(record.price));
                    if Some(record.price) == min {
                        text.push(MIN_MARKER);
                    }
                    text
                }
                None => "-".to_string(),
            };
            row_cells.push(cell.into());
        }
        table.push_row(Row::new(Styles::default(), row_cells));
    }
    table
}

/// Single inline status row shown in place of results when a query fails. No partial results
/// accompany it.
pub fn status_row(message: &str) -> Table {
    Table::default()
        .with_cols(vec![Col::new(
            Styles::default().with(MinWidth(40)).with(HAlign::Centred),
        )])
        .with_row(Row::from([message]))
}
