use itertools::Itertools;

use crate::grid::{Grid, Pos};

const RULE: &str = "  -------------------";

/// Plain-text board view: 1-based column headers and row numbers, `.`
/// for empty cells, horizontal rules after the header and after rows 3,
/// 6, and 9. Pure function of the grid.
pub fn render(grid: &Grid) -> String {
    let mut out = String::new();
    out.push_str("   ");
    out.push_str(&(1..=9).join(" "));
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    for r in 0..9 {
        let row = (0..9)
            .map(|c| match grid.get(Pos { r, c }) {
                0 => '.'.to_string(),
                d => d.to_string(),
            })
            .join(" ");
        out.push_str(&format!("{} |{}|\n", r + 1, row));
        if (r + 1) % 3 == 0 && r != 8 {
            out.push_str(RULE);
            out.push('\n');
        }
    }
    out.push_str(RULE);
    out.push('\n');
    out
}
