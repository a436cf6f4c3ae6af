use anyhow::{bail, Result};

pub type Digit = u8; // 1..=9, 0 = empty

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos { pub r: usize, pub c: usize }

impl Pos { pub fn idx(self) -> usize { self.r * 9 + self.c } }

/// 9x9 board, row-major. Cells never go back from a digit to empty:
/// the game has no erase, so `set` is only ever called on an empty cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: [Digit; 81],
}

impl Grid {
    pub fn empty() -> Self { Self { cells: [0; 81] } }

    /// Parse an 81-char compact form (`.` or `0` for blanks). Test and
    /// embedding convenience; interactive games always start empty.
    pub fn from_compact(s: &str) -> Result<Self> {
        if s.len() != 81 { bail!("compact string must be 81 chars") }
        let mut g = Grid::empty();
        for (i, ch) in s.chars().enumerate() {
            g.cells[i] = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => bail!("invalid char {ch}"),
            };
        }
        Ok(g)
    }

    pub fn to_compact(&self) -> String {
        self.cells.iter().map(|&d| if d == 0 { '.' } else { (b'0' + d) as char }).collect()
    }

    pub fn get(&self, p: Pos) -> Digit { self.cells[p.idx()] }

    pub fn set(&mut self, p: Pos, d: Digit) { self.cells[p.idx()] = d; }

    pub fn cells(&self) -> &[Digit; 81] { &self.cells }
}
