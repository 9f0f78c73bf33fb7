//! Payline evaluator: scores every active payline on a grid.
//!
//! Each line is read left to right by a small matching automaton:
//!   - The run is anchored by the first non-wild symbol on the line.
//!   - Wilds extend the run in any position.
//!   - The first symbol that is neither wild nor the anchor ends the run.
//!
//! A line pays when the run is at least MIN_RUN long AND an anchor exists.
//! A line made entirely of wilds therefore never pays, even at 5 of 5.

use crate::{
    money::Cents,
    paylines::{Payline, LINE_LENGTH},
    spin::Grid,
    symbols::{SymbolCatalog, SymbolId},
    types::Cell,
};
use serde::{Deserialize, Serialize};

pub const MIN_RUN: usize = 3;

/// Outcome of the matching automaton on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineMatch {
    /// The non-wild symbol the run is anchored on, if any.
    pub anchor:        Option<SymbolId>,
    /// Length of the left-anchored run, wilds included.
    pub count:         usize,
    pub includes_wild: bool,
}

impl LineMatch {
    /// The symbol this line pays on, if it pays at all.
    pub fn paying_symbol(&self) -> Option<SymbolId> {
        if self.count >= MIN_RUN {
            self.anchor
        } else {
            None
        }
    }
}

pub fn match_line(symbols: &[SymbolId; LINE_LENGTH]) -> LineMatch {
    let first = symbols[0];
    let mut anchor = (!first.is_wild()).then_some(first);
    let mut count = 1;
    let mut includes_wild = first.is_wild();

    for &symbol in &symbols[1..] {
        let wild = symbol.is_wild();
        if anchor.is_none() && !wild {
            anchor = Some(symbol);
        }
        if wild || anchor == Some(symbol) {
            count += 1;
            includes_wild |= wild;
        } else {
            break;
        }
    }

    LineMatch {
        anchor,
        count,
        includes_wild,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineWin {
    pub payline_index: usize,
    pub coordinates:   [Cell; LINE_LENGTH],
    /// The paying symbol, repeated once per matched position.
    pub symbols:       Vec<SymbolId>,
    pub count:         usize,
    pub includes_wild: bool,
    pub win:           Cents,
}

impl LineWin {
    pub fn symbol(&self) -> Option<SymbolId> {
        self.symbols.first().copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Winning lines in ascending payline index.
    pub win_lines: Vec<LineWin>,
    pub total_win: Cents,
}

impl Evaluation {
    pub fn is_win(&self) -> bool {
        self.total_win.is_positive()
    }
}

/// Score a single payline. None when the line does not pay.
pub fn evaluate_line(
    grid: &Grid,
    payline: &Payline,
    payline_index: usize,
    bet_per_line: Cents,
    catalog: &SymbolCatalog,
) -> Option<LineWin> {
    let symbols = grid.line(payline)?;
    let matched = match_line(&symbols);
    let symbol = matched.paying_symbol()?;

    let multiplier = catalog.get(symbol).map_or(0, |s| s.pays(matched.count));
    let win = bet_per_line.times(u64::from(multiplier));
    if !win.is_positive() {
        return None;
    }

    Some(LineWin {
        payline_index,
        coordinates: *payline.cells(),
        symbols: vec![symbol; matched.count],
        count: matched.count,
        includes_wild: matched.includes_wild,
        win,
    })
}

/// Score the first `active_count` paylines and total the wins.
pub fn evaluate(
    grid: &Grid,
    paylines: &[Payline],
    active_count: usize,
    bet_per_line: Cents,
    catalog: &SymbolCatalog,
) -> Evaluation {
    let win_lines: Vec<LineWin> = paylines
        .iter()
        .take(active_count)
        .enumerate()
        .filter_map(|(i, line)| evaluate_line(grid, line, i, bet_per_line, catalog))
        .collect();
    let total_win = win_lines.iter().map(|w| w.win).sum();

    Evaluation {
        win_lines,
        total_win,
    }
}

/// One human-readable line per active payline, for debugging a result.
///
/// `Payline 1: Seven, Seven, Seven, Orange, Orange => 3 × Seven pays 1.50`
pub fn describe_lines(
    grid: &Grid,
    paylines: &[Payline],
    active_count: usize,
    bet_per_line: Cents,
    catalog: &SymbolCatalog,
) -> Vec<String> {
    paylines
        .iter()
        .take(active_count)
        .enumerate()
        .map(|(i, line)| {
            let names = match grid.line(line) {
                Some(symbols) => symbols
                    .iter()
                    .map(|&s| catalog.name_of(s))
                    .collect::<Vec<_>>()
                    .join(", "),
                None => return format!("Payline {}: outside the grid", i + 1),
            };
            let status = match evaluate_line(grid, line, i, bet_per_line, catalog) {
                Some(win) => format!(
                    "{} × {} pays {}",
                    win.count,
                    win.symbol().map_or("?", |s| catalog.name_of(s)),
                    win.win
                ),
                None => "no win".to_string(),
            };
            format!("Payline {}: {names} => {status}", i + 1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use SymbolId::*;

    #[test]
    fn plain_run_stops_at_first_mismatch() {
        let m = match_line(&[Seven, Seven, Seven, Orange, Orange]);
        assert_eq!(m.anchor, Some(Seven));
        assert_eq!(m.count, 3);
        assert!(!m.includes_wild);
        assert_eq!(m.paying_symbol(), Some(Seven));
    }

    #[test]
    fn leading_wild_takes_the_next_symbol_as_anchor() {
        let m = match_line(&[Wild, Seven, Seven, Orange, Orange]);
        assert_eq!(m.anchor, Some(Seven));
        assert_eq!(m.count, 3);
        assert!(m.includes_wild);
    }

    #[test]
    fn wilds_extend_in_the_middle() {
        let m = match_line(&[Cherry, Wild, Cherry, Wild, Plum]);
        assert_eq!(m.anchor, Some(Cherry));
        assert_eq!(m.count, 4);
    }

    #[test]
    fn all_wild_line_has_no_anchor() {
        let m = match_line(&[Wild; LINE_LENGTH]);
        assert_eq!(m.count, 5);
        assert_eq!(m.anchor, None);
        assert_eq!(m.paying_symbol(), None, "An all-wild line must never pay");
    }

    #[test]
    fn later_pair_does_not_resume_a_broken_run() {
        let m = match_line(&[Seven, Seven, Orange, Seven, Seven]);
        assert_eq!(m.count, 2);
        assert_eq!(m.paying_symbol(), None);
    }

    #[test]
    fn anchor_is_fixed_by_first_non_wild() {
        // Wild, Wild, Bar then Seven: anchor is Bar, Seven breaks the run.
        let m = match_line(&[Wild, Wild, Bar, Seven, Seven]);
        assert_eq!(m.anchor, Some(Bar));
        assert_eq!(m.count, 3);
    }
}
