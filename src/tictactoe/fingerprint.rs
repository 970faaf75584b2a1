//! Canonical state keys
//!
//! A fingerprint is the base-3 number spelled by the nine cells in row-major
//! order (empty = 0, X = 1, O = 2, first cell most significant). The encoding
//! is exact, so two boards share a fingerprint iff all nine cells match.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::board::{BoardState, Cell};

/// Number of distinct cell layouts (3^9)
pub const LAYOUT_COUNT: u16 = 19_683;

/// Exact key derived from a board's cells.
///
/// Serialized as the 9-character board string (e.g. `X...O....`) so that
/// exported tables stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingerprint(u16);

impl Fingerprint {
    pub(crate) fn from_cells(cells: &[Cell; 9]) -> Self {
        let value = cells.iter().fold(0u16, |acc, cell| {
            acc * 3
                + match cell {
                    Cell::Empty => 0,
                    Cell::X => 1,
                    Cell::O => 2,
                }
        });
        Fingerprint(value)
    }

    /// Build a fingerprint from its numeric value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if the value is not below 3^9.
    pub fn from_value(value: u16) -> Result<Self, crate::Error> {
        if value < LAYOUT_COUNT {
            Ok(Fingerprint(value))
        } else {
            Err(crate::Error::InvalidConfiguration {
                message: format!("fingerprint {value} exceeds {}", LAYOUT_COUNT - 1),
            })
        }
    }

    /// Numeric value in `0..3^9`
    pub fn value(self) -> u16 {
        self.0
    }

    /// Rebuild the board this fingerprint was taken from
    pub fn to_state(self) -> BoardState {
        let mut cells = [Cell::Empty; 9];
        let mut n = self.0;
        for slot in (0..9).rev() {
            cells[slot] = match n % 3 {
                0 => Cell::Empty,
                1 => Cell::X,
                _ => Cell::O,
            };
            n /= 3;
        }
        BoardState::from_cells(cells)
    }
}

impl From<&BoardState> for Fingerprint {
    fn from(state: &BoardState) -> Self {
        state.fingerprint()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.to_state();
        for cell in state.cells() {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Fingerprint {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(BoardState::from_string(s)?.fingerprint())
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Fingerprint> for String {
    fn from(fingerprint: Fingerprint) -> Self {
        fingerprint.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Move;

    #[test]
    fn test_empty_board_is_zero() {
        assert_eq!(BoardState::new().fingerprint().value(), 0);
        assert_eq!(BoardState::new().fingerprint().to_string(), ".........");
    }

    #[test]
    fn test_first_cell_is_most_significant() {
        let corner = BoardState::new().apply_move(Move::new(0, 0)).unwrap();
        assert_eq!(corner.fingerprint().value(), 3u16.pow(8));

        let last = BoardState::new().apply_move(Move::new(2, 2)).unwrap();
        assert_eq!(last.fingerprint().value(), 1);
    }

    #[test]
    fn test_string_form_roundtrips() {
        let state = BoardState::from_string("XO..X...O").unwrap();
        let fp = state.fingerprint();
        assert_eq!(fp.to_string(), "XO..X...O");
        assert_eq!("XO..X...O".parse::<Fingerprint>().unwrap(), fp);
        assert_eq!(fp.to_state(), state);
    }

    #[test]
    fn test_from_value_bounds() {
        assert!(Fingerprint::from_value(LAYOUT_COUNT - 1).is_ok());
        assert!(Fingerprint::from_value(LAYOUT_COUNT).is_err());
    }

    #[test]
    fn test_serde_uses_board_string() {
        let fp = BoardState::from_string("X........").unwrap().fingerprint();
        let json = serde_json::to_string(&fp).unwrap();
        assert_eq!(json, "\"X........\"");
        let back: Fingerprint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fp);
    }
}
