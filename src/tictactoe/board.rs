//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{fingerprint::Fingerprint, game::GameOutcome, lines::LineAnalyzer, moves::Move};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
///
/// X always opens and is the maximizing side: positive evaluations and
/// rewards favour X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Whether this player maximizes the X-perspective value
    pub fn is_maximizing(self) -> bool {
        self == Player::X
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A 3x3 board.
///
/// The side to move is not stored: it is derived from the number of occupied
/// cells, so two boards with the same cells are the same state. Values are
/// `Copy` and every transition returns a new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
    empty: usize,
}

impl BoardState {
    /// Create a new empty board
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from raw cells in row-major order.
    ///
    /// No legality check is performed here; [`turn_marker`](Self::turn_marker)
    /// reports inconsistent piece counts.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        BoardState { cells }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters (`.`, `X`, `O`); whitespace
    /// is ignored so multi-line layouts parse as well.
    ///
    /// # Errors
    ///
    /// Returns error if fewer than 9 non-whitespace characters are present or
    /// any character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(BoardState { cells })
    }

    /// Raw cells in row-major order
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get the cell targeted by a move, or `None` if the move is off the board
    pub fn get(&self, mv: Move) -> Option<Cell> {
        mv.is_on_board().then(|| self.cells[mv.index()])
    }

    fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Number of moves played so far (occupied cells)
    pub fn move_count(&self) -> usize {
        9 - self.count_pieces().empty
    }

    /// Marker of the player whose turn it is.
    ///
    /// X moves on even move counts and O on odd ones.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidState`] if the piece counts cannot arise
    /// from alternating play with X opening.
    pub fn turn_marker(&self) -> Result<Player, crate::Error> {
        let count = self.count_pieces();
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidState {
                message: format!(
                    "piece counts X={}, O={} in '{}' cannot arise from alternating play",
                    count.x,
                    count.o,
                    self.fingerprint()
                ),
            })
        }
    }

    /// Place the side-to-move marker and return the resulting board
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IllegalMove`] if the move is off the board or the
    /// target cell is occupied, and [`crate::Error::InvalidState`] if this
    /// board is malformed.
    #[must_use = "apply_move returns a new board state; the original is unchanged"]
    pub fn apply_move(&self, mv: Move) -> Result<BoardState, crate::Error> {
        match self.get(mv) {
            None => {
                return Err(crate::Error::IllegalMove {
                    row: mv.row,
                    col: mv.col,
                    reason: "position is off the board",
                });
            }
            Some(Cell::X | Cell::O) => {
                return Err(crate::Error::IllegalMove {
                    row: mv.row,
                    col: mv.col,
                    reason: "position is already occupied",
                });
            }
            Some(Cell::Empty) => {}
        }

        let marker = self.turn_marker()?;
        let mut next = *self;
        next.cells[mv.index()] = marker.to_cell();
        Ok(next)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Check if a specific player has a completed line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// All cells filled and nobody won.
    ///
    /// The winning check comes first: the ninth move can complete a line.
    pub fn is_tie(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }

    /// Check if the game is over (win or tie)
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Outcome of a finished game, `None` while play continues
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(winner) = self.winner() {
            Some(GameOutcome::Win(winner))
        } else if self.is_tie() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Canonical key of this board's cells
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::from_cells(&self.cells)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for BoardState {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(moves: &[(usize, usize)]) -> BoardState {
        moves.iter().fold(BoardState::new(), |board, &(row, col)| {
            board.apply_move(Move::new(row, col)).unwrap()
        })
    }

    #[test]
    fn test_new_board() {
        let board = BoardState::new();
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.turn_marker().unwrap(), Player::X);
        assert!(board.cells().iter().all(|&c| c == Cell::Empty));
    }

    #[test]
    fn test_apply_move() {
        let board = BoardState::new();

        let next = board.apply_move(Move::new(1, 1)).unwrap();
        assert_eq!(next.get(Move::new(1, 1)), Some(Cell::X));
        assert_eq!(next.turn_marker().unwrap(), Player::O);
        // Source board is untouched
        assert_eq!(board.get(Move::new(1, 1)), Some(Cell::Empty));

        let err = next.apply_move(Move::new(1, 1)).unwrap_err();
        assert!(matches!(err, crate::Error::IllegalMove { .. }));
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_apply_move_off_board() {
        let err = BoardState::new().apply_move(Move::new(0, 3)).unwrap_err();
        assert!(matches!(err, crate::Error::IllegalMove { row: 0, col: 3, .. }));

        let err = BoardState::new().apply_move(Move::new(3, 0)).unwrap_err();
        assert!(err.to_string().contains("off the board"));
    }

    #[test]
    fn test_player_alternation() {
        let board = play(&[(0, 0)]);
        assert_eq!(board.turn_marker().unwrap(), Player::O);
        let board = board.apply_move(Move::new(0, 1)).unwrap();
        assert_eq!(board.turn_marker().unwrap(), Player::X);
        assert_eq!(board.get(Move::new(0, 1)), Some(Cell::O));
        assert_eq!(board.move_count(), 2);
    }

    #[test]
    fn test_turn_marker_rejects_malformed_counts() {
        let board = BoardState::from_string("XX.......").unwrap();
        assert!(matches!(
            board.turn_marker(),
            Err(crate::Error::InvalidState { .. })
        ));

        let board = BoardState::from_string("O........").unwrap();
        assert!(board.turn_marker().is_err());
        assert!(board.apply_move(Move::new(2, 2)).is_err());
    }

    #[test]
    fn test_win_detection_horizontal() {
        let board = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.outcome(), Some(GameOutcome::Win(Player::X)));
        assert!(!board.is_tie());
    }

    #[test]
    fn test_win_detection_vertical() {
        let board = play(&[(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 1)]);
        assert_eq!(board.winner(), Some(Player::O));
    }

    #[test]
    fn test_tie_detection() {
        // X O X
        // X O O
        // O X X
        let board = play(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (2, 0),
            (2, 1),
            (1, 2),
            (2, 2),
        ]);
        assert!(board.is_terminal());
        assert!(board.is_tie());
        assert_eq!(board.winner(), None);
        assert_eq!(board.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_full_board_with_winner_is_not_tie() {
        // X wins with the ninth move on the main diagonal
        let board = BoardState::from_string("XOX OXO OXX").unwrap();
        assert_eq!(board.move_count(), 9);
        assert_eq!(board.winner(), Some(Player::X));
        assert!(!board.is_tie());
        assert_eq!(board.outcome(), Some(GameOutcome::Win(Player::X)));
    }

    #[test]
    fn test_from_string() {
        let board = BoardState::from_string("XOX......").unwrap();
        assert_eq!(board.cells()[0], Cell::X);
        assert_eq!(board.cells()[1], Cell::O);
        assert_eq!(board.turn_marker().unwrap(), Player::O);

        assert!(matches!(
            BoardState::from_string("XO"),
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            "XOZ......".parse::<BoardState>(),
            Err(crate::Error::InvalidCellCharacter { character: 'Z', .. })
        ));
    }

    #[test]
    fn test_display() {
        let board = BoardState::from_string("XOX.O.X..").unwrap();
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
    }
}
