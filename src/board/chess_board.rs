use tracing::debug;

use super::colors::BoardColor;
use super::model::{Grid, GridView, MoveRecord, Piece, PieceId, PieceKind, Square, BOARD_LENGTH};

/// Back rank layout used by the standard setup, left to right.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// One player action inside a round: move a piece or revert the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundAction {
    Move { from: Square, to: Square },
    Undo,
}

/// An 8x8 chess board.
///
/// The board owns every piece ever placed on it through the `pieces` arena;
/// grid cells and move records refer to pieces by arena index. A captured
/// piece leaves the grid but stays in the arena so undo can bring it back.
#[derive(Debug, Clone)]
pub struct ChessBoard {
    grid: Grid,
    pieces: Vec<Piece>,
    player_one_turn: bool,
    p1_color: BoardColor,
    p2_color: BoardColor,
    past_moves: Vec<MoveRecord>,
}

impl ChessBoard {
    /// Creates a board with the standard setup. Player one holds rows 0-1,
    /// player two rows 6-7, and player one moves first.
    ///
    /// The color names must come from the allowed set; an unknown name or a
    /// duplicated pair silently falls back to BLACK / WHITE.
    pub fn new(p1_color: &str, p2_color: &str) -> Self {
        let (p1_color, p2_color) =
            match (BoardColor::from_name(p1_color), BoardColor::from_name(p2_color)) {
                (Some(one), Some(two)) if one != two => (one, two),
                _ => (BoardColor::Black, BoardColor::White),
            };

        let mut board = Self {
            grid: [[None; BOARD_LENGTH as usize]; BOARD_LENGTH as usize],
            pieces: Vec::with_capacity(32),
            player_one_turn: true,
            p1_color,
            p2_color,
            past_moves: Vec::new(),
        };
        board.place_standard_setup();
        board
    }

    /// Adopts a pre-built placement. Each piece is trusted to carry the
    /// coordinates of the cell it sits in. Player colors default to
    /// BLACK / WHITE.
    pub fn from_grid(cells: Vec<Vec<Option<Piece>>>, player_one_turn: bool) -> Self {
        let mut board = Self {
            grid: [[None; BOARD_LENGTH as usize]; BOARD_LENGTH as usize],
            pieces: Vec::new(),
            player_one_turn,
            p1_color: BoardColor::Black,
            p2_color: BoardColor::White,
            past_moves: Vec::new(),
        };
        for (row, rank) in cells.into_iter().take(BOARD_LENGTH as usize).enumerate() {
            for (col, cell) in rank.into_iter().take(BOARD_LENGTH as usize).enumerate() {
                if let Some(piece) = cell {
                    let id = board.pieces.len();
                    board.pieces.push(piece);
                    board.grid[row][col] = Some(id);
                }
            }
        }
        board
    }

    fn place_standard_setup(&mut self) {
        let p1_name = self.p1_color.name();
        let p2_name = self.p2_color.name();
        for col in 0..BOARD_LENGTH {
            // Pawns on the inner ranks; only player one's pawns move up.
            self.place_piece(Piece::new(PieceKind::Pawn, p1_name, 1, col, true));
            self.place_piece(Piece::new(PieceKind::Pawn, p2_name, 6, col, false));

            let kind = BACK_RANK[col as usize];
            self.place_piece(Piece::new(kind, p1_name, 0, col, false));
            self.place_piece(Piece::new(kind, p2_name, 7, col, false));
        }
    }

    fn place_piece(&mut self, piece: Piece) -> PieceId {
        let id = self.pieces.len();
        let (row, col) = (piece.row(), piece.column());
        self.pieces.push(piece);
        if Square::new(row, col).on_board() {
            self.grid[row as usize][col as usize] = Some(id);
        }
        id
    }

    /// Moves the piece at (row, col) to (new_row, new_col) if the rules
    /// allow it. Turn alternation and history recording are the round's
    /// responsibility, not this method's.
    ///
    /// A move is possible when the origin is a valid square holding a piece
    /// of the color whose turn it is, the piece can legally reach the
    /// target, and the target does not hold a King. A rejected move leaves
    /// the board untouched and returns false.
    pub fn move_piece(&mut self, row: i8, col: i8, new_row: i8, new_col: i8) -> bool {
        if !Square::new(row, col).on_board() {
            return false;
        }
        let moving_id = match self.grid[row as usize][col as usize] {
            Some(id) => id,
            None => return false,
        };

        let color_in_play = if self.player_one_turn {
            self.p1_color
        } else {
            self.p2_color
        };
        if self.pieces[moving_id].color() != color_in_play.name() {
            return false;
        }

        let view = GridView::new(&self.grid, &self.pieces);
        if !self.pieces[moving_id].can_move(new_row, new_col, &view) {
            return false;
        }

        // Kings are never capturable under this rule set.
        if let Some(captured) = view.piece_at(new_row, new_col) {
            if captured.kind() == PieceKind::King {
                return false;
            }
        }

        // can_move validated the target bounds, so the casts are safe.
        self.grid[new_row as usize][new_col as usize] = Some(moving_id);
        self.grid[row as usize][col as usize] = None;

        let piece = &mut self.pieces[moving_id];
        piece.set_row(new_row);
        piece.set_column(new_col);
        piece.flag_moved();

        debug!(
            "moved {} {} from ({}, {}) to ({}, {})",
            color_in_play.name(),
            piece.kind().name(),
            row,
            col,
            new_row,
            new_col
        );
        true
    }

    /// Reverts the most recent recorded move: the moved piece returns to its
    /// origin square and a captured piece, if any, reappears at the
    /// destination. The moved-flag and castle counters stay as they are.
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let record = match self.past_moves.pop() {
            Some(record) => record,
            None => return false,
        };

        let from = record.origin();
        let to = record.target();

        self.grid[from.row as usize][from.col as usize] = Some(record.moved_piece());
        self.grid[to.row as usize][to.col as usize] = record.captured_piece();

        if let Some(piece) = self.pieces.get_mut(record.moved_piece()) {
            piece.set_row(from.row);
            piece.set_column(from.col);
        }
        if let Some(id) = record.captured_piece() {
            if let Some(piece) = self.pieces.get_mut(id) {
                piece.set_row(to.row);
                piece.set_column(to.col);
            }
        }

        debug!(
            "undid move ({}, {}) -> ({}, {})",
            from.row, from.col, to.row, to.col
        );
        true
    }

    /// Executes one round of play. A move action records history from the
    /// pre-move snapshot; either action toggles the turn when it succeeds.
    /// A failed round changes nothing.
    pub fn attempt_round(&mut self, action: RoundAction) -> bool {
        let completed = match action {
            RoundAction::Undo => self.undo(),
            RoundAction::Move { from, to } => {
                // Read both occupants before the grid mutates; the captured
                // piece is gone from the grid afterwards.
                let moved = self.cell_id(from.row, from.col);
                let captured = self.cell_id(to.row, to.col);
                if self.move_piece(from.row, from.col, to.row, to.col) {
                    if let Some(moved) = moved {
                        self.past_moves.push(MoveRecord::new(from, to, moved, captured));
                    }
                    true
                } else {
                    false
                }
            }
        };

        if completed {
            self.player_one_turn = !self.player_one_turn;
        }
        completed
    }

    fn cell_id(&self, row: i8, col: i8) -> Option<PieceId> {
        if !Square::new(row, col).on_board() {
            return None;
        }
        self.grid[row as usize][col as usize]
    }

    /// The piece (if any) at (row, col). Out-of-range coordinates yield
    /// None.
    pub fn get_cell(&self, row: i8, col: i8) -> Option<&Piece> {
        self.cell_id(row, col).and_then(|id| self.pieces.get(id))
    }

    /// Snapshot of the grid as arena indices.
    pub fn board_state(&self) -> Grid {
        self.grid
    }

    /// Arena lookup; captured pieces remain reachable here.
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    /// Every piece ever placed on this board, captured ones included.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn view(&self) -> GridView<'_> {
        GridView::new(&self.grid, &self.pieces)
    }

    pub fn is_player_one_turn(&self) -> bool {
        self.player_one_turn
    }

    pub fn player_colors(&self) -> (BoardColor, BoardColor) {
        (self.p1_color, self.p2_color)
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.past_moves
    }

    /// Renders the board with row/column labels. Pieces show as their type
    /// initial painted in their owner's color; empty cells show as `*`. A
    /// piece whose color label is outside the closed color set renders
    /// unpainted.
    pub fn render_to_string(&self) -> String {
        let mut out = String::new();
        for row in (0..BOARD_LENGTH).rev() {
            out.push_str(&format!("{} | ", row));
            for col in 0..BOARD_LENGTH {
                match self.get_cell(row, col) {
                    None => out.push('*'),
                    Some(piece) => {
                        let symbol = piece.kind().symbol().to_string();
                        match BoardColor::from_name(piece.color()) {
                            Some(color) => out.push_str(&color.paint(&symbol)),
                            None => out.push_str(&symbol),
                        }
                    }
                }
                out.push(' ');
            }
            out.push('\n');
        }
        out.push_str("    ");
        out.push_str(&"-".repeat(15));
        out.push('\n');
        out.push_str("    ");
        for col in 0..BOARD_LENGTH {
            out.push_str(&format!("{} ", col));
        }
        out.push('\n');
        out
    }

    pub fn display(&self) {
        print!("{}", self.render_to_string());
    }
}

impl Default for ChessBoard {
    fn default() -> Self {
        Self::new("BLACK", "WHITE")
    }
}
