use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_LENGTH: i8 = 8;

/// Sentinel coordinate for a piece that is not currently placed.
pub const OFF_BOARD: i8 = -1;

/// Index of a piece inside the board's arena. Grid cells and move records
/// hold these instead of owning the piece itself.
pub type PieceId = usize;

/// The 8x8 grid of piece slots. Each cell holds at most one arena index.
pub type Grid = [[Option<PieceId>; BOARD_LENGTH as usize]; BOARD_LENGTH as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    pub fn on_board(&self) -> bool {
        (0..BOARD_LENGTH).contains(&self.row) && (0..BOARD_LENGTH).contains(&self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Uppercase label matching the variant identity.
    pub fn name(&self) -> &'static str {
        match self {
            PieceKind::Pawn => "PAWN",
            PieceKind::Rook => "ROOK",
            PieceKind::Knight => "KNIGHT",
            PieceKind::Bishop => "BISHOP",
            PieceKind::Queen => "QUEEN",
            PieceKind::King => "KING",
        }
    }

    /// Fixed size tag per type, used only for display and identity.
    pub fn size(&self) -> u8 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Rook => 2,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 4,
        }
    }

    /// One-letter board symbol. Knight renders as 'N' to disambiguate
    /// from King.
    pub fn symbol(&self) -> char {
        match self {
            PieceKind::Knight => 'N',
            other => other.name().chars().next().unwrap_or('?'),
        }
    }
}

/// A chess piece: identity, position, direction flag and movement latches.
///
/// The row/column pair is either fully on the board or fully the (-1, -1)
/// sentinel, never mixed. The setters maintain that invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    color: String,
    row: i8,
    col: i8,
    moving_up: bool,
    kind: PieceKind,
    has_moved: bool,
    castle_moves_left: u8,
}

impl Piece {
    /// Builds a piece of the given kind. An invalid color string falls back
    /// to "BLACK"; out-of-range coordinates place the piece off the board.
    /// Rooks start with 3 castle moves, every other kind with 0.
    pub fn new(kind: PieceKind, color: &str, row: i8, col: i8, moving_up: bool) -> Self {
        let castle_moves = if kind == PieceKind::Rook { 3 } else { 0 };
        Self::with_castle_moves(kind, color, row, col, moving_up, castle_moves)
    }

    /// Builds a rook with an explicit castle-move capacity. Negative
    /// capacities clamp to 0.
    pub fn rook(color: &str, row: i8, col: i8, moving_up: bool, castle_moves: i32) -> Self {
        Self::with_castle_moves(PieceKind::Rook, color, row, col, moving_up, castle_moves)
    }

    fn with_castle_moves(
        kind: PieceKind,
        color: &str,
        row: i8,
        col: i8,
        moving_up: bool,
        castle_moves: i32,
    ) -> Self {
        let mut piece = Self {
            color: String::from("BLACK"),
            row: OFF_BOARD,
            col: OFF_BOARD,
            moving_up,
            kind,
            has_moved: false,
            castle_moves_left: castle_moves.clamp(0, u8::MAX as i32) as u8,
        };
        piece.set_color(color);
        piece.set_row(row);
        if piece.row != OFF_BOARD {
            piece.set_column(col);
        }
        piece
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Recolors the piece. Only purely alphabetic input is accepted; it is
    /// stored uppercased. Anything else is a no-op that returns false.
    pub fn set_color(&mut self, color: &str) -> bool {
        if !color.chars().all(|c| c.is_ascii_alphabetic()) {
            return false;
        }
        self.color = color.to_ascii_uppercase();
        true
    }

    pub fn row(&self) -> i8 {
        self.row
    }

    /// Moving the row out of [0, BOARD_LENGTH) takes the piece off the
    /// board: BOTH coordinates become -1.
    pub fn set_row(&mut self, row: i8) {
        if !(0..BOARD_LENGTH).contains(&row) {
            self.row = OFF_BOARD;
            self.col = OFF_BOARD;
            return;
        }
        self.row = row;
    }

    pub fn column(&self) -> i8 {
        self.col
    }

    /// Same cross-field rule as `set_row`.
    pub fn set_column(&mut self, col: i8) {
        if !(0..BOARD_LENGTH).contains(&col) {
            self.row = OFF_BOARD;
            self.col = OFF_BOARD;
            return;
        }
        self.col = col;
    }

    pub fn is_on_board(&self) -> bool {
        self.row != OFF_BOARD && self.col != OFF_BOARD
    }

    pub fn is_moving_up(&self) -> bool {
        self.moving_up
    }

    pub fn set_moving_up(&mut self, flag: bool) {
        self.moving_up = flag;
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn size(&self) -> u8 {
        self.kind.size()
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// One-way latch, set on the first executed move and never reset.
    pub fn flag_moved(&mut self) {
        self.has_moved = true;
    }

    /// A pawn may open with a two-square jump exactly until its first move.
    pub fn can_double_jump(&self) -> bool {
        !self.has_moved
    }

    /// True once a pawn has reached the farthest rank in its travel
    /// direction. Advisory only; promotion is not applied by this engine.
    pub fn can_promote(&self) -> bool {
        (self.moving_up && self.row == BOARD_LENGTH - 1) || (!self.moving_up && self.row == 0)
    }

    /// Remaining castle moves. Always 0 for non-rooks; tracked but never
    /// consumed by move execution.
    pub fn castle_moves_left(&self) -> u8 {
        self.castle_moves_left
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "{} piece is not on the board", self.color);
        }
        write!(
            f,
            "{} piece at ({}, {}) is moving {}",
            self.color,
            self.row,
            self.col,
            if self.moving_up { "UP" } else { "DOWN" }
        )
    }
}

/// Read-only occupancy view handed to the legality predicates, so they can
/// inspect the grid without borrowing the whole board.
#[derive(Clone, Copy)]
pub struct GridView<'a> {
    grid: &'a Grid,
    pieces: &'a [Piece],
}

impl<'a> GridView<'a> {
    pub fn new(grid: &'a Grid, pieces: &'a [Piece]) -> Self {
        Self { grid, pieces }
    }

    pub fn piece_at(&self, row: i8, col: i8) -> Option<&'a Piece> {
        if !Square::new(row, col).on_board() {
            return None;
        }
        self.grid[row as usize][col as usize].and_then(|id| self.pieces.get(id))
    }

    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        self.piece_at(row, col).is_some()
    }
}

/// Immutable record of a single executed move, kept for undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    from: Square,
    to: Square,
    moved: PieceId,
    captured: Option<PieceId>,
}

impl MoveRecord {
    pub fn new(from: Square, to: Square, moved: PieceId, captured: Option<PieceId>) -> Self {
        Self {
            from,
            to,
            moved,
            captured,
        }
    }

    pub fn origin(&self) -> Square {
        self.from
    }

    pub fn target(&self) -> Square {
        self.to
    }

    pub fn moved_piece(&self) -> PieceId {
        self.moved
    }

    pub fn captured_piece(&self) -> Option<PieceId> {
        self.captured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels_match_variants() {
        let expected = [
            (PieceKind::Pawn, "PAWN", 1, 'P'),
            (PieceKind::Rook, "ROOK", 2, 'R'),
            (PieceKind::Knight, "KNIGHT", 3, 'N'),
            (PieceKind::Bishop, "BISHOP", 3, 'B'),
            (PieceKind::Queen, "QUEEN", 4, 'Q'),
            (PieceKind::King, "KING", 4, 'K'),
        ];
        for (kind, name, size, symbol) in expected {
            assert_eq!(kind.name(), name);
            assert_eq!(kind.size(), size);
            assert_eq!(kind.symbol(), symbol);
        }
    }

    #[test]
    fn test_construction_normalizes_color() {
        let piece = Piece::new(PieceKind::Bishop, "cyan", 2, 3, false);
        assert_eq!(piece.color(), "CYAN");

        // Non-alphabetic input keeps the default.
        let piece = Piece::new(PieceKind::Bishop, "bl4ck", 2, 3, false);
        assert_eq!(piece.color(), "BLACK");
    }

    #[test]
    fn test_construction_with_bad_coordinates_goes_off_board() {
        let piece = Piece::new(PieceKind::Rook, "WHITE", -3, 4, false);
        assert_eq!((piece.row(), piece.column()), (OFF_BOARD, OFF_BOARD));

        let piece = Piece::new(PieceKind::Rook, "WHITE", 4, 8, false);
        assert_eq!((piece.row(), piece.column()), (OFF_BOARD, OFF_BOARD));

        let piece = Piece::new(PieceKind::Rook, "WHITE", 4, 5, false);
        assert_eq!((piece.row(), piece.column()), (4, 5));
        assert!(piece.is_on_board());
    }

    #[test]
    fn test_setters_keep_coordinates_paired() {
        let mut piece = Piece::new(PieceKind::Queen, "WHITE", 4, 5, false);
        piece.set_row(9);
        assert_eq!((piece.row(), piece.column()), (OFF_BOARD, OFF_BOARD));

        let mut piece = Piece::new(PieceKind::Queen, "WHITE", 4, 5, false);
        piece.set_column(-1);
        assert_eq!((piece.row(), piece.column()), (OFF_BOARD, OFF_BOARD));

        let mut piece = Piece::new(PieceKind::Queen, "WHITE", 4, 5, false);
        piece.set_row(0);
        piece.set_column(7);
        assert_eq!((piece.row(), piece.column()), (0, 7));
    }

    #[test]
    fn test_set_color_rejects_non_alphabetic() {
        let mut piece = Piece::new(PieceKind::Pawn, "WHITE", 1, 1, true);
        assert!(!piece.set_color("GR33N"));
        assert_eq!(piece.color(), "WHITE");
        assert!(!piece.set_color("RED!"));
        assert_eq!(piece.color(), "WHITE");
        assert!(piece.set_color("purple"));
        assert_eq!(piece.color(), "PURPLE");
    }

    #[test]
    fn test_moved_flag_is_a_one_way_latch() {
        let mut piece = Piece::new(PieceKind::Pawn, "WHITE", 1, 1, true);
        assert!(!piece.has_moved());
        assert!(piece.can_double_jump());
        piece.flag_moved();
        assert!(piece.has_moved());
        assert!(!piece.can_double_jump());
    }

    #[test]
    fn test_rook_castle_capacity() {
        assert_eq!(Piece::new(PieceKind::Rook, "WHITE", 0, 0, false).castle_moves_left(), 3);
        assert_eq!(Piece::new(PieceKind::Pawn, "WHITE", 1, 0, true).castle_moves_left(), 0);
        assert_eq!(Piece::rook("WHITE", 0, 0, false, -5).castle_moves_left(), 0);
        assert_eq!(Piece::rook("WHITE", 0, 0, false, 1).castle_moves_left(), 1);
    }

    #[test]
    fn test_promotion_rank_depends_on_direction() {
        assert!(Piece::new(PieceKind::Pawn, "WHITE", 7, 2, true).can_promote());
        assert!(!Piece::new(PieceKind::Pawn, "WHITE", 6, 2, true).can_promote());
        assert!(Piece::new(PieceKind::Pawn, "BLACK", 0, 2, false).can_promote());
        assert!(!Piece::new(PieceKind::Pawn, "BLACK", 1, 2, false).can_promote());
    }

    #[test]
    fn test_display_formats() {
        let piece = Piece::new(PieceKind::Knight, "RED", 3, 4, true);
        assert_eq!(piece.to_string(), "RED piece at (3, 4) is moving UP");

        let piece = Piece::new(PieceKind::Knight, "RED", 3, 4, false);
        assert_eq!(piece.to_string(), "RED piece at (3, 4) is moving DOWN");

        let piece = Piece::new(PieceKind::Knight, "RED", -1, -1, false);
        assert_eq!(piece.to_string(), "RED piece is not on the board");
    }

    #[test]
    fn test_move_record_accessors() {
        let record = MoveRecord::new(Square::new(1, 0), Square::new(3, 0), 4, Some(17));
        assert_eq!(record.origin(), Square::new(1, 0));
        assert_eq!(record.target(), Square::new(3, 0));
        assert_eq!(record.moved_piece(), 4);
        assert_eq!(record.captured_piece(), Some(17));
    }
}
