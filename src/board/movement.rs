use super::model::{GridView, Piece, PieceKind, Square};

impl Piece {
    /// Whether this piece may legally reach (target_row, target_col) on the
    /// given grid. Pure: inspects state, mutates nothing.
    ///
    /// Every kind shares the same preamble: an off-board piece can go
    /// nowhere, an out-of-bounds target is unreachable, and a square held by
    /// a same-colored piece is blocked.
    pub fn can_move(&self, target_row: i8, target_col: i8, grid: &GridView) -> bool {
        if !self.is_on_board() {
            return false;
        }
        if !Square::new(target_row, target_col).on_board() {
            return false;
        }
        if let Some(target) = grid.piece_at(target_row, target_col) {
            if target.color() == self.color() {
                return false;
            }
        }

        match self.kind() {
            PieceKind::Pawn => self.pawn_can_move(target_row, target_col, grid),
            PieceKind::Rook => self.rook_can_move(target_row, target_col, grid),
            PieceKind::Knight => self.knight_can_move(target_row, target_col),
            PieceKind::Bishop => self.bishop_can_move(target_row, target_col, grid),
            PieceKind::Queen => self.queen_can_move(target_row, target_col, grid),
            PieceKind::King => self.king_can_move(target_row, target_col),
        }
    }

    /// Forward one square, forward two while the double jump is open, or one
    /// forward-diagonal onto an occupied square. The double jump does not
    /// look at the square it passes over.
    fn pawn_can_move(&self, target_row: i8, target_col: i8, grid: &GridView) -> bool {
        let occupied = grid.is_occupied(target_row, target_col);
        let direction: i8 = if self.is_moving_up() { 1 } else { -1 };

        let moves_straight = !occupied
            && self.column() == target_col
            && (self.row() + direction == target_row
                || (self.can_double_jump() && self.row() + 2 * direction == target_row));

        let captures_diagonal = occupied
            && (self.column() - target_col).abs() == 1
            && self.row() + direction == target_row;

        moves_straight || captures_diagonal
    }

    /// Straight lines only. The walk covers every square from the one after
    /// the origin up to and including the target, so a rook refuses any
    /// occupied destination.
    fn rook_can_move(&self, target_row: i8, target_col: i8, grid: &GridView) -> bool {
        let row_diff = target_row - self.row();
        let col_diff = target_col - self.column();
        let stays_put = row_diff == 0 && col_diff == 0;
        let moves_straight = row_diff == 0 || col_diff == 0;
        if stays_put || !moves_straight {
            return false;
        }

        let (step_row, step_col) = (row_diff.signum(), col_diff.signum());
        let (mut row, mut col) = (self.row(), self.column());
        while (row, col) != (target_row, target_col) {
            row += step_row;
            col += step_col;
            if grid.is_occupied(row, col) {
                return false;
            }
        }
        true
    }

    fn knight_can_move(&self, target_row: i8, target_col: i8) -> bool {
        let abs_row = (target_row - self.row()).abs();
        let abs_col = (target_col - self.column()).abs();
        (abs_row == 1 && abs_col == 2) || (abs_row == 2 && abs_col == 1)
    }

    /// Pure diagonals; the walk checks the squares strictly between origin
    /// and target, so captures at the target are fine.
    fn bishop_can_move(&self, target_row: i8, target_col: i8, grid: &GridView) -> bool {
        let row_diff = target_row - self.row();
        let col_diff = target_col - self.column();
        if row_diff.abs() != col_diff.abs() || (row_diff == 0 && col_diff == 0) {
            return false;
        }
        self.path_is_clear_between(target_row, target_col, grid)
    }

    /// Rook and bishop shapes combined, with the strictly-between walk
    /// generalized to a zero-or-nonzero step on each axis.
    fn queen_can_move(&self, target_row: i8, target_col: i8, grid: &GridView) -> bool {
        let row_diff = target_row - self.row();
        let col_diff = target_col - self.column();
        let stays_put = row_diff == 0 && col_diff == 0;
        let moves_straight = row_diff == 0 || col_diff == 0;
        let moves_diagonal = row_diff.abs() == col_diff.abs();
        if stays_put || (!moves_straight && !moves_diagonal) {
            return false;
        }
        self.path_is_clear_between(target_row, target_col, grid)
    }

    fn king_can_move(&self, target_row: i8, target_col: i8) -> bool {
        let row_diff = (target_row - self.row()).abs();
        let col_diff = (target_col - self.column()).abs();
        (row_diff != 0 || col_diff != 0) && row_diff <= 1 && col_diff <= 1
    }

    /// Walks the unit steps strictly between the piece and the target,
    /// excluding both endpoints. Assumes the target lies on a straight or
    /// diagonal line from the piece.
    fn path_is_clear_between(&self, target_row: i8, target_col: i8, grid: &GridView) -> bool {
        let step_row = (target_row - self.row()).signum();
        let step_col = (target_col - self.column()).signum();
        let (mut row, mut col) = (self.row() + step_row, self.column() + step_col);
        while (row, col) != (target_row, target_col) {
            if grid.is_occupied(row, col) {
                return false;
            }
            row += step_row;
            col += step_col;
        }
        true
    }

    /// Whether this piece could castle with `other`: castle moves remaining,
    /// same color, both on the board, laterally adjacent in the same row.
    /// Advisory only; move execution never consumes it, and non-rooks always
    /// answer false because their castle counter is 0.
    pub fn can_castle(&self, other: &Piece) -> bool {
        if self.castle_moves_left() == 0 || self.color() != other.color() {
            return false;
        }
        if !self.is_on_board() || !other.is_on_board() {
            return false;
        }
        self.row() == other.row() && (self.column() - other.column()).abs() <= 1
    }
}
