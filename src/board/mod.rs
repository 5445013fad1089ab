pub mod chess_board;
pub mod colors;
pub mod model;
mod movement;

pub use chess_board::{ChessBoard, RoundAction};
pub use colors::BoardColor;
pub use model::{Grid, GridView, MoveRecord, Piece, PieceId, PieceKind, Square, BOARD_LENGTH};

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from_row: i8, from_col: i8, to_row: i8, to_col: i8) -> RoundAction {
        RoundAction::Move {
            from: Square::new(from_row, from_col),
            to: Square::new(to_row, to_col),
        }
    }

    #[test]
    fn test_opening_rounds_alternate_between_players() {
        let mut board = ChessBoard::default();

        assert!(board.attempt_round(mv(1, 4, 3, 4))); // p1 pawn double jump
        assert!(board.attempt_round(mv(6, 4, 4, 4))); // p2 pawn double jump
        assert!(board.attempt_round(mv(0, 1, 2, 2))); // p1 knight out
        assert!(board.attempt_round(mv(7, 6, 5, 5))); // p2 knight out

        assert!(board.is_player_one_turn());
        assert_eq!(board.history().len(), 4);
    }

    #[test]
    fn test_capture_and_full_unwind() {
        let mut board = ChessBoard::default();
        let initial = board.board_state();

        assert!(board.attempt_round(mv(1, 4, 3, 4)));
        assert!(board.attempt_round(mv(6, 3, 4, 3)));
        // p1 pawn takes the white pawn on the diagonal.
        assert!(board.attempt_round(mv(3, 4, 4, 3)));
        assert_eq!(board.get_cell(4, 3).unwrap().color(), "BLACK");

        // Unwind all three rounds; every placement comes back.
        assert!(board.attempt_round(RoundAction::Undo));
        assert_eq!(board.get_cell(4, 3).unwrap().color(), "WHITE");
        assert!(board.attempt_round(RoundAction::Undo));
        assert!(board.attempt_round(RoundAction::Undo));
        assert!(!board.attempt_round(RoundAction::Undo));

        assert_eq!(board.board_state(), initial);
    }

    #[test]
    fn test_rooks_never_capture_but_bishops_do() {
        let mut cells: Vec<Vec<Option<Piece>>> = vec![vec![None; 8]; 8];
        cells[0][0] = Some(Piece::new(PieceKind::Rook, "BLACK", 0, 0, false));
        cells[0][5] = Some(Piece::new(PieceKind::Pawn, "WHITE", 0, 5, false));
        cells[2][2] = Some(Piece::new(PieceKind::Bishop, "BLACK", 2, 2, false));
        cells[5][5] = Some(Piece::new(PieceKind::Pawn, "WHITE", 5, 5, false));
        let mut board = ChessBoard::from_grid(cells, true);

        assert!(!board.move_piece(0, 0, 0, 5));
        assert!(board.move_piece(2, 2, 5, 5));
    }

    #[test]
    fn test_recorded_moves_expose_the_captured_piece() {
        let mut cells: Vec<Vec<Option<Piece>>> = vec![vec![None; 8]; 8];
        cells[3][3] = Some(Piece::new(PieceKind::Queen, "BLACK", 3, 3, false));
        cells[5][5] = Some(Piece::new(PieceKind::Knight, "WHITE", 5, 5, false));
        let mut board = ChessBoard::from_grid(cells, true);

        assert!(board.attempt_round(mv(3, 3, 5, 5)));
        let record = board.history().last().copied().unwrap();
        assert_eq!(record.origin(), Square::new(3, 3));
        assert_eq!(record.target(), Square::new(5, 5));
        let captured = board.piece(record.captured_piece().unwrap()).unwrap();
        assert_eq!(captured.kind(), PieceKind::Knight);
    }
}
