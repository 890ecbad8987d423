//! Board-to-tensor encoding for neural network evaluation.
//!
//! A position is encoded as a 14x8x8 tensor of 0/1 values:
//! - Planes 0-5: White piece presence (pawn, knight, bishop, rook, queen,
//!   king — the order of `Piece::to_index()`)
//! - Planes 6-11: Black piece presence, same order
//! - Plane 12: legal-move destination squares for White, computed as if it
//!   were White's turn
//! - Plane 13: same for Black
//!
//! Rows run from rank 8 (row 0) down to rank 1 (row 7); columns from file
//! a (col 0) to file h (col 7). This matches the layout the evaluation
//! model was trained on.

use chess::{BitBoard, Board, BoardBuilder, Color, MoveGen, Piece, Square, ALL_PIECES};
use ndarray::{Array3, Array4, ArrayView2, Axis};

/// Number of planes in the encoded tensor.
pub const NUM_PLANES: usize = 14;

/// Plane index for White's legal-move destinations.
pub const WHITE_MOBILITY_PLANE: usize = 12;

/// Plane index for Black's legal-move destinations.
pub const BLACK_MOBILITY_PLANE: usize = 13;

/// A position encoded for the evaluation model.
///
/// Wraps a `(14, 8, 8)` array of 0/1 values. Construct with [`encode`].
#[derive(Debug, Clone, PartialEq)]
pub struct PositionTensor {
    planes: Array3<f32>,
}

impl PositionTensor {
    fn zeros() -> Self {
        Self {
            planes: Array3::zeros((NUM_PLANES, 8, 8)),
        }
    }

    /// View of a single plane as an 8x8 array.
    pub fn plane(&self, index: usize) -> ArrayView2<'_, f32> {
        self.planes.index_axis(Axis(0), index)
    }

    /// The raw `(14, 8, 8)` planes.
    pub fn planes(&self) -> &Array3<f32> {
        &self.planes
    }

    /// Sum of the twelve piece planes. For a valid encoding this equals
    /// the number of pieces on the board.
    pub fn piece_count(&self) -> f32 {
        self.planes.slice(ndarray::s![..12, .., ..]).sum()
    }

    /// Convert to the channels-last `(1, 8, 8, 14)` input the ONNX model
    /// expects (batch of one).
    pub fn to_input(&self) -> Array4<f32> {
        let channels_last = self.planes.view().permuted_axes([1, 2, 0]);
        channels_last
            .as_standard_layout()
            .to_owned()
            .insert_axis(Axis(0))
    }

    fn mark(&mut self, plane: usize, square: Square) {
        let (row, col) = square_to_coords(square);
        self.planes[[plane, row, col]] = 1.0;
    }
}

/// Map a square to its (row, col) position in the tensor.
///
/// Rank 8 maps to row 0 and rank 1 to row 7; file a maps to col 0.
pub fn square_to_coords(square: Square) -> (usize, usize) {
    let row = 7 - square.get_rank().to_index();
    let col = square.get_file().to_index();
    (row, col)
}

/// Plane index for a piece of the given color.
pub fn piece_plane(piece: Piece, color: Color) -> usize {
    match color {
        Color::White => piece.to_index(),
        Color::Black => piece.to_index() + 6,
    }
}

/// Encode a position into a [`PositionTensor`].
///
/// The mobility planes are computed on independent copies of the board
/// with the turn forced to each side in turn, so encoding never mutates
/// (or observes the mutation of) the caller's `Board`.
pub fn encode(board: &Board) -> PositionTensor {
    let mut tensor = PositionTensor::zeros();

    for piece in ALL_PIECES {
        for color in [Color::White, Color::Black] {
            let plane = piece_plane(piece, color);
            let squares: BitBoard = *board.pieces(piece) & *board.color_combined(color);
            for square in squares {
                tensor.mark(plane, square);
            }
        }
    }

    mark_mobility(board, Color::White, WHITE_MOBILITY_PLANE, &mut tensor);
    mark_mobility(board, Color::Black, BLACK_MOBILITY_PLANE, &mut tensor);

    tensor
}

/// Mark every legal destination square for `color`, as if it were that
/// side's turn.
fn mark_mobility(board: &Board, color: Color, plane: usize, tensor: &mut PositionTensor) {
    let for_color = if board.side_to_move() == color {
        *board
    } else {
        match with_side_to_move(board, color) {
            Some(flipped) => flipped,
            // A side currently giving check cannot be put on move; its
            // mobility plane stays empty.
            None => return,
        }
    };

    for mv in MoveGen::new_legal(&for_color) {
        tensor.mark(plane, mv.get_dest());
    }
}

/// Build an independent copy of `board` with the turn forced to `color`.
///
/// Returns `None` when the resulting position is not a valid board (the
/// side being taken off move is in check). The en-passant square belongs
/// to the side originally on move and is cleared.
fn with_side_to_move(board: &Board, color: Color) -> Option<Board> {
    let mut builder = BoardBuilder::from(board);
    builder.side_to_move(color);
    builder.en_passant(None);
    Board::try_from(builder).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::{File, Rank};
    use std::str::FromStr;

    fn board(fen: &str) -> Board {
        Board::from_str(fen).expect("valid FEN")
    }

    #[test]
    fn test_square_to_coords() {
        // a8 is the top-left corner of the tensor
        assert_eq!(
            square_to_coords(Square::make_square(Rank::Eighth, File::A)),
            (0, 0)
        );
        // h1 is the bottom-right corner
        assert_eq!(
            square_to_coords(Square::make_square(Rank::First, File::H)),
            (7, 7)
        );
        assert_eq!(
            square_to_coords(Square::make_square(Rank::Fourth, File::E)),
            (4, 4)
        );
    }

    #[test]
    fn test_startpos_piece_planes() {
        let tensor = encode(&Board::default());

        // White pawns fill rank 2 (row 6)
        let white_pawns = tensor.plane(piece_plane(Piece::Pawn, Color::White));
        for col in 0..8 {
            assert_eq!(white_pawns[[6, col]], 1.0, "white pawn at col {}", col);
        }
        assert_eq!(white_pawns.sum(), 8.0);

        // Black pawns fill rank 7 (row 1)
        let black_pawns = tensor.plane(piece_plane(Piece::Pawn, Color::Black));
        assert_eq!(black_pawns.sum(), 8.0);
        assert_eq!(black_pawns[[1, 3]], 1.0);

        // Kings on e1 / e8
        assert_eq!(tensor.plane(piece_plane(Piece::King, Color::White))[[7, 4]], 1.0);
        assert_eq!(tensor.plane(piece_plane(Piece::King, Color::Black))[[0, 4]], 1.0);
    }

    #[test]
    fn test_piece_count_matches_board() {
        assert_eq!(encode(&Board::default()).piece_count(), 32.0);

        // Midgame position from an Italian game
        let b = board("r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQ1RK1 b kq - 5 4");
        let tensor = encode(&b);
        assert_eq!(tensor.piece_count(), b.combined().popcnt() as f32);
    }

    #[test]
    fn test_startpos_mobility_planes() {
        let tensor = encode(&Board::default());

        // 20 legal moves land on 16 distinct squares (ranks 3 and 4; the
        // four knight destinations overlap single pawn pushes)
        assert_eq!(tensor.plane(WHITE_MOBILITY_PLANE).sum(), 16.0);
        assert_eq!(tensor.plane(BLACK_MOBILITY_PLANE).sum(), 16.0);

        // White can reach e4 (row 4, col 4) but not e5
        assert_eq!(tensor.plane(WHITE_MOBILITY_PLANE)[[4, 4]], 1.0);
        assert_eq!(tensor.plane(WHITE_MOBILITY_PLANE)[[3, 4]], 0.0);
    }

    #[test]
    fn test_mobility_independent_of_side_to_move() {
        // The same piece placement with either side to move must produce
        // identical mobility planes.
        let white_to_move = board("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let black_to_move = board("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1");

        let a = encode(&white_to_move);
        let b = encode(&black_to_move);
        assert_eq!(a.plane(WHITE_MOBILITY_PLANE), b.plane(WHITE_MOBILITY_PLANE));
        assert_eq!(a.plane(BLACK_MOBILITY_PLANE), b.plane(BLACK_MOBILITY_PLANE));
    }

    #[test]
    fn test_encode_does_not_mutate_board() {
        let b = board("r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQ1RK1 b kq - 5 4");
        let before = b;
        let _ = encode(&b);
        assert_eq!(b, before);
    }

    #[test]
    fn test_checkmate_mobility_planes_empty() {
        // Fool's mate: White is checkmated. White has no legal moves, and
        // Black (giving check) cannot be put on move, so both planes are
        // empty.
        let b = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        let tensor = encode(&b);
        assert_eq!(tensor.plane(WHITE_MOBILITY_PLANE).sum(), 0.0);
        assert_eq!(tensor.plane(BLACK_MOBILITY_PLANE).sum(), 0.0);
    }

    #[test]
    fn test_to_input_shape_and_layout() {
        let tensor = encode(&Board::default());
        let input = tensor.to_input();
        assert_eq!(input.shape(), &[1, 8, 8, 14]);

        // White king plane (channel 5) at e1 = (row 7, col 4)
        assert_eq!(input[[0, 7, 4, piece_plane(Piece::King, Color::White)]], 1.0);
        // Same cell in the NCHW view
        assert_eq!(tensor.planes()[[piece_plane(Piece::King, Color::White), 7, 4]], 1.0);
    }
}
