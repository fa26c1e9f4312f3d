//! Recursive backtracking placement search.
//!
//! The solver consumes pieces from the back of the list, tries every board
//! anchor for the current piece, and recurses. Board state is rolled back
//! with a checkpoint on every failed branch; the piece list is rolled back
//! by pushing the piece again before returning to the caller. Each level
//! also explores leaving the current piece unused (the puzzle ships more
//! piece cells than board cells, so a full cover cannot use every piece).

use crate::shape::Shape;

/// Arranges `pieces` so the search tries the hardest pieces first.
///
/// Pieces are consumed from the back of the list, so an ascending stable
/// sort by bounding-box size puts the widest piece in the first position
/// popped. Placing bulky pieces early prunes the search tree; ordering has
/// no effect on whether a solution exists.
pub fn order_for_search(pieces: &mut [Shape]) {
    pieces.sort_by_key(|piece| piece.width().max(piece.height()));
}

/// Tries to cover `board` completely with pieces drawn from `pieces`.
///
/// Returns true once the board is full, leaving the board solved and the
/// consumed pieces removed from the list. Returns false after exhausting
/// every branch, with the piece list restored to its input composition and
/// the board left in its last-tried state (callers restore; the outermost
/// caller simply discards it). `steps` counts successful draws across the
/// whole search and is never decremented.
pub fn solve(board: &mut Shape, pieces: &mut Vec<Shape>, steps: &mut u64) -> bool {
    if board.full() {
        return true;
    }

    let Some(piece) = pieces.pop() else {
        return false;
    };
    let saved = board.checkpoint();

    for y in 0..=board.height() - piece.height() {
        for x in 0..=board.width() - piece.width() {
            if board.fits(&piece, x, y) {
                board.draw(&piece, x, y);
                *steps += 1;
                if solve(board, pieces, steps) {
                    return true;
                }
                board.restore(&saved);
            }
        }
    }

    // no placement worked out; maybe the cover does not need this piece
    let solved = solve(board, pieces, steps);
    pieces.push(piece);
    solved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_board() -> Shape {
        Shape::new(1, vec![(0, 0)])
    }

    #[test]
    fn test_single_cell_cover() {
        let mut board = unit_board();
        let mut pieces = vec![Shape::new(2, vec![(0, 0)])];
        let mut steps = 0;

        assert!(solve(&mut board, &mut pieces, &mut steps));
        assert_eq!(steps, 1);
        assert_eq!(board.get(0, 0), 2);
        assert!(pieces.is_empty());
    }

    #[test]
    fn test_oversized_piece_fails_without_drawing() {
        let mut board = unit_board();
        let pristine = board.clone();
        let mut pieces = vec![Shape::new(2, vec![(0, 0), (1, 0)])];
        let mut steps = 0;

        assert!(!solve(&mut board, &mut pieces, &mut steps));
        assert_eq!(steps, 0);
        // never drawn, so the board still reads its own color everywhere
        assert_eq!(board, pristine);
        // the piece is handed back to the caller
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].color(), 2);
    }

    #[test]
    fn test_skip_branch_leaves_piece_unused() {
        // the dot is popped first and blocks the domino wherever it lands;
        // only the skip branch (domino alone) covers the board
        let mut board = Shape::new(1, vec![(0, 0), (0, 1)]);
        let domino = Shape::new(3, vec![(0, 0), (0, 1)]);
        let dot = Shape::new(2, vec![(0, 0)]);
        let mut pieces = vec![domino, dot];
        let mut steps = 0;

        assert!(solve(&mut board, &mut pieces, &mut steps));
        // two dead-end dot placements plus the winning domino draw
        assert_eq!(steps, 3);
        assert_eq!(board.get(0, 0), 3);
        assert_eq!(board.get(0, 1), 3);
        // the skipped dot is pushed back for the caller
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces[0].color(), 2);
    }

    #[test]
    fn test_full_board_needs_no_pieces() {
        let mut board = unit_board();
        board.set(0, 0, 7);
        let mut pieces = Vec::new();
        let mut steps = 0;

        assert!(solve(&mut board, &mut pieces, &mut steps));
        assert_eq!(steps, 0);
    }

    #[test]
    fn test_empty_piece_list_fails() {
        let mut board = unit_board();
        let mut pieces = Vec::new();
        let mut steps = 0;

        assert!(!solve(&mut board, &mut pieces, &mut steps));
        assert_eq!(steps, 0);
    }

    #[test]
    fn test_ordering_puts_largest_at_the_back() {
        let mut pieces = vec![
            Shape::new(2, vec![(0, 0), (1, 0), (2, 0)]),
            Shape::new(3, vec![(0, 0)]),
            Shape::new(4, vec![(0, 0), (0, 1)]),
        ];
        order_for_search(&mut pieces);

        let order: Vec<_> = pieces.iter().map(Shape::color).collect();
        assert_eq!(order, vec![3, 4, 2]);
    }

    #[test]
    fn test_ordering_is_stable_among_ties() {
        let mut pieces = vec![
            Shape::new(2, vec![(0, 0), (1, 0)]),
            Shape::new(3, vec![(0, 0), (0, 1)]),
            Shape::new(4, vec![(0, 0)]),
        ];
        order_for_search(&mut pieces);

        let order: Vec<_> = pieces.iter().map(Shape::color).collect();
        assert_eq!(order, vec![4, 2, 3]);
    }

    #[test]
    fn test_search_is_deterministic() {
        let run = || {
            let mut board = Shape::new(1, vec![(0, 0), (1, 0), (0, 1), (1, 1)]);
            let mut pieces = vec![
                Shape::new(2, vec![(0, 0), (0, 1)]),
                Shape::new(3, vec![(0, 0), (0, 1)]),
            ];
            order_for_search(&mut pieces);
            let mut steps = 0;
            let solved = solve(&mut board, &mut pieces, &mut steps);
            (solved, steps, board)
        };

        let first = run();
        let second = run();
        assert_eq!(first, second);
        assert!(first.0);
    }
}
