//! Concrete positions with known best moves and scores

use perfect_play::{
    Pruning, SearchEngine,
    search::{SearchResult, best_move, best_move_alpha_beta},
    tictactoe::{Board, Player},
};

mod scenarios {
    use super::*;

    #[test]
    fn blocks_diagonal_threat() {
        // X . .
        // . O .
        // . . X
        let mut board = Board::from_string("X../.O./..X").unwrap();
        let result = best_move(&mut board, Player::O, Player::O);

        assert!(result.score() >= 0, "O can hold the draw: {result:?}");
        assert_eq!(result.score(), 0);
        let position = result.position().expect("non-terminal position has a move");
        assert!(
            [1, 3, 5, 7].contains(&position),
            "taking a corner lets X fork, got {position}"
        );
    }

    #[test]
    fn completes_own_row() {
        // X X .
        // O O .
        // . . .
        let mut board = Board::from_string("XX./OO./...").unwrap();
        let empty_before = board.num_empty_squares() as i32;
        let result = best_move(&mut board, Player::O, Player::O);

        assert_eq!(result.position(), Some(5));
        assert_eq!(result.score(), empty_before);
    }

    #[test]
    fn full_board_without_winner() {
        let mut board = Board::from_string("XOX/XOO/OXX").unwrap();
        let result = best_move(&mut board, Player::X, Player::X);
        assert_eq!(result, SearchResult::terminal(0));
    }

    #[test]
    fn empty_board_is_a_draw() {
        let mut board = Board::new();
        let plain = best_move(&mut board, Player::X, Player::X);
        assert_eq!(plain.score(), 0);
        assert_eq!(board, Board::new());

        let pruned = best_move_alpha_beta(&mut board, Player::X, Player::X);
        assert_eq!(pruned, plain);
    }
}

mod depth_bias {
    use super::*;

    #[test]
    fn prefers_immediate_win_over_fork() {
        // O . X
        // . . X
        // O . .
        // Playing 3 blocks O and forks (a slower win); 8 wins at once.
        let mut board = Board::from_string("O.X/..X/O..").unwrap();
        let result = best_move(&mut board, Player::X, Player::X);
        assert_eq!(result, SearchResult::with_move(8, 5));
    }

    #[test]
    fn win_magnitude_counts_remaining_cells() {
        // O completed the middle column leaving three cells empty.
        let mut board = Board::from_string("XOX/.O./.OX").unwrap();
        assert_eq!(board.num_empty_squares(), 3);

        let for_o = best_move(&mut board, Player::X, Player::O);
        assert_eq!(for_o, SearchResult::terminal(4));

        let for_x = best_move(&mut board, Player::X, Player::X);
        assert_eq!(for_x, SearchResult::terminal(-4));
    }

    #[test]
    fn win_on_final_cell_scores_one() {
        let mut board = Board::from_string("XOX/OXO/OXX").unwrap();
        assert_eq!(board.num_empty_squares(), 0);
        let result = best_move(&mut board, Player::O, Player::X);
        assert_eq!(result, SearchResult::terminal(1));
    }
}

mod determinism {
    use super::*;

    #[test]
    fn repeated_searches_agree() {
        let engine = SearchEngine::new(Pruning::None);
        let mut board = Board::from_string("X../O../...").unwrap();
        let first = engine.best_move(&mut board, Player::X, Player::X);
        for _ in 0..3 {
            assert_eq!(engine.best_move(&mut board, Player::X, Player::X), first);
        }
    }

    #[test]
    fn ties_resolve_to_lowest_index() {
        // Against a centre opening the corners draw and the edges lose, so
        // the lowest drawing index is the corner at 0.
        let mut board = Board::from_string(".../.X./...").unwrap();
        let result = best_move(&mut board, Player::O, Player::O);
        assert_eq!(result, SearchResult::with_move(0, 0));
    }
}
