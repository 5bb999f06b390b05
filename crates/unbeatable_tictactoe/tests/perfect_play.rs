//! The computer never loses, whatever the human plays.

use unbeatable_tictactoe::{Board, Mark, Minimax, Outcome, Player, Position, evaluate, find_best_move};

/// Plays every human line against the computer's best reply, returning
/// the number of finished games and asserting none is a human win.
fn explore(board: &Board, to_move: Player) -> usize {
    match evaluate(board) {
        Outcome::Won(Player::Human) => panic!("human won:\n{}", board),
        Outcome::Won(Player::Computer) | Outcome::Draw => return 1,
        Outcome::NoWinnerYet => {}
    }

    match to_move {
        Player::Computer => {
            let reply = find_best_move(board).expect("open board has a move");
            assert!(board.is_empty(reply), "computer chose occupied {}", reply);
            explore(&board.with_move(reply, Mark::O), Player::Human)
        }
        Player::Human => board
            .empty_positions()
            .map(|p| explore(&board.with_move(p, Mark::X), Player::Computer))
            .sum(),
    }
}

#[test]
fn test_computer_never_loses_when_human_opens() {
    let games = explore(&Board::new(3).unwrap(), Player::Human);
    assert!(games > 0);
}

#[test]
fn test_computer_never_loses_when_computer_opens() {
    let games = explore(&Board::new(3).unwrap(), Player::Computer);
    assert!(games > 0);
}

#[test]
fn test_opening_reply_to_center_is_corner() {
    let board = Board::new(3).unwrap().with_move(Position::new(1, 1), Mark::X);
    let reply = find_best_move(&board).unwrap();
    assert!(reply.is_corner(3), "edge reply {}", reply);
}

#[test]
fn test_human_blunder_is_punished() {
    // X opens on an edge, O takes the center, X plays the far edge.
    // O should convert to a forced win.
    let board: Board = ".X./.O./.X.".parse().unwrap();
    let report = Minimax::new().search(&board).unwrap();
    assert_eq!(report.score, 1);
}

#[test]
fn test_empty_board_of_any_size_is_open() {
    for dimensions in 1..=6 {
        let board = Board::new(dimensions).unwrap();
        assert_eq!(evaluate(&board), Outcome::NoWinnerYet);
    }
}

#[test]
fn test_depth_limited_search_on_larger_board() {
    // O has three in the top row of a 4x4 board and wins at (0, 3).
    let board: Board = "OOO./XX../X.../....".parse().unwrap();
    let report = Minimax::new()
        .with_max_depth(Some(2))
        .with_alpha_beta(true)
        .search(&board)
        .unwrap();
    assert_eq!(report.position, Position::new(0, 3));
    assert_eq!(report.score, 1);
}
