use super::*;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::One.opponent(), Player::Two);
    assert_eq!(Player::Two.opponent(), Player::One);
}

#[test]
fn test_player_from_id() {
    assert_eq!(Player::try_from(0u8).unwrap(), Player::One);
    assert_eq!(Player::try_from(1u8).unwrap(), Player::Two);
    assert!(matches!(
        Player::try_from(2u8),
        Err(RulesError::InvalidPlayer(2))
    ));
}

#[test]
fn test_player_layout() {
    assert_eq!(Player::One.store(), 6);
    assert_eq!(Player::Two.store(), 13);
    assert_eq!(Player::One.pits(), 0..6);
    assert_eq!(Player::Two.pits(), 7..13);
    assert!(Player::One.owns_pit(5));
    assert!(!Player::One.owns_pit(6));
    assert!(!Player::One.owns_pit(7));
    assert!(Player::Two.owns_pit(12));
    assert!(!Player::Two.owns_pit(13));
}

#[test]
fn test_opposite_pit() {
    assert_eq!(opposite_pit(0), 12);
    assert_eq!(opposite_pit(4), 8);
    assert_eq!(opposite_pit(5), 7);
    assert_eq!(opposite_pit(12), 0);
    for pit in (0..6).chain(7..13) {
        assert_eq!(opposite_pit(opposite_pit(pit)), pit);
    }
}

#[test]
fn test_initial_board() {
    let board = Board::new();
    assert_eq!(board.store(Player::One), 0);
    assert_eq!(board.store(Player::Two), 0);
    for pit in (0..6).chain(7..13) {
        assert_eq!(board[pit], 6);
    }
    assert_eq!(board.total_seeds(), TOTAL_SEEDS);
    assert_eq!(TOTAL_SEEDS, 72);
}

#[test]
fn test_board_side_queries() {
    let board = Board::from_pits([4, 0, 0, 1, 0, 0, 10, 6, 6, 6, 6, 6, 6, 12]);
    assert_eq!(board.side_seeds(Player::One), 5);
    assert_eq!(board.side_seeds(Player::Two), 36);
    assert_eq!(board.empty_pits(Player::One), 4);
    assert_eq!(board.empty_pits(Player::Two), 0);
    assert_eq!(board.store_diff(), -2);
    assert!(!board.side_is_empty(Player::One));
}

#[test]
fn test_board_display() {
    let text = Board::new().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("( 0)"));
    assert_eq!(lines[2].split_whitespace().count(), 6);
}

#[test]
fn test_empty_board() {
    let board = Board::empty();
    assert_eq!(board.total_seeds(), 0);
    assert!(board.side_is_empty(Player::One) && board.side_is_empty(Player::Two));
    assert_eq!(Board::from([0; TOTAL_PITS]), board);
}

#[test]
fn test_from_pits_keeps_nonstandard_total() {
    let board = Board::from_pits([40, 0, 0, 0, 0, 0, 200, 0, 0, 0, 0, 0, 1, 0]);
    assert_eq!(board.total_seeds(), 241);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic]
fn test_from_pits_rejects_overflowing_total() {
    let _ = Board::from_pits([200, 0, 0, 0, 0, 0, 56, 0, 0, 0, 0, 0, 0, 0]);
}
