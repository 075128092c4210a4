//! Legal move generation

use crate::board::{Board, Player};

/// Pits `player` may sow from, in increasing index order.
///
/// A pit is playable when it is on the player's own side and holds at
/// least one seed. The result is empty when the side is bare.
pub fn legal_moves(board: &Board, player: Player) -> Vec<usize> {
    player.pits().filter(|&pit| board[pit] > 0).collect()
}

/// Check if `pit` is a legal move for `player`
#[inline]
pub fn is_legal_move(board: &Board, pit: usize, player: Player) -> bool {
    player.owns_pit(pit) && board[pit] > 0
}

/// Check if `player` has any move at all
#[inline]
pub fn has_legal_moves(board: &Board, player: Player) -> bool {
    !board.side_is_empty(player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_moves() {
        let board = Board::new();
        assert_eq!(legal_moves(&board, Player::One), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(legal_moves(&board, Player::Two), vec![7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_empty_pits_excluded() {
        let board = Board::from_pits([0, 7, 7, 7, 7, 7, 1, 6, 6, 6, 6, 6, 6, 0]);
        let moves = legal_moves(&board, Player::One);
        assert_eq!(moves, vec![1, 2, 3, 4, 5]);
        assert!(!is_legal_move(&board, 0, Player::One));
    }

    #[test]
    fn test_foreign_and_store_pits_rejected() {
        let board = Board::new();
        assert!(!is_legal_move(&board, 7, Player::One));
        assert!(!is_legal_move(&board, 6, Player::One));
        assert!(!is_legal_move(&board, 13, Player::Two));
        assert!(!is_legal_move(&board, 3, Player::Two));
        assert!(!is_legal_move(&board, 14, Player::One));
    }

    #[test]
    fn test_bare_side_has_no_moves() {
        let board = Board::from_pits([0, 0, 0, 0, 0, 0, 24, 6, 6, 6, 6, 6, 6, 24]);
        assert!(legal_moves(&board, Player::One).is_empty());
        assert!(!has_legal_moves(&board, Player::One));
        assert!(has_legal_moves(&board, Player::Two));
    }
}
