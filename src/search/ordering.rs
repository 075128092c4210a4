//! Move ordering for alpha-beta search
//!
//! Good moves first means earlier cutoffs. Each candidate is sown once and
//! scored by what it does immediately:
//! - Extra turn: `EXTRA_TURN`
//! - Mover's store lead grows by more than one seed: `CAPTURE`
//! - A random tie-breaker in `[0, 1)`
//!
//! The capture flag is a store-difference test, not the exact capture
//! rule. A long sowing that passes the mover's store can trip it too; it
//! only affects ordering, never the value the search returns.

use rand::Rng;

use crate::board::{Board, Player};
use crate::rules::sow;

/// Priority bonus for a move that ends in the mover's store
pub const EXTRA_TURN: f64 = 1000.0;
/// Priority bonus for a move that looks like a capture
pub const CAPTURE: f64 = 500.0;

/// Mover's store lead on `board`
#[inline]
fn store_lead(board: &Board, player: Player) -> i32 {
    board.store(player) as i32 - board.store(player.opponent()) as i32
}

/// Priority of a single move, tie-breaker excluded
pub fn move_priority(board: &Board, pit: usize, player: Player) -> f64 {
    let outcome = sow(board, pit, player);

    let mut priority = 0.0;
    if outcome.extra_turn {
        priority += EXTRA_TURN;
    }
    if store_lead(&outcome.board, player) - store_lead(board, player) > 1 {
        priority += CAPTURE;
    }
    priority
}

/// Sort `moves` best-first for `player`.
///
/// Ties are broken by draws from `rng`, so the order (and with it the
/// search's node count) is reproducible for a seeded generator.
pub fn order_moves<R: Rng + ?Sized>(
    board: &Board,
    moves: &[usize],
    player: Player,
    rng: &mut R,
) -> Vec<usize> {
    let mut scored: Vec<(f64, usize)> = moves
        .iter()
        .map(|&pit| {
            let tie_break: f64 = rng.random();
            (move_priority(board, pit, player) + tie_break, pit)
        })
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    log::trace!("ordered moves for {player}: {scored:?}");

    scored.into_iter().map(|(_, pit)| pit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::legal_moves;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_extra_turn_first() {
        let board = Board::new();
        let moves = legal_moves(&board, Player::One);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);

        let ordered = order_moves(&board, &moves, Player::One, &mut rng);
        // Only pit 0 (6 seeds, 6 cells to the store) ends in the store
        assert_eq!(ordered[0], 0);
        assert_eq!(ordered.len(), 6);
    }

    #[test]
    fn test_capture_ranked_above_quiet_moves() {
        // Pit 0 (4 seeds) lands in empty pit 4 facing 6 seeds: capture.
        // Pit 5 (1 seed) lands in the store: extra turn.
        let board = Board::from_pits([4, 0, 0, 0, 0, 1, 10, 6, 6, 6, 6, 6, 6, 5]);
        assert_eq!(move_priority(&board, 0, Player::One), CAPTURE);
        assert_eq!(move_priority(&board, 5, Player::One), EXTRA_TURN);

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let ordered = order_moves(&board, &[0, 5], Player::One, &mut rng);
        assert_eq!(ordered, vec![5, 0]);
    }

    #[test]
    fn test_player_two_priorities() {
        let board = Board::new();
        // Pit 7 holds 6 seeds, six cells from store 13
        assert_eq!(move_priority(&board, 7, Player::Two), EXTRA_TURN);
        assert_eq!(move_priority(&board, 8, Player::Two), 0.0);
    }

    #[test]
    fn test_order_is_a_permutation() {
        let board = Board::from_pits([3, 0, 2, 5, 1, 4, 10, 6, 6, 6, 6, 6, 6, 11]);
        let moves = legal_moves(&board, Player::One);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);

        let mut ordered = order_moves(&board, &moves, Player::One, &mut rng);
        ordered.sort_unstable();
        assert_eq!(ordered, moves);
    }

    #[test]
    fn test_same_seed_same_order() {
        let board = Board::from_pits([2, 2, 2, 2, 2, 2, 20, 2, 2, 2, 2, 2, 2, 28]);
        let moves = legal_moves(&board, Player::Two);

        let mut a = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut b = Xoshiro256PlusPlus::seed_from_u64(42);
        assert_eq!(
            order_moves(&board, &moves, Player::Two, &mut a),
            order_moves(&board, &moves, Player::Two, &mut b)
        );
    }

    #[test]
    fn test_empty_move_list() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        assert!(order_moves(&Board::new(), &[], Player::One, &mut rng).is_empty());
    }
}
