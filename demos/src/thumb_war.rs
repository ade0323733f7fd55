//! Best-of-three thumb-war game, with the winner function injected so a
//! test can swap in a recorded double.

use rand::Rng;

/// Play until one player reaches two wins. Rounds with no winner are
/// replayed.
pub fn play(
    player1: &str,
    player2: &str,
    get_winner: impl Fn(&str, &str) -> Option<String>,
) -> String {
    let number_to_win = 2;
    let mut player1_wins = 0;
    let mut player2_wins = 0;

    while player1_wins < number_to_win && player2_wins < number_to_win {
        match get_winner(player1, player2).as_deref() {
            Some(winner) if winner == player1 => player1_wins += 1,
            Some(winner) if winner == player2 => player2_wins += 1,
            _ => {}
        }
    }

    if player1_wins > player2_wins {
        player1.to_owned()
    } else {
        player2.to_owned()
    }
}

/// The real winner function: picks either player, or nobody, at random.
pub fn random_winner(player1: &str, player2: &str) -> Option<String> {
    let winning_number: f64 = rand::rng().random();

    if winning_number < 1.0 / 3.0 {
        Some(player1.to_owned())
    } else if winning_number < 2.0 / 3.0 {
        Some(player2.to_owned())
    } else {
        None
    }
}
