use crate::cards::Card;
use crate::evaluator::{best_category, Category};
use crate::hand::{validate_holdem, Board, HandError, HoleCards};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    #[error("no players at showdown")]
    NoPlayers,
    #[error("showdown needs a full board, got {0} cards")]
    IncompleteBoard(usize),
    #[error("player {player}: {source}")]
    Player { player: usize, source: HandError },
    #[error("card {0} dealt to more than one player")]
    SharedCard(Card),
}

/// Best category reached by each player on a complete board.
pub fn categories(players: &[HoleCards], board: &Board) -> Result<Vec<Category>, ShowdownError> {
    if players.is_empty() {
        return Err(ShowdownError::NoPlayers);
    }
    if !board.is_complete() {
        return Err(ShowdownError::IncompleteBoard(board.len()));
    }

    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(players.len());
    for (player, hole) in players.iter().enumerate() {
        validate_holdem(hole, board).map_err(|source| ShowdownError::Player { player, source })?;
        for card in hole.as_array() {
            if !seen.insert(card) {
                return Err(ShowdownError::SharedCard(card));
            }
        }
        let b = board.as_slice();
        let seven = [hole.first(), hole.second(), b[0], b[1], b[2], b[3], b[4]];
        out.push(best_category(&seven));
    }
    Ok(out)
}

/// Indices of every player holding the strongest category.
///
/// Equal categories split the pot; kickers are not compared.
///
/// ```
/// use poker_odds::hand::{Board, HoleCards};
/// use poker_odds::showdown::winners;
///
/// let board: Board = "2C 7D 9H JS KC".parse().unwrap();
/// let players: Vec<HoleCards> = ["AS AD", "KH QD", "3S 4S"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// // AA and KQ both hold one pair.
/// assert_eq!(winners(&players, &board).unwrap(), vec![0, 1]);
/// ```
pub fn winners(players: &[HoleCards], board: &Board) -> Result<Vec<usize>, ShowdownError> {
    let cats = categories(players, board)?;
    let best = cats.iter().copied().max();
    Ok(cats.iter().enumerate().filter(|(_, c)| Some(**c) == best).map(|(i, _)| i).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holes(list: &[&str]) -> Vec<HoleCards> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn single_winner() {
        let board: Board = "2H 7H 9H JS KC".parse().unwrap();
        let players = holes(&["AH 3H", "KD KS", "QC 4D"]);
        assert_eq!(winners(&players, &board).unwrap(), vec![0]);
        let cats = categories(&players, &board).unwrap();
        assert_eq!(cats, vec![Category::Flush, Category::ThreeOfAKind, Category::HighCard]);
    }

    #[test]
    fn board_plays_for_everyone() {
        let board: Board = "10C JD QH KS AC".parse().unwrap();
        let players = holes(&["2C 3D", "4H 5S"]);
        assert_eq!(winners(&players, &board).unwrap(), vec![0, 1]);
    }

    #[test]
    fn rejects_bad_tables() {
        let board: Board = "2C 7D 9H".parse().unwrap();
        assert_eq!(winners(&holes(&["AS AD"]), &board), Err(ShowdownError::IncompleteBoard(3)));
        let full: Board = "2C 7D 9H JS KC".parse().unwrap();
        assert_eq!(winners(&[], &full), Err(ShowdownError::NoPlayers));
        assert!(matches!(
            winners(&holes(&["AS AD", "AS KD"]), &full),
            Err(ShowdownError::SharedCard(_))
        ));
        assert!(matches!(
            winners(&holes(&["2C AD"]), &full),
            Err(ShowdownError::Player { player: 0, source: HandError::Overlap })
        ));
    }
}
