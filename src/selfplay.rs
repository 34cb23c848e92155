//! Self-play against a uniformly random opponent.
//!
//! Plays complete games in which X follows the greedy policy of a solved
//! value table and O picks uniformly among its legal moves. The mean reward
//! over many games estimates the initial-state value, which makes this a
//! Monte Carlo check on the solver.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Outcome, Player};
use crate::graph::{StateSpace, Status};
use crate::solve::{best_move, Solution};

/// Errors raised while running self-play.
#[derive(Debug, Error)]
pub enum SelfPlayError {
    #[error("threads must be at least 1")]
    InvalidThreads,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Configuration for self-play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub games: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            games: 1000,
            seed: 0,
            threads: 1,
        }
    }
}

/// A single finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    /// Cells played, in order.
    pub moves: Vec<usize>,
    pub outcome: Outcome,
}

/// Aggregate results over a batch of games.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SelfPlaySummary {
    pub games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    /// Mean reward from X's perspective; 0 when no games were played.
    pub mean_reward: f64,
}

impl SelfPlaySummary {
    fn from_games(games: &[GameRecord]) -> Self {
        let mut summary = SelfPlaySummary {
            games: games.len(),
            ..SelfPlaySummary::default()
        };
        let mut total = 0.0;
        for game in games {
            match game.outcome {
                Outcome::Win(Player::X) => summary.x_wins += 1,
                Outcome::Win(Player::O) => summary.o_wins += 1,
                Outcome::Draw => summary.draws += 1,
            }
            total += game.outcome.reward();
        }
        if !games.is_empty() {
            summary.mean_reward = total / games.len() as f64;
        }
        summary
    }
}

/// Plays one game from the initial state of `space`.
pub fn play_game(space: &StateSpace, solution: &Solution, rng: &mut impl Rng) -> GameRecord {
    let mut moves = Vec::new();
    let mut id = space.initial();
    loop {
        let record = space.record(id);
        let actions = match &record.status {
            Status::Terminal(outcome) => {
                return GameRecord {
                    moves,
                    outcome: *outcome,
                }
            }
            Status::NonTerminal(actions) => actions,
        };
        let chosen = if record.state.to_move.is_maximizer() {
            best_move(space, solution.values(), id)
        } else {
            actions.choose(rng).copied()
        };
        match chosen {
            Some(action) => {
                moves.push(action.cell);
                id = action.next;
            }
            // Generated spaces never hold a non-terminal state without moves.
            None => {
                return GameRecord {
                    moves,
                    outcome: Outcome::Draw,
                }
            }
        }
    }
}

/// Plays `config.games` games and summarizes them.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(
    space: &StateSpace,
    solution: &Solution,
    config: &SelfPlayConfig,
) -> Result<SelfPlaySummary, SelfPlayError> {
    if config.threads == 0 {
        return Err(SelfPlayError::InvalidThreads);
    }
    let games = if config.threads > 1 {
        run_parallel(space, solution, config)?
    } else {
        run_sequential(space, solution, config)
    };
    Ok(SelfPlaySummary::from_games(&games))
}

fn game_rng(seed: u64, game: usize) -> SmallRng {
    if seed != 0 {
        SmallRng::seed_from_u64(seed.wrapping_add(game as u64))
    } else {
        SmallRng::from_entropy()
    }
}

fn run_sequential(space: &StateSpace, solution: &Solution, config: &SelfPlayConfig) -> Vec<GameRecord> {
    (0..config.games)
        .map(|i| play_game(space, solution, &mut game_rng(config.seed, i)))
        .collect()
}

fn run_parallel(
    space: &StateSpace,
    solution: &Solution,
    config: &SelfPlayConfig,
) -> Result<Vec<GameRecord>, SelfPlayError> {
    use rayon::prelude::*;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()?;

    Ok(pool.install(|| {
        (0..config.games)
            .into_par_iter()
            .map(|i| play_game(space, solution, &mut game_rng(config.seed, i)))
            .collect()
    }))
}
