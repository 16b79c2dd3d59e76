//! Selection operators
//!
//! This module provides the parent-selection strategies: tournament, roulette
//! wheel, and rank selection.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{EvoResult, EvolutionError};
use crate::genome::traits::SequenceGenome;
use crate::operators::traits::SelectionOperator;

/// Tournament selection operator
///
/// Draws `tournament_size` distinct individuals uniformly at random and
/// returns the fittest among them. Ties go to the candidate drawn first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentSelection {
    /// Tournament size (number of individuals competing)
    pub tournament_size: usize,
}

impl TournamentSelection {
    /// Create a new tournament selection with the given size
    pub fn new(tournament_size: usize) -> Self {
        Self { tournament_size }
    }
}

impl<G: SequenceGenome> SelectionOperator<G> for TournamentSelection {
    fn select<R: Rng>(&self, population: &[(G, usize)], rng: &mut R) -> EvoResult<usize> {
        assert!(!population.is_empty(), "population cannot be empty");

        let k = self.tournament_size.clamp(1, population.len());
        let indices: Vec<usize> = (0..population.len()).collect();
        let mut candidates = indices.choose_multiple(rng, k).copied();

        let mut best = candidates.next().expect("tournament draws at least one candidate");
        for idx in candidates {
            if population[idx].1 > population[best].1 {
                best = idx;
            }
        }
        Ok(best)
    }
}

/// Roulette wheel selection (fitness proportionate)
///
/// Selection probability is proportional to fitness. Requires a population
/// with non-zero total fitness; an all-zero population is reported as
/// [`EvolutionError::ZeroTotalFitness`] rather than left to divide by zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RouletteSelection;

impl RouletteSelection {
    /// Create a new roulette selection
    pub fn new() -> Self {
        Self
    }
}

impl<G: SequenceGenome> SelectionOperator<G> for RouletteSelection {
    fn select<R: Rng>(&self, population: &[(G, usize)], rng: &mut R) -> EvoResult<usize> {
        assert!(!population.is_empty(), "population cannot be empty");

        let total: usize = population.iter().map(|(_, f)| f).sum();
        if total == 0 {
            return Err(EvolutionError::ZeroTotalFitness);
        }

        let draw = rng.gen_range(0..total);
        let mut cumulative = 0;
        for (idx, (_, fitness)) in population.iter().enumerate() {
            cumulative += fitness;
            if draw < cumulative {
                return Ok(idx);
            }
        }
        unreachable!("the cumulative walk covers [0, total)")
    }
}

/// Rank-based selection
///
/// Sorts the population by fitness and assigns rank `i` (0 = best) the
/// selection probability `(n - i) / (n * (n + 1) / 2)`: linear weighting that
/// favors fitter individuals without depending on raw fitness magnitudes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RankSelection;

impl RankSelection {
    /// Create a new rank selection
    pub fn new() -> Self {
        Self
    }
}

impl<G: SequenceGenome> SelectionOperator<G> for RankSelection {
    fn select<R: Rng>(&self, population: &[(G, usize)], rng: &mut R) -> EvoResult<usize> {
        assert!(!population.is_empty(), "population cannot be empty");

        let n = population.len();

        // Stable sort keeps equal-fitness individuals in population order
        let mut ranked: Vec<usize> = (0..n).collect();
        ranked.sort_by(|&a, &b| population[b].1.cmp(&population[a].1));

        let denominator = (n * (n + 1) / 2) as f64;
        let draw = rng.gen::<f64>();
        let mut cumulative = 0.0;
        for (rank, &idx) in ranked.iter().enumerate() {
            cumulative += (n - rank) as f64 / denominator;
            if draw < cumulative {
                return Ok(idx);
            }
        }
        // Rounding can leave the final cumulative sum a hair under 1.0
        Ok(*ranked.last().expect("population is not empty"))
    }
}

/// Configured selection strategy
///
/// Tagged union over the selection operators, so a run configuration can carry
/// its strategy choice as plain data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionStrategy {
    /// K-tournament selection
    Tournament(TournamentSelection),
    /// Fitness-proportionate selection
    Roulette(RouletteSelection),
    /// Linear rank selection
    Rank(RankSelection),
}

impl SelectionStrategy {
    /// Tournament selection with the given tournament size
    pub fn tournament(tournament_size: usize) -> Self {
        Self::Tournament(TournamentSelection::new(tournament_size))
    }

    /// Roulette wheel selection
    pub fn roulette() -> Self {
        Self::Roulette(RouletteSelection::new())
    }

    /// Rank selection
    pub fn rank() -> Self {
        Self::Rank(RankSelection::new())
    }
}

impl<G: SequenceGenome> SelectionOperator<G> for SelectionStrategy {
    fn select<R: Rng>(&self, population: &[(G, usize)], rng: &mut R) -> EvoResult<usize> {
        match self {
            Self::Tournament(op) => op.select(population, rng),
            Self::Roulette(op) => op.select(population, rng),
            Self::Rank(op) => op.select(population, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::melody::{Melody, Note, NoteLength};
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn create_population(fitnesses: &[usize]) -> Vec<(Melody, usize)> {
        fitnesses
            .iter()
            .enumerate()
            .map(|(i, &f)| {
                let melody = Melody::new(vec![Note::new(i as u8, NoteLength::Quarter); 4]);
                (melody, f)
            })
            .collect()
    }

    #[test]
    fn test_tournament_selects_valid_index() {
        let mut rng = rand::thread_rng();
        let population = create_population(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        let selection = TournamentSelection::new(3);

        for _ in 0..100 {
            let idx = selection.select(&population, &mut rng).unwrap();
            assert!(idx < population.len());
        }
    }

    #[test]
    fn test_full_tournament_always_selects_fittest() {
        let mut rng = rand::thread_rng();
        let population = create_population(&[3, 9, 1, 4, 7]);
        let selection = TournamentSelection::new(population.len());

        for _ in 0..100 {
            let idx = selection.select(&population, &mut rng).unwrap();
            assert_eq!(idx, 1);
        }
    }

    #[test]
    fn test_roulette_frequency_tracks_fitness() {
        // With fitness {1, 2, 3, 4} the selection probabilities are
        // {0.1, 0.2, 0.3, 0.4} of the total
        let mut rng = StdRng::seed_from_u64(7);
        let population = create_population(&[1, 2, 3, 4]);
        let selection = RouletteSelection::new();

        let trials = 20_000;
        let mut counts = [0usize; 4];
        for _ in 0..trials {
            counts[selection.select(&population, &mut rng).unwrap()] += 1;
        }

        for (i, &count) in counts.iter().enumerate() {
            let expected = (i + 1) as f64 / 10.0;
            let observed = count as f64 / trials as f64;
            assert_abs_diff_eq!(observed, expected, epsilon = 0.02);
        }
    }

    #[test]
    fn test_roulette_rejects_zero_total_fitness() {
        let mut rng = rand::thread_rng();
        let population = create_population(&[0, 0, 0]);
        let selection = RouletteSelection::new();

        assert_eq!(
            selection.select(&population, &mut rng),
            Err(EvolutionError::ZeroTotalFitness)
        );
    }

    #[test]
    fn test_rank_frequency_matches_linear_weights() {
        // For n = 5 the rank weights are (5, 4, 3, 2, 1) / 15, assigned from
        // best to worst
        let mut rng = StdRng::seed_from_u64(11);
        let population = create_population(&[50, 40, 30, 20, 10]);
        let selection = RankSelection::new();

        let trials = 30_000;
        let mut counts = [0usize; 5];
        for _ in 0..trials {
            counts[selection.select(&population, &mut rng).unwrap()] += 1;
        }

        for (i, &count) in counts.iter().enumerate() {
            let expected = (5 - i) as f64 / 15.0;
            let observed = count as f64 / trials as f64;
            assert_abs_diff_eq!(observed, expected, epsilon = 0.02);
        }
    }

    #[test]
    fn test_rank_ignores_fitness_magnitudes() {
        // Wildly skewed fitness values produce the same rank ordering, so the
        // best individual is still drawn with probability n / (n(n+1)/2)
        let mut rng = StdRng::seed_from_u64(13);
        let population = create_population(&[1, 1000, 2, 3, 4]);
        let selection = RankSelection::new();

        let trials = 30_000;
        let mut best_count = 0;
        for _ in 0..trials {
            if selection.select(&population, &mut rng).unwrap() == 1 {
                best_count += 1;
            }
        }

        let observed = best_count as f64 / trials as f64;
        assert_abs_diff_eq!(observed, 5.0 / 15.0, epsilon = 0.02);
    }

    #[test]
    fn test_strategy_delegates_to_variants() {
        let mut rng = rand::thread_rng();
        let population = create_population(&[1, 2, 3, 4]);

        for strategy in [
            SelectionStrategy::tournament(2),
            SelectionStrategy::roulette(),
            SelectionStrategy::rank(),
        ] {
            let idx = strategy.select(&population, &mut rng).unwrap();
            assert!(idx < population.len());
        }
    }
}
