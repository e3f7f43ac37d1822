pub mod matrix;
pub mod similarity;

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

use serde::Serialize;

use crate::models::{Movie, Rating};

use matrix::InteractionMatrix;
use similarity::SimilarityMatrix;

/// A single ranked recommendation returned to the caller.
///
/// `title` is `None` when the movie id has no metadata row; the entry keeps
/// its rank rather than being dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub movie_id: u32,
    pub title: Option<String>,
}

/// User-based collaborative-filtering recommender.
///
/// Built once at startup from the loaded dataset and immutable afterwards:
/// the interaction and similarity matrices are derived in the constructor and
/// never touched again, so a single instance can be shared across concurrent
/// requests without locking. `recommend` is a pure function of the snapshot —
/// all per-call state is local.
pub struct RecommenderEngine {
    titles: HashMap<u32, String>,
    interactions: InteractionMatrix,
    similarities: SimilarityMatrix,
}

impl RecommenderEngine {
    pub fn new(ratings: &[Rating], movies: Vec<Movie>) -> Self {
        let start = Instant::now();

        let interactions = InteractionMatrix::from_ratings(ratings);
        let similarities = SimilarityMatrix::from_interactions(&interactions);

        tracing::info!(
            users = interactions.num_users(),
            movies = interactions.movie_ids().len(),
            ratings = ratings.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Recommendation model built"
        );

        let titles = movies
            .into_iter()
            .map(|movie| (movie.movie_id, movie.title))
            .collect();

        Self {
            titles,
            interactions,
            similarities,
        }
    }

    /// Returns up to `n` movies the user has not rated, ranked by predicted
    /// preference. An unknown user, or a user for whom no neighbor provides
    /// positive-similarity signal, yields an empty list — never an error.
    pub fn recommend(&self, user_id: u32, n: usize) -> Vec<Recommendation> {
        let Some(target) = self.interactions.user_index(user_id) else {
            return Vec::new();
        };

        let mut predictions = self.predictions(target);
        predictions.truncate(n);

        predictions
            .into_iter()
            .map(|(movie_id, _)| Recommendation {
                movie_id,
                title: self.titles.get(&movie_id).cloned(),
            })
            .collect()
    }

    /// Ranks every unrated candidate movie for the user at `target` by its
    /// predicted rating, the similarity-weighted mean of neighbor ratings.
    fn predictions(&self, target: usize) -> Vec<(u32, f64)> {
        let similarities = self.similarities.row(target);

        // Neighbors in descending similarity. The sort is stable, so ties keep
        // their ascending-user-id order.
        let mut neighbors: Vec<usize> =
            (0..similarities.len()).filter(|&i| i != target).collect();
        neighbors.sort_by(|&a, &b| {
            similarities[b]
                .partial_cmp(&similarities[a])
                .unwrap_or(Ordering::Equal)
        });

        let already_rated: HashSet<u32> = self
            .interactions
            .rated_by(target)
            .map(|(movie_id, _)| movie_id)
            .collect();

        // Per-candidate accumulators: similarity-weighted rating total and the
        // similarity mass behind it.
        let mut total_scores: HashMap<u32, f64> = HashMap::new();
        let mut similarity_sums: HashMap<u32, f64> = HashMap::new();

        for &neighbor in &neighbors {
            let similarity = similarities[neighbor];
            // Non-positive similarity carries no signal and must not be
            // aggregated.
            if similarity <= 0.0 {
                continue;
            }

            for (movie_id, rating) in self.interactions.rated_by(neighbor) {
                if already_rated.contains(&movie_id) {
                    continue;
                }
                *total_scores.entry(movie_id).or_insert(0.0) += rating * similarity;
                *similarity_sums.entry(movie_id).or_insert(0.0) += similarity;
            }
        }

        let mut predictions: Vec<(u32, f64)> = total_scores
            .into_iter()
            .filter_map(|(movie_id, total)| {
                let similarity_sum = similarity_sums[&movie_id];
                (similarity_sum > 0.0).then(|| (movie_id, total / similarity_sum))
            })
            .collect();

        // Descending predicted rating; ascending movie id among equals keeps
        // the ranking deterministic.
        predictions.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });

        predictions
    }
}
