use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::models::Rating;

/// User-item rating matrix.
///
/// Logically a dense matrix over (distinct user ids, ascending) ×
/// (distinct movie ids, ascending), with 0 standing in for "unrated".
/// Physically sparse: each row stores only the ratings that actually exist,
/// so memory stays proportional to the number of ratings rather than
/// users × movies.
///
/// The 0 fill value is a sentinel, not a real rating: downstream logic must
/// treat any cell value ≤ 0 as "not rated".
#[derive(Debug, Clone)]
pub struct InteractionMatrix {
    user_ids: Vec<u32>,
    movie_ids: Vec<u32>,
    rows: Vec<HashMap<u32, f64>>,
}

impl InteractionMatrix {
    /// Pivots a rating sequence into the matrix.
    ///
    /// Duplicate (user, movie) pairs resolve last-write-wins in input order.
    pub fn from_ratings(ratings: &[Rating]) -> Self {
        let mut by_user: BTreeMap<u32, HashMap<u32, f64>> = BTreeMap::new();
        let mut movie_ids: BTreeSet<u32> = BTreeSet::new();

        for rating in ratings {
            by_user
                .entry(rating.user_id)
                .or_default()
                .insert(rating.movie_id, rating.rating);
            movie_ids.insert(rating.movie_id);
        }

        let user_ids: Vec<u32> = by_user.keys().copied().collect();
        let rows: Vec<HashMap<u32, f64>> = by_user.into_values().collect();

        Self {
            user_ids,
            movie_ids: movie_ids.into_iter().collect(),
            rows,
        }
    }

    /// Distinct user ids, ascending. Row `i` belongs to `user_ids()[i]`.
    pub fn user_ids(&self) -> &[u32] {
        &self.user_ids
    }

    /// Distinct movie ids, ascending.
    pub fn movie_ids(&self) -> &[u32] {
        &self.movie_ids
    }

    pub fn num_users(&self) -> usize {
        self.user_ids.len()
    }

    /// Row index for a user id, or `None` if the user has no ratings.
    pub fn user_index(&self, user_id: u32) -> Option<usize> {
        self.user_ids.binary_search(&user_id).ok()
    }

    /// Logical cell value: the stored rating, or 0 for an unrated pair.
    pub fn cell(&self, user_index: usize, movie_id: u32) -> f64 {
        self.rows[user_index].get(&movie_id).copied().unwrap_or(0.0)
    }

    /// Sparse row for a user, keyed by movie id.
    pub fn row(&self, user_index: usize) -> &HashMap<u32, f64> {
        &self.rows[user_index]
    }

    /// The (movie id, rating) pairs a user has actually rated (value > 0).
    pub fn rated_by(&self, user_index: usize) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.rows[user_index]
            .iter()
            .filter(|(_, &value)| value > 0.0)
            .map(|(&movie_id, &value)| (movie_id, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(user_id: u32, movie_id: u32, rating: f64) -> Rating {
        Rating {
            user_id,
            movie_id,
            rating,
        }
    }

    #[test]
    fn test_ids_sorted_ascending() {
        let ratings = vec![
            rating(3, 20, 4.0),
            rating(1, 30, 2.0),
            rating(2, 10, 5.0),
        ];
        let matrix = InteractionMatrix::from_ratings(&ratings);

        assert_eq!(matrix.user_ids(), &[1, 2, 3]);
        assert_eq!(matrix.movie_ids(), &[10, 20, 30]);
    }

    #[test]
    fn test_cells_filled_with_zero_sentinel() {
        let ratings = vec![rating(1, 10, 5.0), rating(2, 20, 3.0)];
        let matrix = InteractionMatrix::from_ratings(&ratings);

        let user1 = matrix.user_index(1).unwrap();
        assert_eq!(matrix.cell(user1, 10), 5.0);
        assert_eq!(matrix.cell(user1, 20), 0.0);
    }

    #[test]
    fn test_rated_by_excludes_nonpositive_values() {
        let ratings = vec![rating(1, 10, 5.0), rating(1, 20, 0.0)];
        let matrix = InteractionMatrix::from_ratings(&ratings);

        let rated: Vec<(u32, f64)> = matrix.rated_by(0).collect();
        assert_eq!(rated, vec![(10, 5.0)]);
    }

    #[test]
    fn test_duplicate_rating_last_wins() {
        let ratings = vec![rating(1, 10, 2.0), rating(1, 10, 4.5)];
        let matrix = InteractionMatrix::from_ratings(&ratings);

        assert_eq!(matrix.cell(0, 10), 4.5);
    }

    #[test]
    fn test_unknown_user_has_no_index() {
        let ratings = vec![rating(1, 10, 5.0)];
        let matrix = InteractionMatrix::from_ratings(&ratings);

        assert_eq!(matrix.user_index(999), None);
    }
}
