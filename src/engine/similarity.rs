use super::matrix::InteractionMatrix;

/// Pairwise cosine similarity between user rows of an [`InteractionMatrix`].
///
/// Similarity is computed over the full item vector, unrated cells included as
/// 0 — the same approximation the upstream system uses. It is NOT restricted
/// to co-rated items, so users who rated few items in common can still score
/// high if their vectors point the same way.
///
/// Scores live in [-1, 1]. The matrix is symmetric; row and column indices
/// correspond to the interaction matrix's user row indices.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    scores: Vec<Vec<f64>>,
}

impl SimilarityMatrix {
    pub fn from_interactions(matrix: &InteractionMatrix) -> Self {
        let num_users = matrix.num_users();

        let norms: Vec<f64> = (0..num_users)
            .map(|i| {
                matrix
                    .row(i)
                    .values()
                    .map(|value| value * value)
                    .sum::<f64>()
                    .sqrt()
            })
            .collect();

        let mut scores = vec![vec![0.0; num_users]; num_users];

        for a in 0..num_users {
            // A user with at least one nonzero rating is identical to itself.
            // A zero-magnitude row gets 0 everywhere, diagonal included.
            scores[a][a] = if norms[a] > 0.0 { 1.0 } else { 0.0 };

            for b in (a + 1)..num_users {
                let score = if norms[a] == 0.0 || norms[b] == 0.0 {
                    0.0
                } else {
                    sparse_dot(matrix, a, b) / (norms[a] * norms[b])
                };
                scores[a][b] = score;
                scores[b][a] = score;
            }
        }

        Self { scores }
    }

    pub fn num_users(&self) -> usize {
        self.scores.len()
    }

    pub fn score(&self, a: usize, b: usize) -> f64 {
        self.scores[a][b]
    }

    /// Similarity scores between one user and every user (self included).
    pub fn row(&self, user_index: usize) -> &[f64] {
        &self.scores[user_index]
    }
}

/// Dot product of two sparse user rows. Only entries present in both rows
/// contribute, so iterating the smaller row is enough.
fn sparse_dot(matrix: &InteractionMatrix, a: usize, b: usize) -> f64 {
    let (small, large) = if matrix.row(a).len() <= matrix.row(b).len() {
        (matrix.row(a), matrix.row(b))
    } else {
        (matrix.row(b), matrix.row(a))
    };

    small
        .iter()
        .filter_map(|(movie_id, value)| large.get(movie_id).map(|other| value * other))
        .sum()
}
