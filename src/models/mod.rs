use serde::Deserialize;

/// A single user rating of a movie, as read from the ratings CSV.
///
/// The source file may carry extra columns (e.g. `timestamp`); they are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Rating {
    #[serde(rename = "userId")]
    pub user_id: u32,
    #[serde(rename = "movieId")]
    pub movie_id: u32,
    pub rating: f64,
}

/// Movie metadata, as read from the movies CSV. `movie_id` is unique.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Movie {
    #[serde(rename = "movieId")]
    pub movie_id: u32,
    pub title: String,
}
