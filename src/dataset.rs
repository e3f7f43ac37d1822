use std::path::Path;

use thiserror::Error;

use crate::models::{Movie, Rating};

/// Error loading one of the dataset files
///
/// Covers a missing or unreadable file, a malformed record, and missing
/// required columns (the CSV deserializer reports absent headers as a
/// per-record error).
#[derive(Debug, Error)]
#[error("failed to load dataset file {path}: {source}")]
pub struct DatasetError {
    path: String,
    #[source]
    source: csv::Error,
}

impl DatasetError {
    fn new(path: &Path, source: csv::Error) -> Self {
        Self {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Loads the ratings and movies tables from CSV files with headers
/// (`userId,movieId,rating` and `movieId,title`).
///
/// Called once at startup; any error here is fatal and must abort serving.
pub fn load(
    ratings_path: impl AsRef<Path>,
    movies_path: impl AsRef<Path>,
) -> Result<(Vec<Rating>, Vec<Movie>), DatasetError> {
    let ratings = read_records(ratings_path.as_ref())?;
    let movies = read_records(movies_path.as_ref())?;
    Ok((ratings, movies))
}

fn read_records<T>(path: &Path) -> Result<Vec<T>, DatasetError>
where
    T: serde::de::DeserializeOwned,
{
    let mut reader = csv::Reader::from_path(path).map_err(|e| DatasetError::new(path, e))?;

    let mut records = Vec::new();
    for record in reader.deserialize() {
        let record: T = record.map_err(|e| DatasetError::new(path, e))?;
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_dataset() {
        let ratings = write_temp("userId,movieId,rating\n1,10,5.0\n2,20,3.5\n");
        let movies = write_temp("movieId,title\n10,The Matrix\n20,Inception\n");

        let (ratings, movies) = load(ratings.path(), movies.path()).unwrap();

        assert_eq!(ratings.len(), 2);
        assert_eq!(
            ratings[0],
            Rating {
                user_id: 1,
                movie_id: 10,
                rating: 5.0
            }
        );
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[1].title, "Inception");
    }

    #[test]
    fn test_extra_columns_ignored() {
        let ratings = write_temp("userId,movieId,rating,timestamp\n1,10,4.0,964982703\n");
        let movies = write_temp("movieId,title,genres\n10,Toy Story,Animation\n");

        let (ratings, movies) = load(ratings.path(), movies.path()).unwrap();

        assert_eq!(ratings[0].rating, 4.0);
        assert_eq!(movies[0].title, "Toy Story");
    }

    #[test]
    fn test_missing_file() {
        let movies = write_temp("movieId,title\n10,The Matrix\n");
        let result = load("/nonexistent/ratings.csv", movies.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_required_column() {
        let ratings = write_temp("userId,movieId\n1,10\n");
        let movies = write_temp("movieId,title\n10,The Matrix\n");
        let result = load(ratings.path(), movies.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_record() {
        let ratings = write_temp("userId,movieId,rating\n1,10,not-a-number\n");
        let movies = write_temp("movieId,title\n10,The Matrix\n");
        let result = load(ratings.path(), movies.path());
        assert!(result.is_err());
    }
}
