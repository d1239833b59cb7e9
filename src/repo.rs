use crate::domain::{ApiError, CreateMovie, Movie, UpdateMovie};

/// In-memory movie store. State lives for the process lifetime only; the id
/// counter is monotonic and deleted ids are never handed out again.
pub struct MovieRepo {
    movies: Vec<Movie>,
    next_id: i64,
}

impl MovieRepo {
    pub fn new() -> Self {
        Self {
            movies: Vec::new(),
            next_id: 0,
        }
    }

    pub fn get_all(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    pub fn get_one(&self, id: i64) -> Result<Movie, ApiError> {
        let idx = self.position(id)?;
        Ok(self.movies[idx].clone())
    }

    pub fn create(&mut self, input: CreateMovie) -> Movie {
        self.next_id += 1;
        let movie = Movie {
            id: self.next_id,
            title: input.title,
            year: input.year,
            genres: input.genres,
        };
        self.movies.push(movie.clone());
        movie
    }

    pub fn delete_one(&mut self, id: i64) -> Result<(), ApiError> {
        let idx = self.position(id)?;
        self.movies.remove(idx);
        Ok(())
    }

    pub fn update(&mut self, id: i64, patch: UpdateMovie) -> Result<Movie, ApiError> {
        let idx = self.position(id)?;
        let movie = &mut self.movies[idx];
        if let Some(title) = patch.title {
            movie.title = title;
        }
        if let Some(year) = patch.year {
            movie.year = year;
        }
        if let Some(genres) = patch.genres {
            movie.genres = genres;
        }
        Ok(movie.clone())
    }

    // Single lookup path so get/update/delete share NotFound semantics.
    fn position(&self, id: i64) -> Result<usize, ApiError> {
        self.movies
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| ApiError::not_found(id))
    }
}

impl Default for MovieRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie_input(title: &str) -> CreateMovie {
        CreateMovie {
            title: title.to_string(),
            year: 2000,
            genres: vec!["test".to_string()],
        }
    }

    fn not_found_message(err: ApiError) -> String {
        match err {
            ApiError::NotFound(msg) => msg,
            other => panic!("expected not-found error, got {:?}", other),
        }
    }

    #[test]
    fn create_assigns_increasing_ids() {
        let mut repo = MovieRepo::new();
        assert_eq!(repo.create(movie_input("a")).id, 1);
        assert_eq!(repo.create(movie_input("b")).id, 2);
        assert_eq!(repo.create(movie_input("c")).id, 3);
    }

    #[test]
    fn create_grows_collection_by_one() {
        let mut repo = MovieRepo::new();
        let before = repo.get_all().len();
        repo.create(movie_input("a"));
        assert_eq!(repo.get_all().len(), before + 1);
    }

    #[test]
    fn get_one_returns_created_movie() {
        let mut repo = MovieRepo::new();
        let created = repo.create(movie_input("testMovie"));
        let found = repo.get_one(created.id).unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.title, "testMovie");
        assert_eq!(found.year, 2000);
        assert_eq!(found.genres, vec!["test".to_string()]);
    }

    #[test]
    fn get_one_fails_for_unknown_id() {
        let repo = MovieRepo::new();
        let msg = not_found_message(repo.get_one(999).unwrap_err());
        assert_eq!(msg, "Movie with ID: 999");
    }

    #[test]
    fn delete_one_removes_the_movie() {
        let mut repo = MovieRepo::new();
        let id = repo.create(movie_input("a")).id;
        repo.create(movie_input("b"));
        let before = repo.get_all().len();

        repo.delete_one(id).unwrap();

        let remaining = repo.get_all();
        assert_eq!(remaining.len(), before - 1);
        assert!(remaining.iter().all(|m| m.id != id));
        assert!(repo.get_one(id).is_err());
    }

    #[test]
    fn delete_one_fails_like_get_one() {
        let mut repo = MovieRepo::new();
        let msg = not_found_message(repo.delete_one(9999).unwrap_err());
        assert_eq!(msg, "Movie with ID: 9999");
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let mut repo = MovieRepo::new();
        let first = repo.create(movie_input("a")).id;
        repo.delete_one(first).unwrap();
        let second = repo.create(movie_input("b")).id;
        assert_eq!(second, first + 1);
    }

    #[test]
    fn update_merges_only_supplied_fields() {
        let mut repo = MovieRepo::new();
        let id = repo.create(movie_input("testMovie")).id;

        let patch = UpdateMovie {
            title: Some("updateTitle".to_string()),
            ..Default::default()
        };
        let updated = repo.update(id, patch).unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.title, "updateTitle");
        assert_eq!(updated.year, 2000);
        assert_eq!(updated.genres, vec!["test".to_string()]);
    }

    #[test]
    fn update_fails_for_unknown_id() {
        let mut repo = MovieRepo::new();
        let err = repo.update(42, UpdateMovie::default()).unwrap_err();
        assert_eq!(not_found_message(err), "Movie with ID: 42");
    }

    #[test]
    fn get_all_is_a_snapshot() {
        let mut repo = MovieRepo::new();
        repo.create(movie_input("a"));
        let snapshot = repo.get_all();
        repo.create(movie_input("b"));
        assert_eq!(snapshot.len(), 1);
    }
}
