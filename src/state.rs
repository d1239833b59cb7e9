use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::Config;
use crate::repo::MovieRepo;

#[derive(Clone)]
pub struct AppState {
    repo: Arc<Mutex<MovieRepo>>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            repo: Arc::new(Mutex::new(MovieRepo::new())),
            config,
        }
    }

    /// Handlers run concurrently, so every repository operation takes this
    /// lock for its full read-modify-write. Nothing awaits while holding it.
    pub fn repo(&self) -> MutexGuard<'_, MovieRepo> {
        self.repo.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
