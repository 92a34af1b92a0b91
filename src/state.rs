use std::sync::Arc;
use std::time::Instant;

use crate::services::exercise_catalog::ExerciseCatalog;
use crate::services::gemini_provider::GeminiProvider;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    catalog: Arc<ExerciseCatalog>,
    gemini: GeminiProvider,
}

impl AppState {
    pub fn from_env() -> Self {
        Self::new(ExerciseCatalog::builtin(), GeminiProvider::from_env())
    }

    pub fn new(catalog: ExerciseCatalog, gemini: GeminiProvider) -> Self {
        Self {
            started_at: Instant::now(),
            catalog: Arc::new(catalog),
            gemini,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn catalog(&self) -> &ExerciseCatalog {
        &self.catalog
    }

    pub fn gemini(&self) -> &GeminiProvider {
        &self.gemini
    }
}
