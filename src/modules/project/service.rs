use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{info, warn};

use super::model::{new_project_id, VideoProject};
use super::repository::{ProjectStore, StoreError};
use crate::modules::generation::model::GenerationRequest;

/// Dashboard, preview and bookkeeping operations over a [`ProjectStore`].
#[derive(Clone)]
pub struct ProjectService {
    store: Arc<dyn ProjectStore>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Result<Vec<VideoProject>, StoreError> {
        self.store.load()
    }

    pub fn find(&self, id: &str) -> Result<Option<VideoProject>, StoreError> {
        Ok(self.store.load()?.into_iter().find(|p| p.id == id))
    }

    pub fn append(&self, project: VideoProject) -> Result<VideoProject, StoreError> {
        let mut projects = self.store.load()?;
        if projects.iter().any(|p| p.id == project.id) {
            return Err(StoreError::DuplicateId(project.id));
        }

        projects.push(project.clone());
        self.store.save(&projects)?;
        Ok(project)
    }

    /// Builds the record for a finished generation under a fresh id and stores it.
    pub fn record(
        &self,
        request: &GenerationRequest,
        video_url: String,
        thumbnail_url: String,
        created_at: OffsetDateTime,
    ) -> Result<VideoProject, StoreError> {
        loop {
            let project = VideoProject::new(
                new_project_id(),
                request,
                video_url.clone(),
                thumbnail_url.clone(),
                created_at,
            );

            match self.append(project) {
                Ok(project) => {
                    info!("Saved project {} ({})", project.id, project.title);
                    return Ok(project);
                }
                Err(StoreError::DuplicateId(id)) => warn!("Project id {} already taken", id),
                Err(e) => return Err(e),
            }
        }
    }

    /// Returns `false` when no project had that id.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut projects = self.store.load()?;
        let before = projects.len();
        projects.retain(|p| p.id != id);

        if projects.len() == before {
            return Ok(false);
        }

        self.store.save(&projects)?;
        info!("Deleted project {}", id);
        Ok(true)
    }
}
