use std::sync::atomic::{AtomicBool, Ordering};

use time::OffsetDateTime;
use tracing::{error, info};
use validator::Validate;

use super::error::LifecycleError;
use super::proxy_client::ProxyClient;
use super::state::{
    JobProgress, JobState, MSG_ALMOST_READY, MSG_GENERATING, MSG_PREPARING, MSG_READY,
    MSG_SENDING,
};
use crate::modules::generation::model::GenerationRequest;
use crate::modules::project::{model::placeholder_thumbnail_url, ProjectService, VideoProject};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedVideo {
    pub video_url: String,
    pub thumbnail_url: String,
    pub completed_at: OffsetDateTime,
}

/// Runs one generation attempt at a time against the proxy.
pub struct GenerationLifecycle {
    client: ProxyClient,
    thumbnail_base_url: String,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self, LifecycleError> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self(flag))
            .map_err(|_| LifecycleError::AlreadyInProgress)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl GenerationLifecycle {
    pub fn new(client: ProxyClient, thumbnail_base_url: &str) -> Self {
        Self {
            client,
            thumbnail_base_url: thumbnail_base_url.to_string(),
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Drives one attempt, reporting progress through `on_progress`.
    ///
    /// A concurrent call fails with [`LifecycleError::AlreadyInProgress`]
    /// without emitting progress, so it never clobbers the running attempt's
    /// state. Nothing is retried.
    pub async fn generate<F>(
        &self,
        request: &GenerationRequest,
        mut on_progress: F,
    ) -> Result<GeneratedVideo, LifecycleError>
    where
        F: FnMut(JobProgress) + Send,
    {
        let _guard = InFlightGuard::acquire(&self.in_flight)?;

        match self.run(request, &mut on_progress).await {
            Ok(video) => Ok(video),
            Err(e) => {
                error!("Video generation failed: {}", e);
                on_progress(JobProgress::new(JobState::Failed, &e.to_string()));
                Err(e)
            }
        }
    }

    async fn run<F>(
        &self,
        request: &GenerationRequest,
        on_progress: &mut F,
    ) -> Result<GeneratedVideo, LifecycleError>
    where
        F: FnMut(JobProgress) + Send,
    {
        if request.script.trim().is_empty() {
            return Err(LifecycleError::EmptyScript);
        }
        request
            .validate()
            .map_err(|e| LifecycleError::InvalidRequest(e.to_string()))?;

        info!(
            "Requesting video: style {}, voice {}, {}s",
            request.style, request.voice, request.duration
        );
        on_progress(JobProgress::new(JobState::Submitting, MSG_PREPARING));
        on_progress(JobProgress::new(JobState::Submitting, MSG_SENDING));
        on_progress(JobProgress::new(JobState::Polling, MSG_GENERATING));

        let video_url = self.client.generate(request).await?;
        on_progress(JobProgress::new(JobState::Polling, MSG_ALMOST_READY));

        let completed_at = OffsetDateTime::now_utc();
        let thumbnail_url = placeholder_thumbnail_url(&self.thumbnail_base_url, completed_at);

        on_progress(JobProgress::new(JobState::Ready, MSG_READY));
        Ok(GeneratedVideo {
            video_url,
            thumbnail_url,
            completed_at,
        })
    }
}

/// Lifecycle plus project bookkeeping: a project exists only for a completed attempt.
pub struct Studio {
    lifecycle: GenerationLifecycle,
    projects: ProjectService,
}

impl Studio {
    pub fn new(lifecycle: GenerationLifecycle, projects: ProjectService) -> Self {
        Self {
            lifecycle,
            projects,
        }
    }

    pub fn projects(&self) -> &ProjectService {
        &self.projects
    }

    pub fn lifecycle(&self) -> &GenerationLifecycle {
        &self.lifecycle
    }

    /// A failed save is reported as `Failed`, replacing the lifecycle's `Ready`.
    pub async fn create_video<F>(
        &self,
        request: &GenerationRequest,
        mut on_progress: F,
    ) -> Result<VideoProject, LifecycleError>
    where
        F: FnMut(JobProgress) + Send,
    {
        let video = self.lifecycle.generate(request, &mut on_progress).await?;

        self.projects
            .record(request, video.video_url, video.thumbnail_url, video.completed_at)
            .map_err(|e| {
                error!("Generated video could not be saved: {}", e);
                let e = LifecycleError::from(e);
                on_progress(JobProgress::new(JobState::Failed, &e.to_string()));
                e
            })
    }
}
