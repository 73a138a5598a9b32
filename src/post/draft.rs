//! The in-memory post being authored, and its hand-off to the upload service.

use crate::{
    foundation::error::{LoopedError, LoopedResult},
    overlay::editor::ApplyOutcome,
    render::scorecard::{RenderOptions, ScorecardGraphic, TextColor, render_if_entered},
    score::grid::ScoreGrid,
};

/// Why the overlay editor cannot be opened yet.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    #[error("Please upload at least one photo first!")]
    NoPhoto,
    #[error("Please fill in your scorecard first!")]
    NoScorecard,
}

/// File storage for post images.
pub trait UploadService {
    /// Store `bytes` and return a public URL for them.
    fn upload(&mut self, bytes: &[u8]) -> LoopedResult<String>;
}

/// Fields sent to the entity store when a post is created.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PostSubmission {
    /// Cover image; equal to `image_urls[0]`.
    pub image_url: String,
    pub image_urls: Vec<String>,
    pub caption: String,
    pub description: String,
    pub course_name: String,
    pub score: String,
    pub scorecard: ScoreGrid,
}

#[derive(Clone, Debug, Default)]
pub struct PostDraft {
    /// Encoded photos in display order; the first is the cover.
    pub images: Vec<Vec<u8>>,
    pub scorecard: ScoreGrid,
    pub text_color: TextColor,
    pub course_name: String,
    pub caption: String,
    pub description: String,
    /// Free-text score; falls back to the scorecard total when empty.
    pub score_override: String,
}

impl PostDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            text_color: self.text_color,
            course_name: Some(self.course_name.clone()).filter(|s| !s.is_empty()),
        }
    }

    /// Current scorecard graphic, or `None` while no hole has been entered.
    pub fn scorecard_graphic(&self) -> Option<ScorecardGraphic> {
        render_if_entered(&self.scorecard, &self.render_options())
    }

    /// Check that the cover photo and a scorecard are both available for overlaying.
    pub fn can_add_overlay(&self) -> Result<ScorecardGraphic, DraftError> {
        if self.images.is_empty() {
            return Err(DraftError::NoPhoto);
        }
        self.scorecard_graphic().ok_or(DraftError::NoScorecard)
    }

    /// Take the editor's result. A composite replaces the cover photo; `Unchanged` keeps it.
    pub fn accept_overlay(&mut self, outcome: ApplyOutcome) {
        if let ApplyOutcome::Composite(img) = outcome
            && let Some(cover) = self.images.first_mut()
        {
            *cover = img.png;
        }
    }

    pub fn score(&self) -> String {
        if self.score_override.is_empty() {
            self.scorecard.aggregate().total.to_string()
        } else {
            self.score_override.clone()
        }
    }

    /// Upload every image in order and build the submission.
    #[tracing::instrument(skip(self, uploader), fields(images = self.images.len()))]
    pub fn submit(&self, uploader: &mut dyn UploadService) -> LoopedResult<PostSubmission> {
        if self.images.is_empty() {
            return Err(LoopedError::validation("Please upload at least one image."));
        }

        let image_urls = self
            .images
            .iter()
            .map(|bytes| uploader.upload(bytes))
            .collect::<LoopedResult<Vec<_>>>()?;

        Ok(PostSubmission {
            image_url: image_urls[0].clone(),
            image_urls,
            caption: self.caption.clone(),
            description: self.description.clone(),
            course_name: self.course_name.clone(),
            score: self.score(),
            scorecard: self.scorecard,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/post/draft.rs"]
mod tests;
