use crate::post::PostRecord;
use crate::route::PostId;

pub const TITLE_REQUIRED_MESSAGE: &'static str = "please enter a title";
pub const TEXT_REQUIRED_MESSAGE: &'static str = "please enter some text";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormValues {
    pub title: String,
    pub text: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldErrors {
    pub title: Option<&'static str>,
    pub text: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.text.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

pub fn validate(values: &FormValues) -> FieldErrors {
    FieldErrors {
        title: values.title.is_empty().then_some(TITLE_REQUIRED_MESSAGE),
        text: values.text.is_empty().then_some(TEXT_REQUIRED_MESSAGE),
    }
}

/// Client-side draft of the post being edited, distinct from the record
/// held by the server.
#[derive(Debug)]
pub struct PostForm {
    pub values: FormValues,
    pub errors: FieldErrors,
    pub submission: SubmissionState,
    pub submit_error: Option<String>,
    seeded_from: Option<PostId>,
}

impl PostForm {
    pub fn new() -> Self {
        PostForm {
            values: FormValues::default(),
            errors: FieldErrors::default(),
            submission: SubmissionState::Idle,
            submit_error: None,
            seeded_from: None,
        }
    }

    /// Seed the draft from a freshly loaded record. A record with the id
    /// already seeded keeps in-progress edits; a different id replaces the
    /// draft entirely.
    pub fn seed(&mut self, post: &PostRecord) {
        if self.seeded_from == Some(post.id) {
            return;
        }

        self.values = FormValues {
            title: post.title.clone(),
            text: post.text.clone(),
        };
        self.errors = FieldErrors::default();
        self.submit_error = None;
        self.seeded_from = Some(post.id);
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }
}

impl Default for PostForm {
    fn default() -> Self {
        Self::new()
    }
}
