//! Crime feedback models, identified by creation `timestamp`.

use serde::{Deserialize, Serialize};

/// A user-submitted crime report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserFeedback {
    /// Creation timestamp; acts as the feedback's identifier
    pub timestamp: String,
    pub lat: f64,
    pub lng: f64,
    pub tipo: String,
    pub comentario: String,
    pub fecha: String,
}

/// Body of `POST /user-feedback-crime`.
#[derive(Debug, Clone, Serialize)]
pub struct UserFeedbackRequest {
    pub lat: f64,
    pub lng: f64,
    pub tipo: String,
    pub comentario: String,
    pub fecha: String,
}

/// Body of `PUT /user-feedback-crime`.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackUpdateRequest {
    pub timestamp: String,
    pub comentario: String,
    pub tipo: String,
}

/// Body of `DELETE /user-feedback-crime`.
#[derive(Debug, Clone, Serialize)]
pub struct FeedbackDeleteRequest {
    pub timestamp: String,
}

/// Response envelope of `GET /user-feedback-crime`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackListResponse {
    pub feedbacks: Vec<UserFeedback>,
    pub total: usize,
}

/// Tolerant acknowledgement for feedback create/update responses.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackAck {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `DELETE /user-feedback-crime`.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackDeleteResponse {
    pub status: String,
    #[serde(default)]
    pub deleted: u32,
}
