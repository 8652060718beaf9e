use thiserror::Error;

use crate::post::PostRecord;
use crate::route::PostId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Server-reported failure; the message is rendered verbatim.
    #[error("{0}")]
    Server(String),
    #[error("connection failure: {0}")]
    Transport(String),
    #[error("unexpected response from server")]
    Protocol,
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Completion callback for an asynchronous API operation.
pub type Completion<T> = Box<dyn FnOnce(ApiResult<T>)>;

/// Narrow interface to the remote forum API. Transport, response caching
/// and request deduplication live behind it.
pub trait PostApi {
    fn fetch_post_by_id(&self, id: PostId, done: Completion<Option<PostRecord>>);
    fn update_post(&self, id: PostId, title: String, text: String, done: Completion<()>);
}

#[derive(Hash, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum ClientRequest {
    FetchPostById {
        request_id: u64,
        id: PostId,
    },
    UpdatePost {
        request_id: u64,
        id: PostId,
        title: String,
        text: String,
    },
}

#[derive(Hash, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum ServerResponse {
    Post {
        request_id: u64,
        post: Option<PostRecord>,
    },
    PostUpdated {
        request_id: u64,
    },
    RequestFailed {
        request_id: u64,
        message: String,
    },
}

impl ServerResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            ServerResponse::Post { request_id, .. }
            | ServerResponse::PostUpdated { request_id }
            | ServerResponse::RequestFailed { request_id, .. } => *request_id,
        }
    }
}
