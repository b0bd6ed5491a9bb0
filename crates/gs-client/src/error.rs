use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend error: {message}")]
    Backend { message: String },

    #[error("malformed reply: {what}")]
    MalformedReply { what: String },
}
