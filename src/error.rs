use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid form body `{0}`")]
    InvalidFormBody(String),

    #[error("Invalid extFields `{0}`")]
    InvalidExtFields(#[from] serde_json::Error),
}
