use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("not found")]
    NotFound,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email is already taken")]
    DuplicateEmail,
}

pub type StoreResult<T> = Result<T, StoreError>;
