use crate::error::PacerError;

pub type PacerResult<T> = Result<T, PacerError>;
