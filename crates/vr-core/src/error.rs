use thiserror::Error;

pub type VrResult<T> = Result<T, VrError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VrError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
