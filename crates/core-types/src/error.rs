use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown unit '{0}': expected 'value' or 'quantity'")]
    UnknownUnit(String),

    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),
}
