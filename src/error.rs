use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

impl serde::Serialize for AppError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
