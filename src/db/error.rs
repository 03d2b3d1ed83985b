use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No row with this id. Only raised by updates; reads and deletes
    /// report absence through `Option`.
    #[error("{entity} with ID {id} not found.")]
    NotFound { entity: &'static str, id: i64 },

    #[error(transparent)]
    Database(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
