use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to or initialize the in-memory test database.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to read from or write to the test session.
    #[error(transparent)]
    Session(#[from] tower_sessions::session::Error),
}
