use thiserror::Error;

#[derive(Error, Debug)]
pub enum MessengerError {
    #[error("Platform error: {0}")]
    Platform(String),

    #[error("User lookup error: {0}")]
    UserLookup(String),

    #[error("Presence signal error: {0}")]
    Presence(String),

    #[error("Message send error: {0}")]
    Send(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MessengerError>;
