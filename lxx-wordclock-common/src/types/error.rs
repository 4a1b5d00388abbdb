use thiserror::Error;

pub type SystemResult<T> = core::result::Result<T, SystemError>;

/// 时间超出范围（小时 0-23，分钟 0-59）
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid time {hour}:{minute:02} (hour must be 0-23, minute 0-59)")]
pub struct InvalidTimeError {
    pub hour: u8,
    pub minute: u8,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemError {
    #[error(transparent)]
    InvalidTime(#[from] InvalidTimeError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("time source unavailable")]
    TimeSource,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Malformed(&'static str),

    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    #[error("canvas too small for the letter grid")]
    CanvasTooSmall,

    #[error("pixel out of bounds")]
    OutOfBounds,

    #[error("image encoding failed")]
    EncodeFailed,

    #[error("image decoding failed")]
    DecodeFailed,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("read failed")]
    ReadFailed,

    #[error("write failed")]
    WriteFailed,
}
