use error_stack::Report;
use ron::de::SpannedError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use tracing::subscriber::SetGlobalDefaultError;

#[derive(thiserror::Error, Debug)]
pub enum IouvisErrorKind {
    #[error("General Error: {0}")]
    General(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

#[derive(Debug)]
pub struct IouvisError(pub Report<IouvisErrorKind>);

impl Display for IouvisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl IouvisError {
    #[track_caller]
    pub fn new(error: IouvisErrorKind) -> IouvisError {
        IouvisError(Report::new(error))
    }

    #[track_caller]
    pub fn change_context<S: Into<String>>(self, message: S) -> Self {
        Self(
            self.0
                .change_context(IouvisErrorKind::General(message.into())),
        )
    }

    pub fn kind(&self) -> &IouvisErrorKind {
        self.0.current_context()
    }
}

pub type IouvisResult<T> = Result<T, IouvisError>;

impl<T> From<T> for IouvisError
where
    for<'a> &'a T: Into<IouvisErrorKind>,
    T: Error + Send + Sync + 'static,
{
    #[track_caller]
    fn from(error: T) -> Self {
        let kind: IouvisErrorKind = (&error).into();
        let report = Report::new(error);
        let report = report.change_context(kind);
        Self(report)
    }
}

impl From<&std::io::Error> for IouvisErrorKind {
    #[track_caller]
    fn from(error: &std::io::Error) -> Self {
        Self::General(error.to_string())
    }
}

impl From<&SpannedError> for IouvisErrorKind {
    #[track_caller]
    fn from(error: &SpannedError) -> Self {
        Self::Config(format!("RON Error: {}", error))
    }
}

impl From<&log::SetLoggerError> for IouvisErrorKind {
    #[track_caller]
    fn from(error: &log::SetLoggerError) -> Self {
        Self::General(format!("Failed to install log bridge: {}", error))
    }
}

impl From<&SetGlobalDefaultError> for IouvisErrorKind {
    #[track_caller]
    fn from(error: &SetGlobalDefaultError) -> Self {
        Self::General(format!("Failed to install subscriber: {}", error))
    }
}

impl From<String> for IouvisErrorKind {
    #[track_caller]
    fn from(error: String) -> Self {
        Self::General(error)
    }
}

impl From<&str> for IouvisError {
    #[track_caller]
    fn from(error: &str) -> Self {
        Self(Report::new(IouvisErrorKind::General(error.to_string())))
    }
}

#[macro_export]
macro_rules! bail {
    ($($args:tt)+) => {
        return Err($crate::result::IouvisError::new($crate::result::IouvisErrorKind::General(format!($($args)+).into())))
    }
}

#[macro_export]
macro_rules! err {
    ($($args:tt)+) => {
        $crate::result::IouvisError::new($crate::result::IouvisErrorKind::General(format!($($args)+).into()))
    };
}

#[macro_export]
macro_rules! config_bail {
    ($($args:tt)+) => {
        return Err($crate::result::IouvisError::new($crate::result::IouvisErrorKind::Config(format!($($args)+).into())))
    }
}

#[macro_export]
macro_rules! context {
    ($fmt:expr $(, $($args:expr),+)? => $block:block) => {
        {
            $block
        }.map_err(|e: $crate::result::IouvisError| e.change_context(format!(concat!("Failed to ",$fmt) $(, $($args)+)?)))
    };
}
pub use context;
