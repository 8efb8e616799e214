use std::result::Result as StdResult;

/// A specialized `Result` type for this crate.
pub type Result<T> = StdResult<T, Error>;

/// Represents all the ways encoding or decoding a parameter value can fail.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The supplied parameter value cannot be sent as `varbinary`.
    ///
    /// Returned from [`VarBinary::validate`][crate::VarBinary::validate],
    /// the sole rejection point on the encode path. No bytes have been
    /// written when this is returned.
    #[error("invalid parameter value: {0}")]
    InvalidValue(String),

    /// Unexpected or invalid data encountered while decoding.
    #[error("encountered unexpected or invalid data: {0}")]
    Protocol(String),
}

// Format an error message as a `Protocol` error
macro_rules! err_protocol {
    ($expr:expr) => {
        $crate::error::Error::Protocol($expr.into())
    };

    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::Error::Protocol(format!($fmt, $($arg)*))
    };
}
