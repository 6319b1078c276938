//! Error macros for graphsteps

/// Macro for rejecting malformed graph input
#[macro_export]
macro_rules! bail_invalid_input {
    ($($arg:tt)*) => {
        return Err($crate::error::GraphStepsError::InvalidInput {
            reason: format!($($arg)*),
        })
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphStepsError::UsageError($msg.to_string()))
    };
}
