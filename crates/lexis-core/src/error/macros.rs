//! Error macros for lexis

/// Macro for returning validation errors
#[macro_export]
macro_rules! bail_validation {
    ($msg:expr) => {
        return Err($crate::error::LexisError::validation($msg))
    };
}

/// Macro for returning invalid argument errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::LexisError::invalid_argument($context, $value))
    };
}
