//! Error macros for wayfind

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::WayfindError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::WayfindError::UsageError($msg.to_string()))
    };
}

/// Macro for creating malformed input errors
#[macro_export]
macro_rules! bail_malformed {
    ($source:expr, $line:expr, $reason:expr) => {
        return Err($crate::error::WayfindError::malformed(
            $source, $line, $reason,
        ))
    };
}
