//! Error macros for graphwalk

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a vertex index outside `[0, bound)`
#[macro_export]
macro_rules! ensure_vertex {
    ($context:expr, $index:expr, $bound:expr) => {
        if $index >= $bound {
            return Err($crate::error::GraphError::out_of_range(
                $context, $index, $bound,
            ));
        }
    };
}
