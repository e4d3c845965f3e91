/// Type alias for Result with anyhow::Error as the error type.
/// Used by the application and adapter layers; the domain layer returns
/// the typed `BomResult` instead.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
