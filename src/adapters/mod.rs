/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: CSV readers, report
/// writers, console progress and the output formatters.
pub mod outbound;
