/// Domain layer - BoM value objects, traversal and similarity services
///
/// Everything in here is pure: no file access, no printing.
pub mod domain;
pub mod policies;
pub mod services;
