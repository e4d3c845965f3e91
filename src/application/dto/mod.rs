/// Data Transfer Objects for the application layer
///
/// DTOs carry requests in from the CLI and results out to the formatters,
/// keeping the domain layer free of presentation concerns.
mod output_format;
mod query_request;
mod query_response;

pub use output_format::OutputFormat;
pub use query_request::{QueryKind, QueryRequest};
pub use query_response::{QueryResponse, QueryResult};
