/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define how the application core reaches the file system,
/// the console and the output formats.
pub mod bom_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod sku_list_reader;

pub use bom_reader::BomReader;
pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use sku_list_reader::SkuListReader;
