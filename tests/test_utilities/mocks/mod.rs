/// Mock implementations for testing
mod mock_bom_reader;
mod mock_progress_reporter;
mod mock_sku_list_reader;

pub use mock_bom_reader::MockBomReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_sku_list_reader::MockSkuListReader;
