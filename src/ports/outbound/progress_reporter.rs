/// ProgressReporter port for status messages during a run
///
/// Messages go somewhere other than the report itself (stderr for the
/// CLI) so they never mix with the rendered output.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports progress through a counted task
    ///
    /// # Arguments
    /// * `current` - Items done so far
    /// * `total` - Total expected items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of a counted task
    fn report_completion(&self, message: &str);
}
