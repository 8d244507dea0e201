use crate::application::read_models::ReportReadModel;
use crate::shared::Result;

/// ReportFormatter port for rendering the finished report
///
/// This port abstracts the rendering of the categorized report read model
/// into its final textual representation.
pub trait ReportFormatter {
    /// Formats the report read model into output text
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn format(&self, model: &ReportReadModel) -> Result<String>;
}
