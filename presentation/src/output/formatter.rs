//! Output formatter trait

use werewolf_application::RunBatchOutput;
use werewolf_domain::OutputFormat;

/// Trait for formatting batch results
pub trait OutputFormatter {
    /// Every game followed by the statistics report
    fn format(&self, output: &RunBatchOutput) -> String;

    /// Format as JSON
    fn format_json(&self, output: &RunBatchOutput) -> String;

    /// Statistics report only (concise output)
    fn format_summary(&self, output: &RunBatchOutput) -> String;

    fn render(&self, output: &RunBatchOutput, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(output),
            OutputFormat::Summary => self.format_summary(output),
            OutputFormat::Json => self.format_json(output),
        }
    }
}
