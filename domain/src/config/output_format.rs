//! Output format value object

use serde::{Deserialize, Serialize};

/// How a batch run is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every game result followed by the statistics report
    Full,
    /// Only the statistics report (default)
    #[default]
    Summary,
    /// Results and statistics as JSON
    Json,
}
