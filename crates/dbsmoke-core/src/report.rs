use crate::error::CheckError;

/// Line printed to stdout when the connection attempt succeeds.
pub const SUCCESS_LINE: &str = "✅ Database connection established.";

/// Prefix of the line printed to stdout when the connection attempt fails.
pub const FAILURE_MARKER: &str = "❌ Connection failed: ";

/// Render the failure line: the marker followed by the error description.
pub fn failure_line(err: &CheckError) -> String {
    format!("{FAILURE_MARKER}{err}")
}
