//! CLI output: error mapping from command failures to a stable CLI surface.

use crate::error::ApiError;

/// Map a command failure to one line for stderr.
///
/// Pipeline errors print their own message; anything else prints the full
/// context chain (e.g. "Failed to read post file x.json: No such file").
pub fn map_error(e: &anyhow::Error) -> String {
    match e.downcast_ref::<ApiError>() {
        Some(api_error) => format!("Error: {}", api_error),
        None => format!("Error: {:#}", e),
    }
}
