//! Equal command - deep structural comparison of two documents.

use colltools::ops::is_equal;

use crate::cli::EqualArgs;
use crate::document;
use crate::output::{OutputFormat, print_answer};

/// Run the equal command, returning whether the documents are equal
pub fn run(args: &EqualArgs, format: OutputFormat) -> Result<bool, Box<dyn std::error::Error>> {
    let left = document::load(&args.left)?;
    let right = document::load(&args.right)?;

    let equal = is_equal(&left, &right);
    tracing::debug!(equal, "compared documents");
    print_answer("equal", equal, format)?;
    Ok(equal)
}
