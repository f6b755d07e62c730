//! Empty command - reports whether a document is empty.

use colltools::ops::is_empty;

use crate::cli::DocumentArgs;
use crate::document;
use crate::output::{OutputFormat, print_answer};

/// Run the empty command, returning whether the document is empty
pub fn run(args: &DocumentArgs, format: OutputFormat) -> Result<bool, Box<dyn std::error::Error>> {
    let document = document::load(&args.file)?;
    let empty = is_empty(&document);
    print_answer("empty", empty, format)?;
    Ok(empty)
}
