//! Merge command - extends the first document with the rest.

use colltools::{Value, ops::extend};

use crate::cli::MergeArgs;
use crate::document;
use crate::output::{OutputFormat, render_value};

/// Merges `sources` into `destination`, left to right
pub fn merge(deep: bool, mut destination: Value, sources: &[Value]) -> Value {
    if !destination.is_object() {
        tracing::warn!(
            kind = destination.type_name(),
            "destination is not an object or array; sources are ignored"
        );
    }
    extend(deep, &mut destination, sources);
    destination
}

/// Run the merge command
pub fn run(
    args: &MergeArgs,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut documents = args
        .files
        .iter()
        .map(|path| document::load(path))
        .collect::<colltools::Result<Vec<_>>>()?;
    let destination = documents.remove(0);
    tracing::info!(sources = documents.len(), deep = args.deep, "merging documents");

    let merged = merge(args.deep, destination, &documents);

    // Human output is always indented
    let pretty = pretty || format == OutputFormat::Human;
    println!("{}", render_value(&merged, pretty)?);
    Ok(())
}
