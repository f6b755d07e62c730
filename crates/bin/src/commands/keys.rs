//! Keys command - lists the top-level keys of a document.

use colltools::{List, Value, iter};

use crate::cli::DocumentArgs;
use crate::document;
use crate::output::{OutputFormat, render_value};

/// Run the keys command
pub fn run(
    args: &DocumentArgs,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = document::load(&args.file)?;

    match format {
        OutputFormat::Human => {
            for name in key_names(&document) {
                println!("{name}");
            }
        }
        OutputFormat::Json => {
            let keys = Value::from(iter::keys(&document));
            println!("{}", render_value(&keys, pretty)?);
        }
    }
    Ok(())
}

/// Keys of `document` as display strings, in enumeration order
pub fn key_names(document: &Value) -> Vec<String> {
    let keys: List = iter::keys(document);
    keys.iter().map(ToString::to_string).collect()
}
