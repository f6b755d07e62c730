//! Output formatting helpers for human-readable and JSON output.

use colltools::Value;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Renders a document as JSON text.
pub fn render_value(value: &Value, pretty: bool) -> colltools::Result<String> {
    value.to_json_string(pretty)
}

/// Print a boolean answer in the selected format.
///
/// Human output is the bare word; JSON output wraps it under `field`.
pub fn print_answer(field: &str, answer: bool, format: OutputFormat) -> colltools::Result<()> {
    match format {
        OutputFormat::Human => println!("{answer}"),
        OutputFormat::Json => {
            let mut object = serde_json::Map::new();
            object.insert(field.to_string(), answer.into());
            println!("{}", serde_json::to_string(&object)?);
        }
    }
    Ok(())
}
