use prewarn_predict::schema::{assessment_json_schema, response_schema};
use serde_json::{Value, json};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `prewarn schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let format = match flags.format {
        OutputFormat::Raw => OutputFormat::Raw,
        OutputFormat::Json | OutputFormat::Table => OutputFormat::Json,
    };
    output(&schemas()?, format)
}

/// The Gemini `responseSchema` and the JSON Schema responses are checked against.
fn schemas() -> anyhow::Result<Value> {
    Ok(json!({
        "responseSchema": response_schema(),
        "jsonSchema": assessment_json_schema()?,
    }))
}

#[cfg(test)]
mod tests {
    use super::schemas;

    #[test]
    fn both_schemas_require_the_same_fields() {
        let value = schemas().unwrap();
        let mut gemini = value["responseSchema"]["required"].as_array().unwrap().clone();
        let mut json_schema = value["jsonSchema"]["required"].as_array().unwrap().clone();
        gemini.sort_by_key(ToString::to_string);
        json_schema.sort_by_key(ToString::to_string);
        assert_eq!(gemini, json_schema);
    }
}
