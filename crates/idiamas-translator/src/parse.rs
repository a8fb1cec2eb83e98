use idiamas_types::{GrammarEntry, TranslationResult};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("response has no message content")]
    EmptyResponse,

    #[error("no JSON object in model output")]
    NoJsonObject,

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("missing or empty field '{0}'")]
    MissingField(&'static str),
}

#[derive(Deserialize)]
struct ChatCompletion {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Extract `choices[0].message.content` from a chat-completions body
pub fn completion_content(body: &str) -> Result<String, ParseError> {
    let completion: ChatCompletion = serde_json::from_str(body)?;
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .filter(|c| !c.trim().is_empty())
        .ok_or(ParseError::EmptyResponse)
}

/// Parse the model's JSON payload into a [`TranslationResult`].
///
/// Text around the outermost `{...}` is ignored. `translation` is mandatory;
/// a missing `original` falls back to `source_text`. Grammar items that are not
/// objects, or that have neither a word nor an explanation, are dropped.
pub fn parse_translation_payload(
    content: &str,
    source_text: &str,
) -> Result<TranslationResult, ParseError> {
    let start = content.find('{').ok_or(ParseError::NoJsonObject)?;
    let end = content.rfind('}').ok_or(ParseError::NoJsonObject)?;
    if end < start {
        return Err(ParseError::NoJsonObject);
    }

    let value: Value = serde_json::from_str(&content[start..=end])?;
    let Value::Object(object) = value else {
        return Err(ParseError::NoJsonObject);
    };

    let translated = field(&object, "translation");
    if translated.is_empty() {
        return Err(ParseError::MissingField("translation"));
    }

    let original = match field(&object, "original") {
        o if o.is_empty() => source_text.trim().to_string(),
        o => o,
    };

    let grammar_entries = match object.get("grammar") {
        Some(Value::Array(items)) => items.iter().filter_map(grammar_entry).collect(),
        Some(other) => {
            tracing::warn!("Ignoring non-array grammar field: {}", kind_of(other));
            Vec::new()
        }
        None => Vec::new(),
    };

    Ok(TranslationResult {
        original,
        translated,
        grammar_entries,
    })
}

fn grammar_entry(item: &Value) -> Option<GrammarEntry> {
    let Value::Object(object) = item else {
        return None;
    };

    let entry = GrammarEntry {
        word: field(object, "word"),
        function: field(object, "function"),
        explanation: field(object, "explanation"),
        additional_info: optional_field(object, "additional_info"),
        examples: optional_field(object, "examples"),
        difficulty: optional_field(object, "difficulty"),
    };

    (!entry.word.is_empty() || !entry.explanation.is_empty()).then_some(entry)
}

fn field(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| match v {
                Value::String(s) => s.trim().to_string(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("; "),
        Some(other) => other.to_string(),
    }
}

fn optional_field(object: &Map<String, Value>, key: &str) -> Option<String> {
    Some(field(object, key)).filter(|s| !s.is_empty())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
