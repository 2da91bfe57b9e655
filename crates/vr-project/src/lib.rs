//! vr-project: range set document format, validation and action scripts.

pub mod script;
pub mod schema;
pub mod validate;

pub use schema::*;
pub use script::{ActionDef, ActionScript, replay};
pub use validate::{LATEST_VERSION, ValidationError, validate_document};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<RangeSetDocument> {
    let content = std::fs::read_to_string(path)?;
    let document: RangeSetDocument = serde_yaml::from_str(&content)?;
    validate_document(&document)?;
    Ok(document)
}

pub fn save_yaml(path: &std::path::Path, document: &RangeSetDocument) -> ProjectResult<()> {
    validate_document(document)?;
    let content = serde_yaml::to_string(document)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<RangeSetDocument> {
    let content = std::fs::read_to_string(path)?;
    let document: RangeSetDocument = serde_json::from_str(&content)?;
    validate_document(&document)?;
    Ok(document)
}

pub fn save_json(path: &std::path::Path, document: &RangeSetDocument) -> ProjectResult<()> {
    validate_document(document)?;
    let content = serde_json::to_string_pretty(document)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` as JSON, anything else as YAML.
pub fn load_document(path: &std::path::Path) -> ProjectResult<RangeSetDocument> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => load_json(path),
        _ => load_yaml(path),
    }
}

/// Save by extension: `.json` as JSON, anything else as YAML.
pub fn save_document(path: &std::path::Path, document: &RangeSetDocument) -> ProjectResult<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => save_json(path, document),
        _ => save_yaml(path, document),
    }
}

pub fn load_action_script(path: &std::path::Path) -> ProjectResult<ActionScript> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}
