use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::RuleError;
use crate::rule::Rule;

/// On-disk encodings accepted for rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    Yaml,
    Json,
}

impl RuleFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|value| value.to_str()) {
            Some("yaml" | "yml") => Some(RuleFormat::Yaml),
            Some("json") => Some(RuleFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RuleDocument {
    rules: Vec<Rule>,
}

/// Reads a rule file, or every rule file of a directory, sorted by priority.
pub fn load_rules(path: impl AsRef<Path>) -> Result<Vec<Rule>, RuleError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RuleError::MissingPath(path.display().to_string()));
    }

    let mut rules = if path.is_dir() {
        load_from_directory(path)?
    } else {
        load_from_file(path)?
    };

    deduplicate(&rules)?;
    rules.sort_by(|a, b| a.priority.cmp(&b.priority).then(a.id.cmp(&b.id)));
    info!(path = %path.display(), count = rules.len(), "loaded rules");

    Ok(rules)
}

/// Serializes a rule table as a `rules:` document.
pub fn render_rules(rules: &[Rule], format: RuleFormat) -> Result<String, RuleError> {
    let document = RuleDocument {
        rules: rules.to_vec(),
    };
    match format {
        RuleFormat::Yaml => {
            serde_yaml::to_string(&document).map_err(|err| RuleError::Serialize(err.to_string()))
        }
        RuleFormat::Json => serde_json::to_string_pretty(&document)
            .map_err(|err| RuleError::Serialize(err.to_string())),
    }
}

fn load_from_directory(path: &Path) -> Result<Vec<Rule>, RuleError> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(path).map_err(|err| RuleError::from_io(path, err))? {
        let entry = entry.map_err(|err| RuleError::from_io(path, err))?;
        let file_type = entry
            .file_type()
            .map_err(|err| RuleError::from_io(entry.path(), err))?;
        if file_type.is_dir() || RuleFormat::from_path(&entry.path()).is_none() {
            continue;
        }
        files.push(entry.path());
    }
    files.sort();

    let mut rules = Vec::new();
    for file in files {
        rules.append(&mut load_from_file(&file)?);
    }
    Ok(rules)
}

fn load_from_file(path: &Path) -> Result<Vec<Rule>, RuleError> {
    let raw = fs::read_to_string(path).map_err(|err| RuleError::from_io(path, err))?;
    let format = RuleFormat::from_path(path).unwrap_or(RuleFormat::Yaml);
    parse_rules(&raw, format, path)
}

/// Top-level layout of a rule file; decides which error is reported.
#[derive(Debug, Clone, Copy)]
enum Shape {
    Document,
    List,
    Single,
}

impl Shape {
    fn label(self) -> &'static str {
        match self {
            Shape::Document => "rules document",
            Shape::List => "rule list",
            Shape::Single => "rule",
        }
    }
}

fn parse_rules(raw: &str, format: RuleFormat, path: &Path) -> Result<Vec<Rule>, RuleError> {
    match format {
        RuleFormat::Yaml => parse_yaml(raw),
        RuleFormat::Json => parse_json(raw),
    }
    .map_err(|message| RuleError::parse_error(path, message))
}

fn parse_yaml(raw: &str) -> Result<Vec<Rule>, String> {
    let value: serde_yaml::Value = serde_yaml::from_str(raw).map_err(|err| err.to_string())?;
    let shape = match &value {
        serde_yaml::Value::Mapping(map) if map.contains_key("rules") => Shape::Document,
        serde_yaml::Value::Sequence(_) => Shape::List,
        _ => Shape::Single,
    };

    match shape {
        Shape::Document => serde_yaml::from_value::<RuleDocument>(value).map(|doc| doc.rules),
        Shape::List => serde_yaml::from_value::<Vec<Rule>>(value),
        Shape::Single => serde_yaml::from_value::<Rule>(value).map(|rule| vec![rule]),
    }
    .map_err(|err| format!("invalid {}: {}", shape.label(), err))
}

fn parse_json(raw: &str) -> Result<Vec<Rule>, String> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|err| err.to_string())?;
    let shape = match &value {
        serde_json::Value::Object(map) if map.contains_key("rules") => Shape::Document,
        serde_json::Value::Array(_) => Shape::List,
        _ => Shape::Single,
    };

    match shape {
        Shape::Document => serde_json::from_value::<RuleDocument>(value).map(|doc| doc.rules),
        Shape::List => serde_json::from_value::<Vec<Rule>>(value),
        Shape::Single => serde_json::from_value::<Rule>(value).map(|rule| vec![rule]),
    }
    .map_err(|err| format!("invalid {}: {}", shape.label(), err))
}

fn deduplicate(rules: &[Rule]) -> Result<(), RuleError> {
    let mut seen = HashSet::new();
    for rule in rules {
        if !seen.insert(rule.id.as_str()) {
            return Err(RuleError::DuplicateRule {
                id: rule.id.clone(),
            });
        }
    }
    Ok(())
}
