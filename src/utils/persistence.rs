//! Artifact & Config Persistence
//!
//! Stateless file helpers shared by the training and scoring jobs:
//! - YAML config files parsed into a [`Mapping`]
//! - artifacts written/read as one JSON document per file
//!
//! Every failure is wrapped into [`AppError`] at the operation boundary.
//! Nothing is retried and nothing falls back to a default value.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::models::errors::{AppError, AppResult, ErrorCode};

/// File I/O helpers for config documents and model artifacts
#[derive(Debug, Clone, Copy, Default)]
pub struct PersistenceUtils;

impl PersistenceUtils {
    pub fn new() -> Self {
        Self
    }

    /// Read a YAML file into a mapping.
    ///
    /// Merge keys (`<<: *anchor`) are expanded. An empty document yields an
    /// empty mapping. A document whose top level is not a mapping is rejected.
    pub fn read_yaml_file(&self, path: impl AsRef<Path>) -> AppResult<Mapping> {
        let path = path.as_ref();
        debug!("Reading YAML config {}", path.display());

        match read_yaml_value(path)? {
            Value::Mapping(mapping) => Ok(mapping),
            Value::Null => Ok(Mapping::new()),
            other => Err(AppError::wrap(
                ErrorCode::ConfigRead,
                path,
                format!("expected a mapping at document root, found {}", kind_of(&other)),
            )),
        }
    }

    /// Read a YAML file straight into a typed structure
    pub fn read_yaml_as<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> AppResult<T> {
        let path = path.as_ref();
        debug!("Reading typed YAML config {}", path.display());

        let value = read_yaml_value(path)?;
        serde_yaml::from_value(value).map_err(|e| AppError::wrap(ErrorCode::ConfigRead, path, e))
    }

    /// Serialize `obj` to `path`, replacing any existing file.
    ///
    /// The parent directory must already exist. A failure mid-write can leave
    /// a truncated file behind.
    ///
    /// NaN and infinite floats have no JSON form, so a value holding one is
    /// rejected before the file is touched.
    pub fn save_object<T: Serialize + ?Sized>(path: impl AsRef<Path>, obj: &T) -> AppResult<()> {
        let path = path.as_ref();
        info!("Entering save_object for {}", path.display());

        let tree = serde_yaml::to_value(obj)
            .map_err(|e| AppError::wrap(ErrorCode::ObjectSave, path, e))?;
        if let Some(at) = find_non_finite(&tree, "$") {
            return Err(AppError::wrap(
                ErrorCode::ObjectSave,
                path,
                format!("non-finite float at {at} cannot be stored"),
            ));
        }

        let file = File::create(path).map_err(|e| AppError::wrap(ErrorCode::ObjectSave, path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, obj)
            .map_err(|e| AppError::wrap(ErrorCode::ObjectSave, path, e))?;
        writer
            .flush()
            .map_err(|e| AppError::wrap(ErrorCode::ObjectSave, path, e))?;

        info!("Exited save_object for {}", path.display());
        Ok(())
    }

    /// Deserialize a single value previously written by [`Self::save_object`]
    pub fn load_object<T: DeserializeOwned>(path: impl AsRef<Path>) -> AppResult<T> {
        let path = path.as_ref();
        info!("Entering load_object for {}", path.display());

        let file = File::open(path).map_err(|e| AppError::wrap(ErrorCode::ObjectLoad, path, e))?;
        let obj = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| AppError::wrap(ErrorCode::ObjectLoad, path, e))?;

        info!("Exited load_object for {}", path.display());
        Ok(obj)
    }
}

/// Read and parse one YAML document, expanding merge keys.
///
/// Failures are attributed to the calling operation's line.
#[track_caller]
fn read_yaml_value(path: &Path) -> AppResult<Value> {
    let content = match read_to_string(path) {
        Ok(content) => content,
        Err(e) => return Err(AppError::wrap(ErrorCode::ConfigRead, path, e)),
    };
    let mut value: Value = match serde_yaml::from_str(&content) {
        Ok(value) => value,
        Err(e) => return Err(AppError::wrap(ErrorCode::ConfigRead, path, e)),
    };
    if let Err(e) = value.apply_merge() {
        return Err(AppError::wrap(ErrorCode::ConfigRead, path, e));
    }
    Ok(value)
}

fn read_to_string(path: &Path) -> std::io::Result<String> {
    let mut file = File::open(path)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}

/// Locate the first NaN or infinite float in a serialized tree
fn find_non_finite(value: &Value, at: &str) -> Option<String> {
    match value {
        Value::Number(n) if n.is_nan() || n.is_infinite() => Some(at.to_string()),
        Value::Sequence(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| find_non_finite(item, &format!("{at}[{i}]"))),
        Value::Mapping(mapping) => mapping.iter().find_map(|(key, item)| {
            let key = key.as_str().map(str::to_string).unwrap_or_else(|| format!("{key:?}"));
            find_non_finite(item, &format!("{at}.{key}"))
        }),
        Value::Tagged(tagged) => find_non_finite(&tagged.value, &format!("{at}.{}", tagged.tag)),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
