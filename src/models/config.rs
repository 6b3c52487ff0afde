//! Configuration module for the fraud toolchain
//!
//! Uses constants from utils/constants.rs. [`AppConfig`] is built once at
//! startup and handed to whatever needs it by reference.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::utils::constants::{
    ARTIFACT_FOLDER, ISOLATION_FOREST_MODEL_NAME, MODEL_FILE_NAME, MONGO_COLLECTION_NAME,
    MONGO_DATABASE_NAME, MONGO_DB_URL, TARGET_COLUMN,
};

/// Immutable application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Database holding the transaction records
    pub database_name: String,
    /// Collection inside the database
    pub collection_name: String,
    /// Connection string; empty until a deployment supplies one
    pub connection_string: String,
    /// Label column in the transaction data
    pub target_column: String,
    /// File name of the primary model artifact
    pub model_file_name: String,
    /// File name of the isolation forest artifact
    pub isolation_forest_model_name: String,
    /// Output directory for artifacts
    pub artifact_folder: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_name: MONGO_DATABASE_NAME.to_string(),
            collection_name: MONGO_COLLECTION_NAME.to_string(),
            connection_string: MONGO_DB_URL.to_string(),
            target_column: TARGET_COLUMN.to_string(),
            model_file_name: MODEL_FILE_NAME.to_string(),
            isolation_forest_model_name: ISOLATION_FOREST_MODEL_NAME.to_string(),
            artifact_folder: ARTIFACT_FOLDER.to_string(),
        }
    }
}

impl AppConfig {
    /// Build from the compiled-in constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the connection string placeholder
    pub fn with_connection_string(mut self, connection_string: impl Into<String>) -> Self {
        self.connection_string = connection_string.into();
        self
    }

    /// False while the connection string is still the empty placeholder
    #[inline]
    pub fn has_connection_string(&self) -> bool {
        !self.connection_string.trim().is_empty()
    }

    /// Artifact output directory
    pub fn artifact_dir(&self) -> &Path {
        Path::new(&self.artifact_folder)
    }

    /// Path of any file under the artifact directory
    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.artifact_dir().join(file_name)
    }

    /// Path of the primary model artifact
    pub fn model_path(&self) -> PathBuf {
        self.artifact_path(&self.model_file_name)
    }

    /// Path of the isolation forest artifact
    pub fn isolation_forest_model_path(&self) -> PathBuf {
        self.artifact_path(&self.isolation_forest_model_name)
    }

    /// Connection string safe for logs
    pub fn masked_connection_string(&self) -> String {
        if !self.has_connection_string() {
            return "<unset>".to_string();
        }
        match self.connection_string.split_once("://") {
            Some((scheme, _)) => format!("{scheme}://***"),
            None => "***".to_string(),
        }
    }
}

impl fmt::Display for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "database:          {}", self.database_name)?;
        writeln!(f, "collection:        {}", self.collection_name)?;
        writeln!(f, "connection:        {}", self.masked_connection_string())?;
        writeln!(f, "target column:     {}", self.target_column)?;
        writeln!(f, "model:             {}", self.model_path().display())?;
        write!(f, "isolation forest:  {}", self.isolation_forest_model_path().display())
    }
}
