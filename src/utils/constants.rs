//! Constants Module - Single Source of Truth
//!
//! Every data-store name, column label and artifact file name used across the
//! fraud toolchain is defined here. Runtime code reads them through
//! [`crate::models::AppConfig`] instead of reaching for these directly.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "FraudShield";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// DATA STORE CONSTANTS
// ============================================

/// Database holding the raw transaction records
pub const MONGO_DATABASE_NAME: &str = "credit_card_transactions_database";

/// Collection inside [`MONGO_DATABASE_NAME`]
pub const MONGO_COLLECTION_NAME: &str = "credit_card_transactions";

/// Connection string placeholder. Empty until the deployment supplies one.
pub const MONGO_DB_URL: &str = "";

// ============================================
// DATASET CONSTANTS
// ============================================

/// Label column in the tabular transaction data
pub const TARGET_COLUMN: &str = "Class";

// ============================================
// ARTIFACT CONSTANTS
// ============================================

/// Default file name for the trained isolation forest
pub const ISOLATION_FOREST_MODEL_NAME: &str = "isolation_forest_model.pkl";

/// Default file name for the primary trained model
pub const MODEL_FILE_NAME: &str = "model.pkl";

/// Output directory for generated artifacts
pub const ARTIFACT_FOLDER: &str = "artifacts";

/// All artifact file names known to the toolchain
pub const ARTIFACT_FILE_NAMES: [&str; 2] = [MODEL_FILE_NAME, ISOLATION_FOREST_MODEL_NAME];

/// Check if a file name is one of the known artifact names
#[inline]
pub fn is_known_artifact(file_name: &str) -> bool {
    ARTIFACT_FILE_NAMES.contains(&file_name)
}
