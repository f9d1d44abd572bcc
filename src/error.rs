//! Error types for fixture loading.
//!
//! This module defines the error types used throughout the mongo-fixtures crate.

use thiserror::Error;

/// Errors that can occur while preparing or inserting fixture data.
#[derive(Debug, Error)]
pub enum FixtureError {
	/// The named model could not be resolved.
	#[error("Missing model: {0}")]
	MissingModel(String),

	/// The import specification is malformed.
	#[error("Invalid import specification: {0}")]
	InvalidImport(String),

	/// The data source reported a failure.
	#[error("Database error: {0}")]
	Database(String),

	/// BSON conversion failed.
	#[error("BSON error: {0}")]
	Bson(#[from] bson::error::Error),
}

#[cfg(feature = "mongodb")]
impl From<mongodb::error::Error> for FixtureError {
	fn from(err: mongodb::error::Error) -> Self {
		FixtureError::Database(err.to_string())
	}
}

/// Result type alias for fixture operations.
pub type FixtureResult<T> = Result<T, FixtureError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_missing_model_display() {
		let error = FixtureError::MissingModel("Post".to_string());
		assert_eq!(error.to_string(), "Missing model: Post");
	}

	#[rstest]
	fn test_invalid_import_display() {
		let error = FixtureError::InvalidImport("no records and no conditions".to_string());
		assert_eq!(
			error.to_string(),
			"Invalid import specification: no records and no conditions"
		);
	}

	#[rstest]
	fn test_database_display() {
		let error = FixtureError::Database("connection refused".to_string());
		assert_eq!(error.to_string(), "Database error: connection refused");
	}
}
