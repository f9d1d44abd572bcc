//! Convenience re-exports for common usage.
//!
//! # Example
//!
//! ```
//! use mongo_fixtures::prelude::*;
//! ```

// Error types
pub use crate::error::{FixtureError, FixtureResult};

// Fixture types
pub use crate::fixture::{
	DocumentFixture, FixtureContext, ImportSpec, ImportSpecBuilder, convert_object_ids,
	uniform_batch,
};

// Model and schema types
pub use crate::model::{Model, ModelRegistry, ModelResolver};
pub use crate::schema::{FieldDefinition, FieldType, KeyRole, Schema};

// Data-source types
pub use crate::source::{DataSource, SourceConfig};

#[cfg(feature = "mongodb")]
pub use crate::source::mongodb::MongoSource;
