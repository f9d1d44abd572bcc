//! Model definitions and model resolution.
//!
//! A [`Model`] describes one document-backed model: its schema, primary-key
//! field, and collection naming. A [`ModelResolver`] turns a model name into
//! a [`Model`]; the bundled [`ModelRegistry`] is a plain in-memory resolver
//! that callers populate explicitly instead of relying on process-wide state.

use std::collections::HashMap;
use std::sync::Arc;

use crate::schema::Schema;

/// A document-backed model definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
	/// Model name (e.g. "Post").
	pub name: String,

	/// Base collection name (e.g. "posts"), before any source prefix.
	pub collection: String,

	/// Name of the primary-key field.
	pub primary_key: String,

	/// Collection-name prefix carried by the model itself.
	///
	/// Takes precedence over the data source configuration's prefix; the
	/// config prefix only applies when the model carries none.
	pub collection_prefix: Option<String>,

	/// Field definitions.
	pub schema: Schema,
}

impl Model {
	/// Creates a model with the conventional `_id` primary key.
	pub fn new(name: impl Into<String>, collection: impl Into<String>, schema: Schema) -> Self {
		Self {
			name: name.into(),
			collection: collection.into(),
			primary_key: "_id".to_string(),
			collection_prefix: None,
			schema,
		}
	}

	/// Overrides the primary-key field name.
	pub fn with_primary_key(mut self, primary_key: impl Into<String>) -> Self {
		self.primary_key = primary_key.into();
		self
	}

	/// Sets the model-level collection prefix.
	pub fn with_collection_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.collection_prefix = Some(prefix.into());
		self
	}
}

/// Resolves model names to model definitions.
pub trait ModelResolver: Send + Sync {
	/// Looks up a model by name.
	///
	/// Returns `None` if the model is unknown; the fixture loader surfaces
	/// that as [`FixtureError::MissingModel`](crate::error::FixtureError).
	fn resolve(&self, name: &str) -> Option<Arc<Model>>;
}

/// In-memory model resolver.
///
/// # Example
///
/// ```
/// use mongo_fixtures::model::{Model, ModelRegistry, ModelResolver};
/// use mongo_fixtures::schema::Schema;
///
/// let mut registry = ModelRegistry::new();
/// registry.register(Model::new("Post", "posts", Schema::new()));
/// assert!(registry.resolve("Post").is_some());
/// assert!(registry.resolve("Comment").is_none());
/// ```
#[derive(Debug, Default)]
pub struct ModelRegistry {
	models: HashMap<String, Arc<Model>>,
}

impl ModelRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a model under its own name.
	pub fn register(&mut self, model: Model) {
		self.models.insert(model.name.clone(), Arc::new(model));
	}

	/// Returns all registered model names.
	pub fn model_names(&self) -> Vec<String> {
		self.models.keys().cloned().collect()
	}

	/// Returns true if the named model is registered.
	pub fn has_model(&self, name: &str) -> bool {
		self.models.contains_key(name)
	}

	/// Returns the number of registered models.
	pub fn len(&self) -> usize {
		self.models.len()
	}

	/// Returns true if no models are registered.
	pub fn is_empty(&self) -> bool {
		self.models.is_empty()
	}
}

impl ModelResolver for ModelRegistry {
	fn resolve(&self, name: &str) -> Option<Arc<Model>> {
		self.models.get(name).cloned()
	}
}
