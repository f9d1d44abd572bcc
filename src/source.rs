//! Data-source abstraction.
//!
//! A [`DataSource`] is the document store a fixture reads seed data from and
//! writes normalized records into. The fixture loader only ever talks to this
//! trait; the `mongodb` cargo feature provides a driver-backed implementation.

use async_trait::async_trait;
use bson::{Bson, Document};

use crate::error::FixtureResult;

#[cfg(feature = "mongodb")]
pub mod mongodb;

/// Configuration of one data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
	/// Connection name (e.g. "test", "default").
	pub name: String,

	/// Prefix applied to every collection name. Empty means no prefix.
	pub prefix: String,

	/// Identity token for this configuration.
	///
	/// Fixtures compare this token against their "created" marker so a
	/// collection is only set up once per configuration within a test run.
	pub config_key: String,
}

impl SourceConfig {
	/// Creates a configuration with no collection prefix.
	pub fn new(name: impl Into<String>) -> Self {
		let name = name.into();
		let config_key = name.clone();
		Self {
			name,
			prefix: String::new(),
			config_key,
		}
	}

	/// Sets the collection prefix.
	pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.prefix = prefix.into();
		self
	}

	/// Overrides the configuration identity token.
	pub fn with_config_key(mut self, key: impl Into<String>) -> Self {
		self.config_key = key.into();
		self
	}

	/// Applies the prefix to a base collection name.
	pub fn full_collection_name(&self, base: &str) -> String {
		format!("{}{}", self.prefix, base)
	}
}

/// Document store consumed by the fixture loader.
///
/// All operations are awaited sequentially by the loader; errors propagate
/// unchanged to the enclosing test.
#[async_trait]
pub trait DataSource: Send + Sync {
	/// Returns this source's configuration.
	fn config(&self) -> &SourceConfig;

	/// Finds all documents in `collection` matching `filter`.
	///
	/// An empty filter matches every document.
	async fn find(&self, collection: &str, filter: Document) -> FixtureResult<Vec<Document>>;

	/// Lists the collection names present in the store.
	async fn list_collections(&self) -> FixtureResult<Vec<String>>;

	/// Creates the named collection.
	async fn create_collection(&self, collection: &str) -> FixtureResult<()>;

	/// Drops the named collection.
	async fn drop_collection(&self, collection: &str) -> FixtureResult<()>;

	/// Low-level record creation from parallel field/value slices.
	///
	/// `fields` and `values` must have the same length; each call inserts a
	/// single document.
	async fn create(
		&self,
		collection: &str,
		fields: &[String],
		values: &[Bson],
	) -> FixtureResult<()>;
}
