//! Recording in-memory data source for integration tests.

use std::sync::Arc;

use async_trait::async_trait;
use bson::{Bson, Document};
use parking_lot::Mutex;

use mongo_fixtures::error::FixtureResult;
use mongo_fixtures::source::{DataSource, SourceConfig};

/// One recorded low-level create call.
#[derive(Debug, Clone)]
pub struct CreateCall {
	pub collection: String,
	pub fields: Vec<String>,
	pub values: Vec<Bson>,
}

/// In-memory document store that records every call the loader makes.
pub struct MockSource {
	config: SourceConfig,
	pub collections: Mutex<Vec<String>>,
	pub seed_data: Mutex<Vec<Document>>,
	pub find_calls: Mutex<Vec<(String, Document)>>,
	pub create_calls: Mutex<Vec<CreateCall>>,
	pub drop_calls: Mutex<Vec<String>>,
	pub create_collection_calls: Mutex<Vec<String>>,
}

impl MockSource {
	pub fn new(config: SourceConfig) -> Arc<Self> {
		Arc::new(Self {
			config,
			collections: Mutex::new(Vec::new()),
			seed_data: Mutex::new(Vec::new()),
			find_calls: Mutex::new(Vec::new()),
			create_calls: Mutex::new(Vec::new()),
			drop_calls: Mutex::new(Vec::new()),
			create_collection_calls: Mutex::new(Vec::new()),
		})
	}

	/// Pre-populates the store with collections that already exist.
	pub fn add_collection(&self, name: &str) {
		self.collections.lock().push(name.to_string());
	}

	/// Pre-populates the documents a `find` call returns.
	///
	/// Documents are matched against the filter by exact field equality.
	pub fn seed(&self, documents: Vec<Document>) {
		*self.seed_data.lock() = documents;
	}
}

#[async_trait]
impl DataSource for MockSource {
	fn config(&self) -> &SourceConfig {
		&self.config
	}

	async fn find(&self, collection: &str, filter: Document) -> FixtureResult<Vec<Document>> {
		self.find_calls
			.lock()
			.push((collection.to_string(), filter.clone()));

		let matches = self
			.seed_data
			.lock()
			.iter()
			.filter(|document| {
				filter
					.iter()
					.all(|(key, value)| document.get(key) == Some(value))
			})
			.cloned()
			.collect();
		Ok(matches)
	}

	async fn list_collections(&self) -> FixtureResult<Vec<String>> {
		Ok(self.collections.lock().clone())
	}

	async fn create_collection(&self, collection: &str) -> FixtureResult<()> {
		self.collections.lock().push(collection.to_string());
		self.create_collection_calls
			.lock()
			.push(collection.to_string());
		Ok(())
	}

	async fn drop_collection(&self, collection: &str) -> FixtureResult<()> {
		self.collections.lock().retain(|name| name != collection);
		self.drop_calls.lock().push(collection.to_string());
		Ok(())
	}

	async fn create(
		&self,
		collection: &str,
		fields: &[String],
		values: &[Bson],
	) -> FixtureResult<()> {
		self.create_calls.lock().push(CreateCall {
			collection: collection.to_string(),
			fields: fields.to_vec(),
			values: values.to_vec(),
		});
		Ok(())
	}
}
