//! MongoDB-backed [`DataSource`] implementation.
//!
//! Enabled with the `mongodb` cargo feature.
//!
//! # Example
//!
//! ```rust,no_run
//! use mongo_fixtures::source::SourceConfig;
//! use mongo_fixtures::source::mongodb::MongoSource;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = MongoSource::connect(
//! 	"mongodb://localhost:27017",
//! 	"app_test",
//! 	SourceConfig::new("test"),
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use bson::{Bson, Document};
use futures::stream::TryStreamExt;
use mongodb::{Client, Database};

use super::{DataSource, SourceConfig};
use crate::error::FixtureResult;

/// Data source backed by the official MongoDB driver.
#[derive(Clone)]
pub struct MongoSource {
	client: Arc<Client>,
	database_name: String,
	config: SourceConfig,
}

impl MongoSource {
	/// Connects to MongoDB with a connection string.
	pub async fn connect(url: &str, database: &str, config: SourceConfig) -> FixtureResult<Self> {
		let client = Client::with_uri_str(url).await?;
		Ok(Self {
			client: Arc::new(client),
			database_name: database.to_string(),
			config,
		})
	}

	/// Wraps an existing client.
	pub fn with_client(client: Client, database: &str, config: SourceConfig) -> Self {
		Self {
			client: Arc::new(client),
			database_name: database.to_string(),
			config,
		}
	}

	/// Returns the driver database handle.
	pub fn database(&self) -> Database {
		self.client.database(&self.database_name)
	}
}

#[async_trait]
impl DataSource for MongoSource {
	fn config(&self) -> &SourceConfig {
		&self.config
	}

	async fn find(&self, collection: &str, filter: Document) -> FixtureResult<Vec<Document>> {
		let coll = self.database().collection::<Document>(collection);
		let cursor = coll.find(filter).await?;
		Ok(cursor.try_collect().await?)
	}

	async fn list_collections(&self) -> FixtureResult<Vec<String>> {
		Ok(self.database().list_collection_names().await?)
	}

	async fn create_collection(&self, collection: &str) -> FixtureResult<()> {
		Ok(self.database().create_collection(collection).await?)
	}

	async fn drop_collection(&self, collection: &str) -> FixtureResult<()> {
		Ok(self
			.database()
			.collection::<Document>(collection)
			.drop()
			.await?)
	}

	async fn create(
		&self,
		collection: &str,
		fields: &[String],
		values: &[Bson],
	) -> FixtureResult<()> {
		let mut document = Document::new();
		for (field, value) in fields.iter().zip(values.iter()) {
			document.insert(field.clone(), value.clone());
		}

		self.database()
			.collection::<Document>(collection)
			.insert_one(document)
			.await?;
		Ok(())
	}
}
