//! The fixture loader.

use std::sync::Arc;

use bson::{Bson, Document};
use tracing::debug;

use super::import::ImportSpec;
use super::normalize::{convert_batch, field_union, reshape};
use crate::error::{FixtureError, FixtureResult};
use crate::model::{Model, ModelResolver};
use crate::schema::Schema;
use crate::source::DataSource;

/// Collaborators a fixture needs during initialization.
///
/// Passing these in explicitly keeps model resolution local to the fixture;
/// nothing process-wide is read or mutated.
#[derive(Clone)]
pub struct FixtureContext {
	/// Model/schema resolver.
	pub resolver: Arc<dyn ModelResolver>,

	/// Data source seed records are read from.
	pub source: Arc<dyn DataSource>,
}

impl FixtureContext {
	/// Creates a context from its two collaborators.
	pub fn new(resolver: Arc<dyn ModelResolver>, source: Arc<dyn DataSource>) -> Self {
		Self { resolver, source }
	}
}

/// A test fixture that seeds one collection of a document store.
///
/// The lifecycle is: [`initialize`](Self::initialize) once,
/// [`setup_collection`](Self::setup_collection) around each configuration,
/// then [`insert`](Self::insert).
///
/// # Example
///
/// ```rust,ignore
/// let spec = ImportSpec::builder()
/// 	.model("Post")
/// 	.records(vec![doc! { "title": "first" }])
/// 	.build()?;
///
/// let mut fixture = DocumentFixture::new(spec);
/// fixture.initialize(&ctx).await?;
/// fixture.setup_collection(ctx.source.as_ref(), true).await?;
/// fixture.insert(ctx.source.as_ref()).await?;
/// ```
#[derive(Debug)]
pub struct DocumentFixture {
	spec: ImportSpec,
	model: Option<Arc<Model>>,
	schema: Schema,
	collection: Option<String>,
	records: Vec<Document>,
	created: Option<String>,
}

impl DocumentFixture {
	/// Creates an uninitialized fixture from an import specification.
	pub fn new(spec: ImportSpec) -> Self {
		Self {
			spec,
			model: None,
			schema: Schema::new(),
			collection: None,
			records: Vec::new(),
			created: None,
		}
	}

	/// Resolves the model, acquires records, and normalizes identifiers.
	///
	/// A spec without a model initializes to an empty batch; that is not an
	/// error, there is simply nothing to seed.
	///
	/// # Errors
	///
	/// Returns [`FixtureError::MissingModel`] when the resolver does not know
	/// the named model. Data-source errors propagate unchanged.
	pub async fn initialize(&mut self, ctx: &FixtureContext) -> FixtureResult<()> {
		let Some(model_name) = self.spec.model.clone() else {
			if let Some(records) = &self.spec.records {
				self.records = convert_batch(records);
			}
			return Ok(());
		};

		let model = ctx
			.resolver
			.resolve(&model_name)
			.ok_or_else(|| FixtureError::MissingModel(model_name.clone()))?;

		let mut schema = model.schema.clone();
		schema.mark_primary(&model.primary_key);

		// A prefix carried by the model itself wins; the source config's
		// prefix is the fallback.
		let config = ctx.source.config();
		let prefix = model
			.collection_prefix
			.clone()
			.filter(|prefix| !prefix.is_empty())
			.unwrap_or_else(|| config.prefix.clone());
		let collection = format!("{}{}", prefix, model.collection);

		let records = match (&self.spec.records, &self.spec.filter) {
			(Some(records), _) => records.clone(),
			(None, Some(filter)) => ctx.source.find(&collection, filter.clone()).await?,
			// The builder guarantees a model always carries one of the two.
			(None, None) => Vec::new(),
		};

		debug!(
			model = %model_name,
			collection = %collection,
			records = records.len(),
			"fixture initialized"
		);

		self.records = convert_batch(&records);
		self.schema = schema;
		self.collection = Some(collection);
		self.model = Some(model);
		Ok(())
	}

	/// Creates or recreates the target collection.
	///
	/// A no-op when the collection was already prepared for the data source's
	/// current configuration identity, so repeated calls across fixtures
	/// sharing one configuration do not drop and recreate redundantly.
	pub async fn setup_collection(&mut self, db: &dyn DataSource, drop: bool) -> FixtureResult<()> {
		let config_key = db.config().config_key.clone();
		if self.created.as_deref() == Some(config_key.as_str()) {
			return Ok(());
		}

		let Some(collection) = self.collection.clone() else {
			return Ok(());
		};

		let existing = db.list_collections().await?;
		let exists = existing.iter().any(|name| name == &collection);

		if drop && exists {
			debug!(collection = %collection, "dropping and recreating collection");
			db.drop_collection(&collection).await?;
			db.create_collection(&collection).await?;
			self.created = Some(config_key);
		} else if !exists {
			debug!(collection = %collection, "creating collection");
			db.create_collection(&collection).await?;
			self.created = Some(config_key);
		}

		Ok(())
	}

	/// Inserts the record batch, one uniformly-shaped record at a time.
	///
	/// Returns `Ok(false)` when no model was resolved (nothing to insert
	/// against) and `Ok(true)` otherwise, including for an empty batch.
	///
	/// The store's bulk-insert path requires a uniform field set per call, so
	/// each record is merged over a null-valued template spanning the union of
	/// schema-recognized field names before its individual create call.
	pub async fn insert(&self, db: &dyn DataSource) -> FixtureResult<bool> {
		if self.model.is_none() {
			return Ok(false);
		}
		if self.records.is_empty() {
			return Ok(true);
		}

		let collection = self
			.collection
			.as_deref()
			.ok_or_else(|| FixtureError::InvalidImport("fixture was not initialized".to_string()))?;

		// Union of field names actually used, restricted to the schema.
		let template: Vec<String> = field_union(&self.records)
			.into_iter()
			.filter(|field| self.schema.contains(field))
			.collect();

		for record in &self.records {
			let merged = reshape(record, &template);
			let (fields, values): (Vec<String>, Vec<Bson>) = merged
				.iter()
				.map(|(field, value)| (field.clone(), value.clone()))
				.unzip();
			db.create(collection, &fields, &values).await?;
		}

		debug!(collection = %collection, records = self.records.len(), "fixture inserted");
		Ok(true)
	}

	/// Returns the fully-prefixed target collection name, once initialized.
	pub fn collection(&self) -> Option<&str> {
		self.collection.as_deref()
	}

	/// Returns the resolved schema.
	pub fn schema(&self) -> &Schema {
		&self.schema
	}

	/// Returns the normalized record batch.
	pub fn records(&self) -> &[Document] {
		&self.records
	}

	/// Returns the resolved model, once initialized.
	pub fn model(&self) -> Option<&Arc<Model>> {
		self.model.as_ref()
	}
}
