//! MongoDB test-fixture loading for document-backed models.
//!
//! This crate seeds a MongoDB-backed collection with records derived either
//! from static record sets or from a live query against an existing data
//! source, for use in an ORM's automated test suite.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use bson::doc;
//! use mongo_fixtures::prelude::*;
//!
//! let mut registry = ModelRegistry::new();
//! registry.register(Model::new(
//! 	"Post",
//! 	"posts",
//! 	Schema::new()
//! 		.with_field("_id", FieldDefinition::new(FieldType::ObjectId))
//! 		.with_field("title", FieldDefinition::new(FieldType::String)),
//! ));
//!
//! let spec = ImportSpec::builder()
//! 	.model("Post")
//! 	.records(vec![doc! { "title": "first post" }])
//! 	.build()?;
//!
//! let ctx = FixtureContext::new(Arc::new(registry), source);
//! let mut fixture = DocumentFixture::new(spec);
//! fixture.initialize(&ctx).await?;
//! fixture.setup_collection(ctx.source.as_ref(), true).await?;
//! fixture.insert(ctx.source.as_ref()).await?;
//! ```
//!
//! # Architecture
//!
//! - [`fixture::DocumentFixture`] — the loader itself: resolve, normalize,
//!   insert.
//! - [`fixture::ImportSpec`] — where a fixture's records come from. A model
//!   import must name either explicit filter conditions or a static record
//!   set; importing "whatever the source contains" is rejected so fixtures
//!   stay deterministic.
//! - [`model::ModelResolver`] / [`model::ModelRegistry`] — model lookup,
//!   injected per fixture instead of living in process-wide state.
//! - [`source::DataSource`] — the document store seam. The `mongodb` cargo
//!   feature provides [`source::mongodb::MongoSource`] over the official
//!   driver.
//!
//! Records are [`bson::Document`]s: insertion-ordered mappings over the
//! [`bson::Bson`] value union, with [`bson::oid::ObjectId`] as the native
//! identifier type. Before insertion every record is re-expressed over a
//! uniform field set (see [`fixture::normalize`]), because the store's
//! bulk-insert path requires identical field sets per call.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod fixture;
pub mod model;
pub mod prelude;
pub mod schema;
pub mod source;

// Re-export commonly used types at crate root
pub use error::{FixtureError, FixtureResult};
pub use fixture::{DocumentFixture, FixtureContext, ImportSpec};
pub use model::{Model, ModelRegistry, ModelResolver};
pub use schema::{FieldDefinition, FieldType, KeyRole, Schema};
pub use source::{DataSource, SourceConfig};
