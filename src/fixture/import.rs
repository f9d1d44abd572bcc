//! Import specifications.
//!
//! An [`ImportSpec`] tells a fixture where its records come from: a static
//! record set, or a live query against the data source. A spec that names a
//! model must pick exactly one of the two, so fixture contents never depend
//! on whatever happens to be in the source database.

use bson::Document;

use crate::error::{FixtureError, FixtureResult};

/// Specification of what a fixture imports.
///
/// Constructed once per fixture via [`ImportSpec::builder`]; read-only
/// afterwards.
///
/// # Example
///
/// ```
/// use bson::doc;
/// use mongo_fixtures::fixture::ImportSpec;
///
/// let spec = ImportSpec::builder()
/// 	.model("Post")
/// 	.connection("default")
/// 	.filter(doc! { "published": true })
/// 	.build()
/// 	.unwrap();
/// assert_eq!(spec.model.as_deref(), Some("Post"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportSpec {
	/// Name of the model to import, if any.
	pub model: Option<String>,

	/// Connection name the records are read from.
	pub connection: String,

	/// Filter conditions for a live query against the data source.
	pub filter: Option<Document>,

	/// Static record set.
	pub records: Option<Vec<Document>>,
}

impl ImportSpec {
	/// Starts building an import specification.
	pub fn builder() -> ImportSpecBuilder {
		ImportSpecBuilder::default()
	}

	/// A specification that imports nothing.
	pub fn empty() -> Self {
		Self {
			connection: "default".to_string(),
			..Self::default()
		}
	}

	/// Returns true if the spec names neither a model nor static records.
	pub fn is_empty(&self) -> bool {
		self.model.is_none() && self.records.is_none()
	}
}

/// Builder for [`ImportSpec`].
#[derive(Debug, Clone, Default)]
pub struct ImportSpecBuilder {
	model: Option<String>,
	connection: Option<String>,
	filter: Option<Document>,
	records: Option<Vec<Document>>,
}

impl ImportSpecBuilder {
	/// Sets the model name.
	pub fn model(mut self, model: impl Into<String>) -> Self {
		self.model = Some(model.into());
		self
	}

	/// Sets the connection name. Defaults to "default".
	pub fn connection(mut self, connection: impl Into<String>) -> Self {
		self.connection = Some(connection.into());
		self
	}

	/// Sets filter conditions for a live query.
	pub fn filter(mut self, filter: Document) -> Self {
		self.filter = Some(filter);
		self
	}

	/// Sets the static record set.
	pub fn records(mut self, records: Vec<Document>) -> Self {
		self.records = Some(records);
		self
	}

	/// Builds the specification.
	///
	/// # Errors
	///
	/// Returns [`FixtureError::InvalidImport`] when the spec names a model
	/// with both a filter and static records, or with neither. A model with
	/// no explicit source would silently import whatever the live database
	/// contains, which makes fixtures non-deterministic.
	pub fn build(self) -> FixtureResult<ImportSpec> {
		if self.model.is_some() {
			match (&self.filter, &self.records) {
				(Some(_), Some(_)) => {
					return Err(FixtureError::InvalidImport(
						"specify either filter conditions or static records, not both".to_string(),
					));
				}
				(None, None) => {
					return Err(FixtureError::InvalidImport(
						"a model import requires explicit filter conditions or static records"
							.to_string(),
					));
				}
				_ => {}
			}
		}

		Ok(ImportSpec {
			model: self.model,
			connection: self.connection.unwrap_or_else(|| "default".to_string()),
			filter: self.filter,
			records: self.records,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use bson::doc;
	use rstest::rstest;

	#[rstest]
	fn test_build_with_filter() {
		let spec = ImportSpec::builder()
			.model("Post")
			.filter(doc! { "title": "x" })
			.build()
			.unwrap();
		assert_eq!(spec.model.as_deref(), Some("Post"));
		assert_eq!(spec.connection, "default");
		assert!(spec.records.is_none());
	}

	#[rstest]
	fn test_build_with_records() {
		let spec = ImportSpec::builder()
			.model("Post")
			.connection("seed")
			.records(vec![doc! { "title": "x" }])
			.build()
			.unwrap();
		assert_eq!(spec.connection, "seed");
		assert_eq!(spec.records.as_ref().unwrap().len(), 1);
	}

	#[rstest]
	fn test_model_without_source_is_rejected() {
		let result = ImportSpec::builder().model("Post").build();
		assert!(matches!(result, Err(FixtureError::InvalidImport(_))));
	}

	#[rstest]
	fn test_model_with_both_sources_is_rejected() {
		let result = ImportSpec::builder()
			.model("Post")
			.filter(doc! {})
			.records(vec![])
			.build();
		assert!(matches!(result, Err(FixtureError::InvalidImport(_))));
	}

	#[rstest]
	fn test_empty_spec() {
		let spec = ImportSpec::empty();
		assert!(spec.is_empty());
		assert_eq!(spec.connection, "default");
	}

	#[rstest]
	fn test_records_without_model_are_allowed() {
		// Nothing resolvable to insert against; the loader treats this as
		// "nothing to seed" rather than an error.
		let spec = ImportSpec::builder()
			.records(vec![doc! { "title": "x" }])
			.build()
			.unwrap();
		assert!(spec.model.is_none());
		assert!(!spec.is_empty());
	}
}
