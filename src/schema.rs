//! Field definition sets for document models.
//!
//! A [`Schema`] is an insertion-ordered map from field name to
//! [`FieldDefinition`]. The order is significant: it drives the field order
//! used when fixture records are inserted.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value type of a document field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
	/// Native document identifier.
	ObjectId,
	/// UTF-8 string.
	String,
	/// 64-bit integer.
	Integer,
	/// 64-bit float.
	Float,
	/// Boolean.
	Boolean,
	/// Nested document.
	Document,
	/// Array of values.
	Array,
	/// UTC datetime.
	DateTime,
}

/// Key role of a field within its schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyRole {
	/// The field is the primary key.
	Primary,
}

/// Metadata for a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
	/// Value type of the field.
	#[serde(rename = "type")]
	pub field_type: FieldType,

	/// Key role, if any.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub key: Option<KeyRole>,
}

impl FieldDefinition {
	/// Creates a definition with no key role.
	pub fn new(field_type: FieldType) -> Self {
		Self {
			field_type,
			key: None,
		}
	}

	/// Marks this definition as the primary key.
	pub fn primary(mut self) -> Self {
		self.key = Some(KeyRole::Primary);
		self
	}

	/// Returns true if this field is the primary key.
	pub fn is_primary(&self) -> bool {
		self.key == Some(KeyRole::Primary)
	}
}

/// Ordered set of field definitions for one model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
	fields: IndexMap<String, FieldDefinition>,
}

impl Schema {
	/// Creates an empty schema.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a field definition, replacing any previous definition.
	pub fn insert(&mut self, name: impl Into<String>, definition: FieldDefinition) {
		self.fields.insert(name.into(), definition);
	}

	/// Builder-style variant of [`insert`](Self::insert).
	pub fn with_field(mut self, name: impl Into<String>, definition: FieldDefinition) -> Self {
		self.insert(name, definition);
		self
	}

	/// Looks up a field definition by name.
	pub fn get(&self, name: &str) -> Option<&FieldDefinition> {
		self.fields.get(name)
	}

	/// Returns true if the schema defines the named field.
	pub fn contains(&self, name: &str) -> bool {
		self.fields.contains_key(name)
	}

	/// Marks the named field as the primary key.
	///
	/// Returns true if the field exists and was marked.
	pub fn mark_primary(&mut self, name: &str) -> bool {
		match self.fields.get_mut(name) {
			Some(definition) => {
				definition.key = Some(KeyRole::Primary);
				true
			}
			None => false,
		}
	}

	/// Returns the name of the primary-key field, if one is marked.
	pub fn primary_key(&self) -> Option<&str> {
		self.fields
			.iter()
			.find(|(_, definition)| definition.is_primary())
			.map(|(name, _)| name.as_str())
	}

	/// Iterates over field names in definition order.
	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.keys().map(String::as_str)
	}

	/// Iterates over fields in definition order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDefinition)> {
		self.fields
			.iter()
			.map(|(name, definition)| (name.as_str(), definition))
	}

	/// Returns the number of fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Returns true if the schema has no fields.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}
