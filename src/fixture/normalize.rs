//! Record normalization.
//!
//! Two transforms run over fixture records before insertion:
//!
//! - [`convert_object_ids`] rewrites string `_id` values into native
//!   [`ObjectId`](bson::oid::ObjectId)s, recursing into nested documents and
//!   arrays.
//! - [`uniform_batch`] re-expresses every record over the union of all field
//!   names in the batch, filling missing fields with [`Bson::Null`], so the
//!   whole batch shares one field set.
//!
//! Both are pure: they return new values and never mutate their input.

use bson::oid::ObjectId;
use bson::{Bson, Document};

/// Field name carrying the document identifier.
pub const ID_FIELD: &str = "_id";

/// Converts string `_id` values to native ObjectIds, at any nesting depth.
///
/// Only values under a key literally named `_id` are considered, and only
/// when the string parses as a 24-hex-digit ObjectId; anything else passes
/// through unchanged.
///
/// # Example
///
/// ```
/// use bson::{Bson, doc};
/// use mongo_fixtures::fixture::convert_object_ids;
///
/// let record = doc! { "_id": "64b5f0a1c2d3e4f5a6b7c8d9", "title": "x" };
/// let converted = convert_object_ids(&record);
/// assert!(matches!(converted.get("_id"), Some(Bson::ObjectId(_))));
/// assert_eq!(converted.get("title"), Some(&Bson::String("x".into())));
/// ```
pub fn convert_object_ids(record: &Document) -> Document {
	record
		.iter()
		.map(|(key, value)| (key.clone(), convert_entry(key, value)))
		.collect()
}

/// Applies [`convert_object_ids`] to every record in a batch.
pub fn convert_batch(records: &[Document]) -> Vec<Document> {
	records.iter().map(convert_object_ids).collect()
}

fn convert_entry(key: &str, value: &Bson) -> Bson {
	match value {
		Bson::String(s) if key == ID_FIELD => match ObjectId::parse_str(s) {
			Ok(oid) => Bson::ObjectId(oid),
			Err(_) => value.clone(),
		},
		Bson::Document(nested) => Bson::Document(convert_object_ids(nested)),
		Bson::Array(items) => Bson::Array(items.iter().map(convert_element).collect()),
		other => other.clone(),
	}
}

// Array elements carry no field name, so a bare string is never an `_id`;
// only nested containers are walked.
fn convert_element(value: &Bson) -> Bson {
	match value {
		Bson::Document(nested) => Bson::Document(convert_object_ids(nested)),
		Bson::Array(items) => Bson::Array(items.iter().map(convert_element).collect()),
		other => other.clone(),
	}
}

/// Union of the field names used across a batch, in first-seen order.
pub fn field_union(records: &[Document]) -> Vec<String> {
	let mut union: Vec<String> = Vec::new();
	for record in records {
		for key in record.keys() {
			if !union.iter().any(|name| name == key) {
				union.push(key.clone());
			}
		}
	}
	union
}

/// Re-expresses one record over a field template.
///
/// Template fields come first, in template order, with [`Bson::Null`] for
/// fields the record lacks; any keys the record carries beyond the template
/// are appended afterwards in record order.
pub fn reshape(record: &Document, template: &[String]) -> Document {
	let mut reshaped: Document = template
		.iter()
		.map(|field| {
			let value = record.get(field).cloned().unwrap_or(Bson::Null);
			(field.clone(), value)
		})
		.collect();

	for (key, value) in record.iter() {
		if !template.contains(key) {
			reshaped.insert(key.clone(), value.clone());
		}
	}
	reshaped
}

/// Re-expresses every record over the union of the batch's field names.
///
/// Field order is first-seen order across the batch; fields a record lacks
/// are set to [`Bson::Null`]. The result satisfies the uniformity invariant:
/// every record carries the identical field-name set.
pub fn uniform_batch(records: &[Document]) -> Vec<Document> {
	let union = field_union(records);
	records
		.iter()
		.map(|record| reshape(record, &union))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use bson::doc;
	use rstest::rstest;
	use std::collections::BTreeSet;

	const OID: &str = "64b5f0a1c2d3e4f5a6b7c8d9";

	#[rstest]
	fn test_top_level_id_is_converted() {
		let record = doc! { "_id": OID, "title": "x" };
		let converted = convert_object_ids(&record);
		assert_eq!(
			converted.get("_id"),
			Some(&Bson::ObjectId(ObjectId::parse_str(OID).unwrap()))
		);
	}

	#[rstest]
	fn test_nested_id_is_converted() {
		let record = doc! {
			"_id": OID,
			"author": { "_id": OID, "name": "a" },
			"comments": [ { "_id": OID, "body": "hi" } ],
		};
		let converted = convert_object_ids(&record);

		let author = converted.get_document("author").unwrap();
		assert!(matches!(author.get("_id"), Some(Bson::ObjectId(_))));

		let comments = converted.get_array("comments").unwrap();
		let Bson::Document(comment) = &comments[0] else {
			panic!("expected document element");
		};
		assert!(matches!(comment.get("_id"), Some(Bson::ObjectId(_))));
	}

	#[rstest]
	fn test_non_string_id_is_unchanged() {
		let record = doc! { "_id": 42_i64 };
		let converted = convert_object_ids(&record);
		assert_eq!(converted.get("_id"), Some(&Bson::Int64(42)));
	}

	#[rstest]
	fn test_unparseable_id_is_unchanged() {
		let record = doc! { "_id": "a1" };
		let converted = convert_object_ids(&record);
		assert_eq!(converted.get("_id"), Some(&Bson::String("a1".into())));
	}

	#[rstest]
	fn test_other_keys_are_never_converted() {
		let record = doc! { "ref": OID };
		let converted = convert_object_ids(&record);
		assert_eq!(converted.get("ref"), Some(&Bson::String(OID.into())));
	}

	#[rstest]
	fn test_input_is_not_mutated() {
		let record = doc! { "_id": OID };
		let _ = convert_object_ids(&record);
		assert_eq!(record.get("_id"), Some(&Bson::String(OID.into())));
	}

	#[rstest]
	fn test_uniform_batch_field_sets_match() {
		let records = vec![
			doc! { "_id": OID, "title": "x" },
			doc! { "title": "y", "body": "z" },
		];
		let batch = uniform_batch(&records);

		let sets: Vec<BTreeSet<&str>> = batch
			.iter()
			.map(|record| record.keys().map(String::as_str).collect())
			.collect();
		assert_eq!(sets[0], sets[1]);
		assert_eq!(batch[0].get("body"), Some(&Bson::Null));
		assert_eq!(batch[1].get("_id"), Some(&Bson::Null));
	}

	#[rstest]
	fn test_uniform_batch_preserves_first_seen_order() {
		let records = vec![doc! { "a": 1, "b": 2 }, doc! { "c": 3 }];
		let batch = uniform_batch(&records);
		let keys: Vec<&str> = batch[1].keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["a", "b", "c"]);
	}

	#[rstest]
	fn test_uniform_batch_empty() {
		let batch = uniform_batch(&[]);
		assert!(batch.is_empty());
	}

	#[rstest]
	fn test_field_union_first_seen_order() {
		let records = vec![doc! { "b": 1, "a": 2 }, doc! { "a": 3, "c": 4 }];
		assert_eq!(field_union(&records), vec!["b", "a", "c"]);
	}

	#[rstest]
	fn test_reshape_fills_and_appends() {
		let template = vec!["_id".to_string(), "title".to_string()];
		let record = doc! { "title": "x", "rating": 5 };
		let reshaped = reshape(&record, &template);

		let keys: Vec<&str> = reshaped.keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["_id", "title", "rating"]);
		assert_eq!(reshaped.get("_id"), Some(&Bson::Null));
		assert_eq!(reshaped.get("rating"), Some(&Bson::Int32(5)));
	}
}
