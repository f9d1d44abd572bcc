//! Fixture loading.
//!
//! The fixture pipeline is straight-line: resolve the model and acquire
//! records ([`DocumentFixture::initialize`]), prepare the target collection
//! ([`DocumentFixture::setup_collection`]), then insert the normalized batch
//! ([`DocumentFixture::insert`]).

pub mod import;
pub mod loader;
pub mod normalize;

pub use import::{ImportSpec, ImportSpecBuilder};
pub use loader::{DocumentFixture, FixtureContext};
pub use normalize::{convert_object_ids, field_union, reshape, uniform_batch};
