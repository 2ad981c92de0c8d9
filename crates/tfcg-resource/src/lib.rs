pub mod attributes;
pub mod blocks;
pub mod conversion;
pub mod custom_type;
pub mod elem_type;
pub mod error;
pub mod facets;
pub mod fragments;
pub mod generator;
pub mod identifier;
pub mod imports;
pub mod model;
pub mod nested_object;
pub mod node;
pub mod object_type;
pub mod primitive;
pub mod render;
pub mod schema;

pub use attributes::{Attribute, Attributes};
pub use blocks::{Block, Blocks};
pub use error::{GeneratorError, UnimplementedError};
pub use generator::ResourceGenerator;
pub use identifier::FrameworkIdentifier;
pub use node::SchemaNode;
pub use schema::ResourceSchema;
