mod field_mapping;
mod source_schema;
mod source_vocabulary;

pub use field_mapping::FieldMapping;
pub use source_schema::SourceSchema;
pub use source_vocabulary::SourceVocabulary;
