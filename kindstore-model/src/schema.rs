use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Describes an entity kind's fields, for callers that only know the kind name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySchema {
    pub kind: String,
    pub fields: Vec<FieldSpec>,
}

impl EntitySchema {
    pub fn new(kind: impl Into<String>, fields: Vec<FieldSpec>) -> Self {
        Self {
            kind: kind.into(),
            fields,
        }
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the fields a full entity must carry.
    pub fn required_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|f| !f.optional)
            .map(|f| f.name.as_str())
    }
}

/// A single field of an entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
    /// True when the entity field is an `Option`, so it may be absent.
    #[serde(default)]
    pub optional: bool,
}

impl FieldSpec {
    fn simple(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            optional: false,
        }
    }

    /// Derives the spec from the Rust field type.
    pub fn of<T: SchemaField>(name: &str) -> Self {
        Self {
            name: name.into(),
            field_type: T::FIELD_TYPE,
            optional: T::OPTIONAL,
        }
    }

    /// Shorthand for a text field.
    pub fn text(name: &str) -> Self {
        Self::simple(name, FieldType::Text)
    }

    /// Shorthand for a numeric field.
    pub fn number(name: &str) -> Self {
        Self::simple(name, FieldType::Number)
    }

    /// Shorthand for a boolean field.
    pub fn bool(name: &str) -> Self {
        Self::simple(name, FieldType::Bool)
    }

    /// Shorthand for a list field.
    pub fn list(name: &str) -> Self {
        Self::simple(name, FieldType::List)
    }

    /// Shorthand for a free-form JSON field.
    pub fn json(name: &str) -> Self {
        Self::simple(name, FieldType::Json)
    }

    /// Marks the field as optional.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// The JSON-level type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Number,
    Bool,
    List,
    Json,
}

/// Rust types usable as entity fields, with their [`FieldType`].
///
/// Nested structs can opt in with `FIELD_TYPE = FieldType::Json`.
pub trait SchemaField {
    const FIELD_TYPE: FieldType;
    const OPTIONAL: bool = false;
}

macro_rules! schema_field {
    ($field_type:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl SchemaField for $ty {
                const FIELD_TYPE: FieldType = $field_type;
            }
        )+
    };
}

schema_field!(FieldType::Text => String, char, kindstore_types::EntityId);
schema_field!(FieldType::Number => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
schema_field!(FieldType::Bool => bool);
schema_field!(FieldType::Json => serde_json::Value);

impl<T> SchemaField for Vec<T> {
    const FIELD_TYPE: FieldType = FieldType::List;
}

impl<T: SchemaField> SchemaField for Option<T> {
    const FIELD_TYPE: FieldType = T::FIELD_TYPE;
    const OPTIONAL: bool = true;
}

impl<K, V> SchemaField for BTreeMap<K, V> {
    const FIELD_TYPE: FieldType = FieldType::Json;
}

impl<K, V, S> SchemaField for HashMap<K, V, S> {
    const FIELD_TYPE: FieldType = FieldType::Json;
}
