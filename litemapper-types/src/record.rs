use crate::descriptor::to_fields;
use crate::{Result, TypeKey};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A dynamically typed instance: the key of its type and its properties.
///
/// Mapping reads and writes records; concrete values enter and leave
/// through [`Record::from_instance`] and [`Record::into_instance`].
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    type_key: TypeKey,
    fields: Map<String, Value>,
}

impl Record {
    #[must_use]
    pub fn new(type_key: TypeKey, fields: Map<String, Value>) -> Self {
        Self { type_key, fields }
    }

    /// Captures the properties of a value.
    pub fn from_instance<T: Serialize + ?Sized + 'static>(value: &T) -> Result<Self> {
        let type_key = TypeKey::of::<T>();
        Ok(Self {
            type_key,
            fields: to_fields(value, type_key)?,
        })
    }

    /// Rebuilds a concrete value from the properties.
    pub fn into_instance<T: DeserializeOwned>(self) -> Result<T> {
        Ok(serde_json::from_value(Value::Object(self.fields))?)
    }

    #[must_use]
    pub fn type_key(&self) -> TypeKey {
        self.type_key
    }

    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    #[must_use]
    pub fn get(&self, property: &str) -> Option<&Value> {
        self.fields.get(property)
    }

    /// Extract a string property.
    #[must_use]
    pub fn get_str(&self, property: &str) -> Option<&str> {
        self.fields.get(property).and_then(Value::as_str)
    }

    /// Sets a property, returning the previous value.
    pub fn set(&mut self, property: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(property.into(), value)
    }

    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
