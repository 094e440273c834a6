use crate::fields::declared_fields;
use crate::{Error, Result, TypeKey, ValueKind};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// How to build and check instances of a default-constructible type.
#[derive(Debug, Clone, Copy)]
struct Constructor {
    instantiate: fn() -> Result<Map<String, Value>>,
    validate: fn(&Value) -> serde_json::Result<()>,
    fields: fn() -> Option<&'static [&'static str]>,
}

/// Describes a mappable type: its identity and, when it has one, how to
/// build and validate its field map.
#[derive(Debug, Clone, Copy)]
pub struct TypeDescriptor {
    key: TypeKey,
    constructor: Option<Constructor>,
}

impl TypeDescriptor {
    /// Describes a type that can be read, default-constructed and rebuilt
    /// from a field map.
    #[must_use]
    pub fn of<T: Default + Serialize + DeserializeOwned + 'static>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            constructor: Some(Constructor {
                instantiate: default_fields::<T>,
                validate: validate_as::<T>,
                fields: declared_fields::<T>,
            }),
        }
    }

    /// Describes a type without a default constructor. It can be mapped
    /// from, but never into.
    #[must_use]
    pub fn opaque<T: 'static>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            constructor: None,
        }
    }

    #[must_use]
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Simple name of the described type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.key.name()
    }

    #[must_use]
    pub fn is_constructible(&self) -> bool {
        self.constructor.is_some()
    }

    /// Builds a fresh field map holding the type's default values.
    ///
    /// Fields the type skips when serializing are absent from the map.
    pub fn instantiate(&self) -> Result<Map<String, Value>> {
        (self.constructor()?.instantiate)()
    }

    /// Names of the properties declared on the type.
    ///
    /// Taken from the type's `Deserialize` impl, so fields that are skipped
    /// while serializing still count. Falls back to the keys of the default
    /// instance for types that do not deserialize as a plain struct.
    pub fn property_names(&self) -> Result<Vec<String>> {
        let constructor = self.constructor()?;
        match (constructor.fields)() {
            Some(fields) => Ok(fields.iter().map(|f| (*f).to_string()).collect()),
            None => Ok((constructor.instantiate)()?.into_iter().map(|(k, _)| k).collect()),
        }
    }

    /// Checks that `fields` deserializes as the described type.
    pub fn validate(&self, fields: &Map<String, Value>) -> Result<()> {
        let value = Value::Object(fields.clone());
        (self.constructor()?.validate)(&value)?;
        Ok(())
    }

    fn constructor(&self) -> Result<&Constructor> {
        self.constructor
            .as_ref()
            .ok_or_else(|| Error::NotConstructible {
                type_name: self.key.name().to_string(),
            })
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for TypeDescriptor {}

fn default_fields<T: Default + Serialize + 'static>() -> Result<Map<String, Value>> {
    to_fields(&T::default(), TypeKey::of::<T>())
}

fn validate_as<T: DeserializeOwned>(value: &Value) -> serde_json::Result<()> {
    T::deserialize(value).map(drop)
}

pub(crate) fn to_fields<T: Serialize + ?Sized>(value: &T, key: TypeKey) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(fields) => Ok(fields),
        other => Err(Error::NotStructured {
            type_name: key.name().to_string(),
            found: ValueKind::of(&other),
        }),
    }
}
