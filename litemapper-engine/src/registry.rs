//! Per-property value transforms.

use crate::error::{MapError, MapResult};
use litemapper_types::{TypeDescriptor, TypeKey};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A transform expressed as an object.
///
/// Implement this when the transform carries state or deserves a name;
/// plain closures work through [`TransformRegistry::on`].
pub trait DataTransformer: Send + Sync {
    fn transform(&self, data: Value) -> Value;
}

type TransformFn = dyn Fn(Value) -> Result<Value, serde_json::Error> + Send + Sync;

/// A registered transform, adapted to one common function shape.
#[derive(Clone)]
pub struct Transform(Arc<TransformFn>);

impl Transform {
    pub fn new(f: impl Fn(Value) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(move |value: Value| -> Result<Value, serde_json::Error> {
            Ok(f(value))
        }))
    }

    pub fn from_transformer(transformer: impl DataTransformer + 'static) -> Self {
        Self(Arc::new(move |value: Value| -> Result<Value, serde_json::Error> {
            Ok(transformer.transform(value))
        }))
    }

    /// Wraps a function over concrete types. The raw value is deserialized
    /// into `In` and the result serialized back.
    pub fn typed<In, Out>(f: impl Fn(In) -> Out + Send + Sync + 'static) -> Self
    where
        In: DeserializeOwned,
        Out: Serialize,
    {
        Self(Arc::new(move |value: Value| -> Result<Value, serde_json::Error> {
            let input: In = serde_json::from_value(value)?;
            serde_json::to_value(f(input))
        }))
    }

    pub fn apply(&self, value: Value) -> Result<Value, serde_json::Error> {
        (self.0)(value)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(..)")
    }
}

/// Transforms keyed by source type, then property name.
///
/// Property names are checked against the source type when registered.
/// Registering the same key again replaces the earlier transform.
#[derive(Debug, Clone, Default)]
pub struct TransformRegistry {
    entries: HashMap<TypeKey, HashMap<String, Transform>>,
}

impl TransformRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a function over raw values for `S.property`.
    pub fn on<S>(
        mut self,
        property: &str,
        f: impl Fn(Value) -> Value + Send + Sync + 'static,
    ) -> MapResult<Self>
    where
        S: Default + Serialize + DeserializeOwned + 'static,
    {
        self.register::<S>(property, Transform::new(f))?;
        Ok(self)
    }

    /// Registers a [`DataTransformer`] for `S.property`.
    pub fn on_transformer<S>(
        mut self,
        property: &str,
        transformer: impl DataTransformer + 'static,
    ) -> MapResult<Self>
    where
        S: Default + Serialize + DeserializeOwned + 'static,
    {
        self.register::<S>(property, Transform::from_transformer(transformer))?;
        Ok(self)
    }

    /// Registers a function over concrete types for `S.property`.
    pub fn on_typed<S, In, Out>(
        mut self,
        property: &str,
        f: impl Fn(In) -> Out + Send + Sync + 'static,
    ) -> MapResult<Self>
    where
        S: Default + Serialize + DeserializeOwned + 'static,
        In: DeserializeOwned,
        Out: Serialize,
    {
        self.register::<S>(property, Transform::typed(f))?;
        Ok(self)
    }

    /// Registers `transform` for `S.property`, failing if `S` does not
    /// declare the property.
    pub fn register<S>(&mut self, property: &str, transform: Transform) -> MapResult<()>
    where
        S: Default + Serialize + DeserializeOwned + 'static,
    {
        let descriptor = TypeDescriptor::of::<S>();
        let declared = descriptor.property_names()?;
        if !declared.iter().any(|name| name == property) {
            return Err(MapError::PropertySelectorInvalid {
                type_name: descriptor.name().to_string(),
                property: property.to_string(),
            });
        }

        let replaced = self
            .entries
            .entry(descriptor.key())
            .or_default()
            .insert(property.to_string(), transform);
        if replaced.is_some() {
            debug!(
                type_name = descriptor.name(),
                property, "Transform replaced an earlier registration"
            );
        }
        Ok(())
    }

    #[must_use]
    pub fn get_transform_for(&self, key: TypeKey, property: &str) -> Option<&Transform> {
        self.entries.get(&key)?.get(property)
    }

    /// Total number of registered transforms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
