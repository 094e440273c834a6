use crate::{TypeDescriptor, TypeKey};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A named group of candidate types, searched in registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeUniverse {
    name: String,
    types: Vec<TypeDescriptor>,
}

impl TypeUniverse {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: Vec::new(),
        }
    }

    /// Adds a default-constructible type.
    #[must_use]
    pub fn with<T: Default + Serialize + DeserializeOwned + 'static>(mut self) -> Self {
        self.insert(TypeDescriptor::of::<T>());
        self
    }

    /// Adds a type that can only be mapped from.
    #[must_use]
    pub fn with_opaque<T: 'static>(mut self) -> Self {
        self.insert(TypeDescriptor::opaque::<T>());
        self
    }

    /// Adds a descriptor. A type that is already present keeps its position
    /// and has its descriptor replaced.
    pub fn insert(&mut self, descriptor: TypeDescriptor) {
        match self.types.iter_mut().find(|t| t.key() == descriptor.key()) {
            Some(existing) => *existing = descriptor,
            None => self.types.push(descriptor),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn get(&self, key: TypeKey) -> Option<&TypeDescriptor> {
        self.types.iter().find(|t| t.key() == key)
    }

    #[must_use]
    pub fn contains(&self, key: TypeKey) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TypeDescriptor> {
        self.types.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
