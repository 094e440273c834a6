//! The mapping engine and its builder.

use crate::config::MapperConfig;
use crate::error::{MapError, MapResult};
use crate::registry::{DataTransformer, TransformRegistry};
use crate::resolver::{NamingPattern, TypePairTable};
use litemapper_types::{Record, TypeDescriptor, TypeKey, TypeUniverse, ValueKind};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, info};

/// Collects configuration and transforms, then freezes them into a [`Mapper`].
#[derive(Debug)]
pub struct MapperBuilder {
    config: MapperConfig,
    source: TypeUniverse,
    destination: TypeUniverse,
    registry: TransformRegistry,
}

impl MapperBuilder {
    #[must_use]
    pub fn new(source: TypeUniverse, destination: TypeUniverse) -> Self {
        Self {
            config: MapperConfig::default(),
            source,
            destination,
            registry: TransformRegistry::new(),
        }
    }

    /// Replaces the universe searched for source types.
    #[must_use]
    pub fn source(mut self, universe: TypeUniverse) -> Self {
        self.source = universe;
        self
    }

    /// Replaces the universe searched for counterparts.
    #[must_use]
    pub fn destination(mut self, universe: TypeUniverse) -> Self {
        self.destination = universe;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: MapperConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn pattern(mut self, pattern: NamingPattern) -> Self {
        self.config.naming = pattern;
        self
    }

    /// Registers a transform over raw values for `S.property`.
    pub fn on<S>(
        mut self,
        property: &str,
        f: impl Fn(Value) -> Value + Send + Sync + 'static,
    ) -> MapResult<Self>
    where
        S: Default + Serialize + DeserializeOwned + 'static,
    {
        self.registry = self.registry.on::<S>(property, f)?;
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
        self.registry = self.registry.on_transformer::<S>(property, transformer)?;
        Ok(self)
    }

    /// Registers a transform over concrete types for `S.property`.
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
        self.registry = self.registry.on_typed::<S, In, Out>(property, f)?;
        Ok(self)
    }

    /// Resolves type pairs and freezes the configuration.
    pub fn build(self) -> MapResult<Mapper> {
        let pairs = TypePairTable::resolve(&self.source, &self.destination, &self.config.naming)?;
        info!(
            pairs = pairs.pair_count(),
            transforms = self.registry.len(),
            "Mapper ready"
        );
        Ok(Mapper {
            pairs,
            transforms: self.registry,
        })
    }
}

/// Maps values between paired types.
///
/// Immutable once built; share it behind an `Arc` to map from many threads.
#[derive(Debug, Clone)]
pub struct Mapper {
    pairs: TypePairTable,
    transforms: TransformRegistry,
}

impl Mapper {
    /// Starts configuring a mapper over two type universes.
    #[must_use]
    pub fn configure(
        source: TypeUniverse,
        destination: TypeUniverse,
        pattern: NamingPattern,
    ) -> MapperBuilder {
        MapperBuilder::new(source, destination).pattern(pattern)
    }

    /// Builds a fresh `D` from the same-named properties of `source`.
    ///
    /// `D` must be the configured counterpart of the source's type.
    pub fn map<D>(&self, source: &(impl Serialize + 'static)) -> MapResult<D>
    where
        D: DeserializeOwned + 'static,
    {
        let source_key = TypeKey::of_val(source);
        let destination = self.destination_for(source_key)?;
        let requested = TypeKey::of::<D>();
        if destination.key() != requested {
            return Err(MapError::UnexpectedDestination {
                requested: requested.full_name().to_string(),
                paired: destination.key().full_name().to_string(),
            });
        }

        let record = Record::from_instance(source)?;
        let fields = Value::Object(self.populate(&record, destination)?);
        D::deserialize(&fields)
            .map_err(|source| locate_rejection(&record, destination, &fields, source))
    }

    /// Maps a dynamically typed record into a record of the paired type.
    ///
    /// The populated fields are checked against the destination type, so a
    /// returned record always deserializes as that type.
    pub fn map_record(&self, record: &Record) -> MapResult<Record> {
        let destination = self.destination_for(record.type_key())?;
        let fields = self.populate(record, destination)?;
        match destination.validate(&fields) {
            Ok(()) => Ok(Record::new(destination.key(), fields)),
            Err(litemapper_types::Error::Serialization(source)) => Err(locate_rejection(
                record,
                destination,
                &Value::Object(fields),
                source,
            )),
            Err(source) => Err(MapError::Instantiation {
                type_name: destination.name().to_string(),
                source,
            }),
        }
    }

    /// The configured counterpart of `key`, if any.
    #[must_use]
    pub fn paired_type(&self, key: TypeKey) -> Option<TypeKey> {
        self.pairs.paired(key).map(TypeDescriptor::key)
    }

    #[must_use]
    pub fn pairs(&self) -> &TypePairTable {
        &self.pairs
    }

    #[must_use]
    pub fn transforms(&self) -> &TransformRegistry {
        &self.transforms
    }

    fn destination_for(&self, key: TypeKey) -> MapResult<&TypeDescriptor> {
        self.pairs
            .paired(key)
            .ok_or_else(|| MapError::ConfigurationMissing {
                type_name: key.full_name().to_string(),
            })
    }

    /// Builds the destination's field map: defaults first, then every
    /// same-named source property, transformed when a transform is registered.
    fn populate(
        &self,
        record: &Record,
        destination: &TypeDescriptor,
    ) -> MapResult<Map<String, Value>> {
        let source_key = record.type_key();
        let instantiation = |source| MapError::Instantiation {
            type_name: destination.name().to_string(),
            source,
        };
        let mut fields = destination.instantiate().map_err(instantiation)?;
        let declared = destination.property_names().map_err(instantiation)?;

        for (property, raw) in record.fields() {
            // Properties missing on the destination are skipped.
            if !declared.iter().any(|name| name == property) {
                continue;
            }

            let value = match self.transforms.get_transform_for(source_key, property) {
                Some(transform) => {
                    debug!(
                        type_name = source_key.name(),
                        property = property.as_str(),
                        "Applying transform"
                    );
                    let transformed = transform
                        .apply(raw.clone())
                        .map_err(|source| MapError::Transform {
                            type_name: source_key.name().to_string(),
                            property: property.clone(),
                            source,
                        })?;
                    // A null result means "no value"; the raw value is kept.
                    if transformed.is_null() {
                        raw.clone()
                    } else {
                        transformed
                    }
                }
                None => raw.clone(),
            };
            fields.insert(property.clone(), value);
        }

        Ok(fields)
    }
}

/// Finds the property whose value the destination rejected.
///
/// Each copied property is tried alone on top of the destination's
/// defaults. When none fails on its own, the rejection concerns the
/// values together and is reported as [`MapError::Deserialize`].
fn locate_rejection(
    record: &Record,
    destination: &TypeDescriptor,
    fields: &Value,
    rejection: serde_json::Error,
) -> MapError {
    let Ok(defaults) = destination.instantiate() else {
        return deserialize_error(destination, rejection);
    };
    if destination.validate(&defaults).is_err() {
        return deserialize_error(destination, rejection);
    }

    for property in record.fields().keys() {
        let Some(value) = fields.get(property.as_str()) else {
            continue;
        };
        let mut candidate = defaults.clone();
        candidate.insert(property.clone(), value.clone());
        if let Err(litemapper_types::Error::Serialization(source)) =
            destination.validate(&candidate)
        {
            return MapError::TypeMismatch {
                type_name: destination.name().to_string(),
                property: property.clone(),
                found: ValueKind::of(value),
                source,
            };
        }
    }
    deserialize_error(destination, rejection)
}

fn deserialize_error(destination: &TypeDescriptor, source: serde_json::Error) -> MapError {
    MapError::Deserialize {
        type_name: destination.name().to_string(),
        source,
    }
}
