//! Convention-based object-to-object mapping.
//!
//! Converts values between two families of types (typically domain models and
//! their transfer objects) without a hand-written conversion per pair:
//!
//! - [`TypePairTable`] — pairs types across two [`TypeUniverse`]s by name
//!   (`User` ↔ `UserDto`) according to a [`NamingPattern`]
//! - [`TransformRegistry`] — per (source type, property) value transforms
//! - [`Mapper`] — copies same-named properties from a source into a fresh
//!   instance of the paired type, applying registered transforms
//!
//! Configuration happens once through [`MapperBuilder`]; the resulting
//! [`Mapper`] is immutable and can be shared across threads.
//!
//! ```ignore
//! let mapper = Mapper::configure(domain, dtos, NamingPattern::default())
//!     .on::<User>("last_name", |v| json!(format!("{}-lastname", v.as_str().unwrap_or_default())))?
//!     .build()?;
//! let dto: UserDto = mapper.map(&user)?;
//! ```

mod config;
mod engine;
mod error;
mod registry;
mod resolver;

pub use config::MapperConfig;
pub use engine::{Mapper, MapperBuilder};
pub use error::{MapError, MapResult};
pub use registry::{DataTransformer, Transform, TransformRegistry};
pub use resolver::{MatchMode, NamingPattern, TypePairTable};

pub use litemapper_types::{Record, TypeDescriptor, TypeKey, TypeUniverse, ValueKind};
