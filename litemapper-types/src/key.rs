//! Type identity.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Opaque handle identifying one concrete Rust type.
///
/// Equality and hashing use the `TypeId` only; the name is carried along
/// for pattern matching and diagnostics.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    full_name: &'static str,
}

impl TypeKey {
    /// Returns the key of `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            full_name: type_name::<T>(),
        }
    }

    /// Returns the key of the value's static type.
    #[must_use]
    pub fn of_val<T: ?Sized + 'static>(_value: &T) -> Self {
        Self::of::<T>()
    }

    /// Returns the underlying `TypeId`.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Full path of the type, e.g. `app::models::domain::User`.
    #[must_use]
    pub fn full_name(&self) -> &'static str {
        self.full_name
    }

    /// Simple name: last path segment with generic arguments stripped.
    #[must_use]
    pub fn name(&self) -> &'static str {
        let base = strip_generics(self.full_name);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Module path of the type, empty for types at a crate root.
    #[must_use]
    pub fn module_path(&self) -> &'static str {
        strip_generics(self.full_name)
            .rsplit_once("::")
            .map_or("", |(module, _)| module)
    }
}

fn strip_generics(path: &str) -> &str {
    path.split('<').next().unwrap_or(path)
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.full_name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
