//! The shape every transfer object shares: a name and a property bag.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use super::PropertyBag;
use crate::{Error, Result};

/// Common surface of all creation transfer objects.
///
/// Derivations never touch the receiver; they return a new value. Only
/// `with_name` can fail, since it is the only one that takes an unchecked name.
pub trait CreationTo: sealed::Rebuild + Sized {
    /// Element kind used in diagnostics, e.g. `"point"`.
    const KIND: &'static str;

    fn name(&self) -> &str;

    fn properties(&self) -> &PropertyBag;

    fn property(&self, key: &str) -> Option<&str> {
        self.properties().get(key)
    }

    fn with_name(&self, name: impl Into<String>) -> Result<Self> {
        let name = checked_name(Self::KIND, name.into())?;
        Ok(self.rebuild(name, self.properties().clone()))
    }

    fn with_properties(&self, properties: PropertyBag) -> Self {
        self.rebuild(self.name().to_owned(), properties)
    }

    /// `Some(value)` upserts `key`, `None` removes it.
    fn with_property(&self, key: &str, value: Option<&str>) -> Self {
        self.rebuild(self.name().to_owned(), self.properties().with(key, value))
    }
}

pub(crate) mod sealed {
    use crate::model::PropertyBag;

    /// Copy with a replaced identity. `name` has already been checked.
    pub trait Rebuild {
        fn rebuild(&self, name: String, properties: PropertyBag) -> Self;
    }
}

pub(crate) fn checked_name(kind: &'static str, name: String) -> Result<String> {
    if name.is_empty() {
        return Err(Error::construction(kind, name, "name must not be empty"));
    }
    Ok(name)
}

/// Same check as [`checked_name`], at the serde boundary.
pub(crate) fn deserialize_name<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    let name = String::deserialize(deserializer)?;
    if name.is_empty() {
        return Err(D::Error::custom("name must not be empty"));
    }
    Ok(name)
}

/// Implements the sealed rebuild hook and `CreationTo` for a TO with
/// `name` and `properties` fields.
macro_rules! creation_to {
    ($ty:ty, $kind:literal) => {
        impl $crate::model::creation::sealed::Rebuild for $ty {
            fn rebuild(&self, name: String, properties: $crate::model::PropertyBag) -> Self {
                Self { name, properties, ..self.clone() }
            }
        }

        impl $crate::model::CreationTo for $ty {
            const KIND: &'static str = $kind;

            fn name(&self) -> &str {
                &self.name
            }

            fn properties(&self) -> &$crate::model::PropertyBag {
                &self.properties
            }
        }
    };
}

pub(crate) use creation_to;
