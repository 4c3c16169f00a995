//! The [`Environment`] typemap.
//!
//! Ambient values (theme, locale, debug flags) flow down the view tree
//! through the environment. Values are plain data keyed by type; there is no
//! reactive resolution layer — the host re-renders with a fresh environment
//! when an ambient value changes.

use alloc::{collections::BTreeMap, rc::Rc};
use core::any::{Any, TypeId};
use core::fmt::Debug;

/// A typemap of ambient values shared down the view tree.
#[derive(Clone, Default)]
pub struct Environment {
    values: BTreeMap<TypeId, Rc<dyn Any>>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value, replacing any previous value of the same type.
    pub fn insert<T: 'static>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Rc::new(value));
    }

    /// Returns a copy of this environment with `value` inserted.
    #[must_use]
    pub fn with<T: 'static>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Looks up a value by type.
    #[must_use]
    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.as_ref().downcast_ref::<T>())
    }

    /// Returns true if a value of type `T` is present.
    #[must_use]
    pub fn contains<T: 'static>(&self) -> bool {
        self.values.contains_key(&TypeId::of::<T>())
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Environment")
            .field("values", &self.values.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Accent(u8);

    #[test]
    fn insert_and_get() {
        let env = Environment::new().with(Accent(7));
        assert_eq!(env.get::<Accent>(), Some(&Accent(7)));
        assert!(env.get::<u32>().is_none());
    }

    #[test]
    fn insert_replaces() {
        let env = Environment::new().with(Accent(1)).with(Accent(2));
        assert_eq!(env.get::<Accent>(), Some(&Accent(2)));
    }

    #[test]
    fn clone_shares_values() {
        let env = Environment::new().with(Accent(3));
        let copy = env.clone();
        assert_eq!(copy.get::<Accent>(), Some(&Accent(3)));
        assert!(copy.contains::<Accent>());
    }
}
