//! Common trait for registries that store named items.

/// Common trait for registries that store named items.
///
/// Registries are append-only: items are added once during setup and only
/// read afterwards, so the trait exposes lookups and enumeration but no
/// removal.
///
/// # Type Parameters
///
/// * `V` - The type of value stored in the registry
///
/// # Example
///
/// ```
/// use patternbook::registry::{DemoRegistry, Registry};
/// use std::fmt::Write;
///
/// let mut registry = DemoRegistry::new();
/// registry
///     .register("hello", |out| {
///         writeln!(out, "Hello!")?;
///         Ok(())
///     })
///     .unwrap();
///
/// assert!(registry.contains("hello"));
/// assert_eq!(registry.len(), 1);
/// assert_eq!(registry.names().collect::<Vec<_>>(), vec!["hello"]);
/// ```
pub trait Registry<V> {
    /// Check if an item with the given name exists in the registry.
    fn contains(&self, name: &str) -> bool;

    /// Get an item by name.
    ///
    /// Returns `None` if no item with the given name exists.
    fn get(&self, name: &str) -> Option<&V>;

    /// Get the number of items in the registry.
    fn len(&self) -> usize;

    /// Check if the registry is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over all names in registration order.
    ///
    /// The iterator borrows the registry; calling `names` again starts over.
    fn names(&self) -> Box<dyn Iterator<Item = &str> + '_>;
}
