//! Immutable catalog snapshot injected into every engine call.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::category::Category;
use crate::error::{ModelError, Result};
use crate::part::Part;

/// The set of parts available for one configuration session.
///
/// Parts are grouped by category in load order. The snapshot never changes
/// after construction; a catalog sync produces a new `Catalog`.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    by_category: BTreeMap<Category, Vec<Arc<Part>>>,
    by_id: BTreeMap<String, Arc<Part>>,
}

impl Catalog {
    /// Build a catalog from typed parts. Duplicate ids are rejected.
    pub fn new(parts: impl IntoIterator<Item = Part>) -> Result<Self> {
        let mut catalog = Catalog::default();
        for part in parts {
            catalog.insert(part)?;
        }
        Ok(catalog)
    }

    /// Add a part. Used by the loader while the snapshot is being built.
    pub fn insert(&mut self, part: Part) -> Result<()> {
        if self.by_id.contains_key(&part.id) {
            return Err(ModelError::DuplicateId(part.id));
        }
        let part = Arc::new(part);
        self.by_id.insert(part.id.clone(), Arc::clone(&part));
        self.by_category
            .entry(part.category())
            .or_default()
            .push(part);
        Ok(())
    }

    /// All parts of a category, in load order.
    pub fn by_category(&self, category: Category) -> &[Arc<Part>] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Part>> {
        self.by_id.get(id)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Number of parts per category, including empty categories.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.by_category(category).len()))
            .collect()
    }
}
