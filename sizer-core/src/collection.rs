use crate::catalog::CatalogItem;

/// An item placed in the comparison view.
pub type DisplayedItem = CatalogItem;

/// Ordered sequence of displayed items.
///
/// Mutations return a new collection and leave `self` untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Collection {
    items: Vec<DisplayedItem>,
}

impl Collection {
    pub fn new() -> Self {
        Collection::default()
    }

    /// Collection holding only the reference card.
    pub fn with_reference() -> Self {
        Collection {
            items: vec![CatalogItem::reference_card()],
        }
    }

    pub fn items(&self) -> &[DisplayedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DisplayedItem> {
        self.items.get(index)
    }

    pub fn append(&self, item: DisplayedItem) -> Collection {
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend_from_slice(&self.items);
        items.push(item);
        Collection { items }
    }

    /// Drop the item at `index`; later items move one position left.
    ///
    /// `index` must be in bounds. Out-of-range indexes leave the collection
    /// as it was in release builds.
    pub fn remove_at(&self, index: usize) -> Collection {
        debug_assert!(
            index < self.items.len(),
            "remove_at({index}) on a collection of {}",
            self.items.len()
        );
        if index >= self.items.len() {
            return self.clone();
        }
        let items = self.items[..index]
            .iter()
            .chain(&self.items[index + 1..])
            .cloned()
            .collect();
        Collection { items }
    }
}

impl FromIterator<DisplayedItem> for Collection {
    fn from_iter<I: IntoIterator<Item = DisplayedItem>>(iter: I) -> Self {
        Collection {
            items: iter.into_iter().collect(),
        }
    }
}
