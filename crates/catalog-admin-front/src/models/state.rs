use common::{Category, Product};
use yewdux::prelude::*;

use super::{CategoryForm, ProductForm};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Products,
    Categories,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Product,
    Category,
}

impl EntityKind {
    pub fn noun(&self) -> &'static str {
        match self {
            EntityKind::Product => "product",
            EntityKind::Category => "category",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Product => "Product",
            EntityKind::Category => "Category",
        }
    }
}

/// A delete waiting for the user to confirm it.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingDelete {
    pub kind: EntityKind,
    pub id: i64,
    pub name: Option<String>,
}

impl PendingDelete {
    pub fn title(&self) -> String {
        format!("Delete {}", self.kind.title())
    }

    pub fn message(&self) -> String {
        match &self.name {
            Some(name) => format!(
                "Are you sure you want to delete {} '{}'?",
                self.kind.noun(),
                name
            ),
            None => format!("Are you sure you want to delete this {}?", self.kind.noun()),
        }
    }
}

/// Everything the admin screens render from.
#[derive(Debug, Clone, Default, PartialEq, Store)]
pub struct CatalogState {
    pub section: Section,
    pub products: Vec<Product>,
    pub products_loaded: bool,
    /// Cached list used by the product form's category selector.
    pub categories: Vec<Category>,
    pub categories_loaded: bool,
    pub product_form: Option<ProductForm>,
    pub category_form: Option<CategoryForm>,
    pub pending_delete: Option<PendingDelete>,
}

impl CatalogState {
    pub fn product(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn category(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn entity_name(&self, kind: EntityKind, id: i64) -> Option<String> {
        match kind {
            EntityKind::Product => self.product(id).map(|p| p.name.clone()),
            EntityKind::Category => self.category(id).map(|c| c.name.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_delete_message() {
        let named = PendingDelete {
            kind: EntityKind::Category,
            id: 2,
            name: Some("Joias".to_string()),
        };
        assert_eq!(named.title(), "Delete Category");
        assert_eq!(
            named.message(),
            "Are you sure you want to delete category 'Joias'?"
        );

        let unnamed = PendingDelete {
            kind: EntityKind::Product,
            id: 9,
            name: None,
        };
        assert_eq!(
            unnamed.message(),
            "Are you sure you want to delete this product?"
        );
    }
}
