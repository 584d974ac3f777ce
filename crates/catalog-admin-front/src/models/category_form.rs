use common::request::DEFAULT_CATEGORY_COLOR;
use common::{Category, CategoryPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryField {
    Name,
    Description,
    Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryForm {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub color: String,
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            color: DEFAULT_CATEGORY_COLOR.to_string(),
        }
    }
}

impl CategoryForm {
    pub fn from_category(category: &Category) -> Self {
        let color = if category.color.is_empty() {
            DEFAULT_CATEGORY_COLOR.to_string()
        } else {
            category.color.clone()
        };

        Self {
            id: Some(category.id),
            name: category.name.clone(),
            description: category.description.clone().unwrap_or_default(),
            color,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Category"
        } else {
            "Add Category"
        }
    }

    pub fn set(&mut self, field: CategoryField, value: String) {
        match field {
            CategoryField::Name => self.name = value,
            CategoryField::Description => self.description = value,
            CategoryField::Color => self.color = value,
        }
    }

    pub fn to_payload(&self) -> CategoryPayload {
        CategoryPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            color: self.color.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_form_uses_default_color() {
        let form = CategoryForm::default();
        assert_eq!(form.title(), "Add Category");
        assert_eq!(form.color, DEFAULT_CATEGORY_COLOR);
    }

    #[test]
    fn test_form_from_category_without_color() {
        let category = Category {
            id: 8,
            name: "Decoração".to_string(),
            description: Some("Peças decorativas para casa".to_string()),
            color: String::new(),
        };

        let form = CategoryForm::from_category(&category);
        assert_eq!(form.id, Some(8));
        assert_eq!(form.title(), "Edit Category");
        assert_eq!(form.description, "Peças decorativas para casa");
        assert_eq!(form.color, DEFAULT_CATEGORY_COLOR);
    }
}
