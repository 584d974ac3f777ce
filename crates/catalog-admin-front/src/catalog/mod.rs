//! Admin panel behaviour, independent of the browser.
//!
//! [`CatalogAdmin`] owns the [`CatalogState`] and runs every user action
//! against the API. After each change it hands a snapshot of the state to the
//! registered observer, which the UI uses to re-render.

pub mod notifier;

use std::cell::RefCell;

use common::Product;

pub use notifier::Notifier;
#[cfg(target_arch = "wasm32")]
pub use notifier::AlertNotifier;

use crate::api::{APICaller, ApiError, Transport};
use crate::models::{
    CatalogState, CategoryField, CategoryForm, EntityKind, PendingDelete, ProductField,
    ProductForm, Section,
};

type Observer = Box<dyn Fn(&CatalogState)>;

pub struct CatalogAdmin<T, N> {
    api: APICaller<T>,
    notifier: N,
    state: RefCell<CatalogState>,
    observer: RefCell<Option<Observer>>,
}

impl<T: Transport, N: Notifier> CatalogAdmin<T, N> {
    pub fn new(api: APICaller<T>, notifier: N) -> Self {
        Self {
            api,
            notifier,
            state: RefCell::new(CatalogState::default()),
            observer: RefCell::new(None),
        }
    }

    pub fn set_observer(&self, observer: impl Fn(&CatalogState) + 'static) {
        *self.observer.borrow_mut() = Some(Box::new(observer));
    }

    pub fn state(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    // The state borrow must end before the observer runs and before any await.
    fn update(&self, change: impl FnOnce(&mut CatalogState)) {
        change(&mut self.state.borrow_mut());
        let snapshot = self.state.borrow().clone();
        if let Some(observer) = self.observer.borrow().as_ref() {
            observer(&snapshot);
        }
    }

    fn fail(&self, error: &ApiError, message: &str) {
        log::error!("{}: {}", message, error);
        self.notifier.notify(message);
    }

    /// Start-up load: fills the category cache used by the product form's
    /// selector. Each section loads its own list when it is shown.
    pub async fn initialize(&self) {
        log::debug!("Initializing catalog admin");
        self.load_categories().await;
    }

    pub async fn show_section(&self, section: Section) {
        self.update(|state| state.section = section);
        match section {
            Section::Products => self.load_products().await,
            Section::Categories => self.load_categories().await,
        }
    }

    pub async fn load_products(&self) {
        match self.api.list_products().await {
            Ok(products) => {
                log::info!("Loaded {} products", products.len());
                self.update(|state| {
                    state.products = products;
                    state.products_loaded = true;
                });
            }
            Err(e) => self.fail(&e, "Failed to load products"),
        }
    }

    pub async fn load_categories(&self) {
        match self.api.list_categories().await {
            Ok(categories) => {
                log::info!("Loaded {} categories", categories.len());
                self.update(|state| {
                    state.categories = categories;
                    state.categories_loaded = true;
                });
            }
            Err(e) => self.fail(&e, "Failed to load categories"),
        }
    }

    async fn reload(&self, kind: EntityKind) {
        match kind {
            EntityKind::Product => self.load_products().await,
            EntityKind::Category => self.load_categories().await,
        }
    }

    /// Opens the product modal, blank when `product` is `None`.
    pub fn open_product_form(&self, product: Option<&Product>) {
        self.update(|state| {
            let form = match product {
                Some(product) => ProductForm::from_product(product),
                None => ProductForm::blank(state.categories.first().map(|c| c.name.as_str())),
            };
            state.product_form = Some(form);
        });
    }

    pub async fn edit_product(&self, id: i64) {
        match self.api.get_product(id).await {
            Ok(product) => self.open_product_form(Some(&product)),
            Err(e) => self.fail(&e, "Failed to load product"),
        }
    }

    pub fn update_product_form(&self, field: ProductField, value: String) {
        self.update(|state| {
            if let Some(form) = state.product_form.as_mut() {
                form.set(field, value);
            }
        });
    }

    pub fn close_product_form(&self) {
        self.update(|state| state.product_form = None);
    }

    pub async fn submit_product_form(&self) {
        let Some(form) = self.state.borrow().product_form.clone() else {
            return;
        };
        let payload = form.to_payload();

        let result = match form.id {
            Some(id) => self.api.update_product(id, &payload).await,
            None => self.api.create_product(&payload).await,
        };

        match result {
            Ok(()) => {
                log::info!("Saved product '{}'", payload.name);
                self.close_product_form();
                self.finish_save(EntityKind::Product, form.is_editing()).await;
            }
            Err(e) => self.fail_save(EntityKind::Product, &e),
        }
    }

    /// Opens the category modal, blank when `id` is `None`.
    ///
    /// Editing reads from the cached category list; an id missing from the
    /// cache leaves everything as it was.
    pub fn open_category_form(&self, id: Option<i64>) {
        self.update(|state| {
            let form = match id {
                Some(id) => match state.category(id) {
                    Some(category) => CategoryForm::from_category(category),
                    None => return,
                },
                None => CategoryForm::default(),
            };
            state.category_form = Some(form);
        });
    }

    pub fn edit_category(&self, id: i64) {
        self.open_category_form(Some(id));
    }

    pub fn update_category_form(&self, field: CategoryField, value: String) {
        self.update(|state| {
            if let Some(form) = state.category_form.as_mut() {
                form.set(field, value);
            }
        });
    }

    pub fn close_category_form(&self) {
        self.update(|state| state.category_form = None);
    }

    pub async fn submit_category_form(&self) {
        let Some(form) = self.state.borrow().category_form.clone() else {
            return;
        };
        let payload = form.to_payload();

        let result = match form.id {
            Some(id) => self.api.update_category(id, &payload).await,
            None => self.api.create_category(&payload).await,
        };

        match result {
            Ok(()) => {
                log::info!("Saved category '{}'", payload.name);
                self.close_category_form();
                self.finish_save(EntityKind::Category, form.is_editing()).await;
            }
            Err(e) => self.fail_save(EntityKind::Category, &e),
        }
    }

    async fn finish_save(&self, kind: EntityKind, updated: bool) {
        self.reload(kind).await;
        let verb = if updated { "updated" } else { "created" };
        self.notifier
            .notify(&format!("{} {} successfully!", kind.title(), verb));
    }

    // The form is left open so the user can correct it and retry.
    fn fail_save(&self, kind: EntityKind, error: &ApiError) {
        let fallback = format!("Failed to save {}", kind.noun());
        log::error!("{}: {}", fallback, error);
        let reason = error.server_message().unwrap_or(&fallback);
        self.notifier.notify(&format!("{}: {}", fallback, reason));
    }

    /// Asks for confirmation; nothing is sent until [`Self::confirm_delete`].
    pub fn request_delete(&self, kind: EntityKind, id: i64) {
        self.update(|state| {
            let name = state.entity_name(kind, id);
            state.pending_delete = Some(PendingDelete { kind, id, name });
        });
    }

    pub fn cancel_delete(&self) {
        self.update(|state| state.pending_delete = None);
    }

    pub async fn confirm_delete(&self) {
        let Some(pending) = self.state.borrow().pending_delete.clone() else {
            return;
        };
        self.update(|state| state.pending_delete = None);

        let result = match pending.kind {
            EntityKind::Product => self.api.delete_product(pending.id).await,
            EntityKind::Category => self.api.delete_category(pending.id).await,
        };

        match result {
            Ok(()) => {
                log::info!("Deleted {} {}", pending.kind.noun(), pending.id);
                self.reload(pending.kind).await;
                self.notifier
                    .notify(&format!("{} deleted successfully!", pending.kind.title()));
            }
            Err(e) => self.fail(&e, &format!("Failed to delete {}", pending.kind.noun())),
        }
    }
}
