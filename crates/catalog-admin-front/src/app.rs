use std::ops::Deref;
use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

use crate::api::fetch::FetchTransport;
use crate::api::APICaller;
use crate::catalog::{AlertNotifier, CatalogAdmin};
use crate::components::Layout;
use crate::config::ApiConfig;
use crate::models::CatalogState;
use crate::pages::{CategoryGrid, NotFound, ProductList};
use crate::routes::Route;

pub type BrowserCatalog = CatalogAdmin<FetchTransport, AlertNotifier>;

/// Shared handle to the controller, handed down through context.
#[derive(Clone)]
pub struct CatalogContext(Rc<BrowserCatalog>);

impl PartialEq for CatalogContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for CatalogContext {
    type Target = BrowserCatalog;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl CatalogContext {
    /// Runs an async controller action on the UI thread.
    pub fn spawn<F, Fut>(&self, action: F)
    where
        F: FnOnce(Rc<BrowserCatalog>) -> Fut,
        Fut: std::future::Future<Output = ()> + 'static,
    {
        wasm_bindgen_futures::spawn_local(action(self.0.clone()));
    }
}

#[hook]
pub fn use_catalog() -> CatalogContext {
    use_context::<CatalogContext>().expect("CatalogContext is provided by App")
}

#[function_component(App)]
pub fn app() -> Html {
    let (_, dispatch) = use_store::<CatalogState>();

    let catalog = use_memo((), move |_| {
        let config = ApiConfig::from_window();
        log::info!("Catalog API at {}", config.base_url);

        let catalog = CatalogAdmin::new(APICaller::new(config.base_url, FetchTransport), AlertNotifier);
        catalog.set_observer(move |state: &CatalogState| dispatch.set(state.clone()));
        CatalogContext(Rc::new(catalog))
    });

    {
        let catalog = (*catalog).clone();
        use_effect_with((), move |_| {
            catalog.spawn(|catalog| async move { catalog.initialize().await });
            || ()
        });
    }

    html! {
        <ContextProvider<CatalogContext> context={(*catalog).clone()}>
            <BrowserRouter>
                <Layout>
                    <Switch<Route> render={switch} />
                </Layout>
            </BrowserRouter>
        </ContextProvider<CatalogContext>>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Root | Route::Home => html! { <Redirect<Route> to={Route::Products} /> },
        Route::Products => html! { <ProductList /> },
        Route::Categories => html! { <CategoryGrid /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
