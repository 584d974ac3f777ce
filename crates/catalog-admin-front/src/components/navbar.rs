use crate::models::{CatalogState, Section};
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::*;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let (state, _) = use_store::<CatalogState>();

    let nav_link = |section: Section, label: &'static str| {
        let active = state.section == section;
        html! {
            <Link<Route>
                to={Route::from(section)}
                classes={classes!("px-4", "py-2", "rounded", "hover:bg-teal-700", active.then_some("bg-teal-700"))}
            >
                {label}
            </Link<Route>>
        }
    };

    html! {
        <nav class="bg-teal-600 text-white shadow">
            <div class="container mx-auto px-4 py-4 flex items-center justify-between">
                <Link<Route> to={Route::Home}>
                    <h1 class="text-xl font-bold">{"Catalog Admin"}</h1>
                </Link<Route>>
                <div class="flex space-x-2">
                    {nav_link(Section::Products, "Products")}
                    {nav_link(Section::Categories, "Categories")}
                </div>
            </div>
        </nav>
    }
}
