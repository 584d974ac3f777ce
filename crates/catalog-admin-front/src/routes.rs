use yew_router::Routable;

use crate::models::Section;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/admin")]
    Home,

    #[at("/admin/products")]
    Products,
    #[at("/admin/categories")]
    Categories,

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<Section> for Route {
    fn from(section: Section) -> Self {
        match section {
            Section::Products => Route::Products,
            Section::Categories => Route::Categories,
        }
    }
}
