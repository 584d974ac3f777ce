use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="text-center py-16">
            <h2 class="text-2xl font-bold text-gray-800 mb-4">{ "404 - Page Not Found" }</h2>
            <Link<Route> to={Route::Products} classes="text-teal-600 hover:text-teal-900">
                { "Back to products" }
            </Link<Route>>
        </div>
    }
}
