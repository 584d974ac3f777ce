use common::Category;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::app::use_catalog;
use crate::components::Loading;
use crate::models::{CatalogState, EntityKind, Section};
use crate::pages::categories::CategoryFormModal;
use crate::utils::format::category_initial;

#[function_component(CategoryGrid)]
pub fn category_grid() -> Html {
    let catalog = use_catalog();
    let (state, _) = use_store::<CatalogState>();

    {
        let catalog = catalog.clone();
        use_effect_with((), move |_| {
            catalog.spawn(|catalog| async move { catalog.show_section(Section::Categories).await });
            || ()
        });
    }

    let on_add = {
        let catalog = catalog.clone();
        Callback::from(move |_: MouseEvent| catalog.open_category_form(None))
    };

    html! {
        <section id="categories-section">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold text-gray-800">{ "Categories" }</h2>
                <button class="bg-teal-600 hover:bg-teal-700 text-white px-4 py-2 rounded" onclick={on_add}>
                    { "Add Category" }
                </button>
            </div>

            if !state.categories_loaded {
                <Loading />
            } else if state.categories.is_empty() {
                <div class="bg-white rounded-lg shadow p-8 text-center text-gray-500">
                    <p>{ "No categories yet. Add one to start grouping products." }</p>
                </div>
            } else {
                <div id="categories-grid" class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for state.categories.iter().map(|category| html! {
                        <CategoryCard key={category.id.to_string()} category={category.clone()} />
                    }) }
                </div>
            }

            if let Some(form) = &state.category_form {
                <CategoryFormModal form={form.clone()} />
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct CategoryCardProps {
    category: Category,
}

#[function_component(CategoryCard)]
fn category_card(props: &CategoryCardProps) -> Html {
    let catalog = use_catalog();
    let category = &props.category;
    let id = category.id;

    let on_edit = {
        let catalog = catalog.clone();
        Callback::from(move |_: MouseEvent| catalog.edit_category(id))
    };

    let on_delete = Callback::from(move |_: MouseEvent| {
        catalog.request_delete(EntityKind::Category, id);
    });

    html! {
        <div class="bg-white rounded-lg shadow-md p-6">
            <div class="flex items-center justify-between mb-4">
                <div class={classes!("w-12", "h-12", "rounded-full", "flex", "items-center", "justify-center", category.color.clone())}>
                    <span class="text-white font-bold text-lg">{ category_initial(&category.name) }</span>
                </div>
                <div class="flex space-x-2">
                    <button class="text-teal-600 hover:text-teal-900" onclick={on_edit}>{ "Edit" }</button>
                    <button class="text-red-600 hover:text-red-900" onclick={on_delete}>{ "Delete" }</button>
                </div>
            </div>
            <h3 class="text-lg font-semibold text-gray-800 mb-2">{ &category.name }</h3>
            <p class="text-gray-600 text-sm">{ category.description.clone().unwrap_or_default() }</p>
        </div>
    }
}
