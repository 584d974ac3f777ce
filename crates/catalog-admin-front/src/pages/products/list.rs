use common::Product;
use yew::prelude::*;
use yewdux::prelude::*;

use crate::app::use_catalog;
use crate::components::Loading;
use crate::models::{CatalogState, EntityKind, Section};
use crate::pages::products::ProductFormModal;
use crate::utils::format::{description_preview, format_price, product_image};

#[function_component(ProductList)]
pub fn product_list() -> Html {
    let catalog = use_catalog();
    let (state, _) = use_store::<CatalogState>();

    {
        let catalog = catalog.clone();
        use_effect_with((), move |_| {
            catalog.spawn(|catalog| async move { catalog.show_section(Section::Products).await });
            || ()
        });
    }

    let on_add = {
        let catalog = catalog.clone();
        Callback::from(move |_: MouseEvent| catalog.open_product_form(None))
    };

    html! {
        <section id="products-section">
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-bold text-gray-800">{ "Products" }</h2>
                <button class="bg-teal-600 hover:bg-teal-700 text-white px-4 py-2 rounded" onclick={on_add}>
                    { "Add Product" }
                </button>
            </div>

            if !state.products_loaded {
                <Loading />
            } else if state.products.is_empty() {
                <div class="bg-white rounded-lg shadow p-8 text-center text-gray-500">
                    <p>{ "No products yet. Add your first product to get started." }</p>
                </div>
            } else {
                <div class="bg-white rounded-lg shadow overflow-hidden">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{ "Product" }</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{ "Category" }</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{ "Price" }</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">{ "Actions" }</th>
                            </tr>
                        </thead>
                        <tbody id="products-table" class="bg-white divide-y divide-gray-200">
                            { for state.products.iter().map(|product| html! {
                                <ProductRow key={product.id.to_string()} product={product.clone()} />
                            }) }
                        </tbody>
                    </table>
                </div>
            }

            if let Some(form) = &state.product_form {
                <ProductFormModal form={form.clone()} categories={state.category_names()} />
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProductRowProps {
    product: Product,
}

#[function_component(ProductRow)]
fn product_row(props: &ProductRowProps) -> Html {
    let catalog = use_catalog();
    let product = &props.product;
    let id = product.id;

    let on_edit = {
        let catalog = catalog.clone();
        Callback::from(move |_: MouseEvent| {
            catalog.spawn(move |catalog| async move { catalog.edit_product(id).await });
        })
    };

    let on_delete = Callback::from(move |_: MouseEvent| {
        catalog.request_delete(EntityKind::Product, id);
    });

    html! {
        <tr>
            <td class="px-6 py-4 whitespace-nowrap">
                <div class="flex items-center">
                    <div class="flex-shrink-0 h-10 w-10">
                        <img class="h-10 w-10 rounded-full object-cover" src={product_image(product.image_url()).to_string()} alt="" />
                    </div>
                    <div class="ml-4">
                        <div class="text-sm font-medium text-gray-900">{ &product.name }</div>
                        <div class="text-sm text-gray-500">{ description_preview(product.description()) }</div>
                    </div>
                </div>
            </td>
            <td class="px-6 py-4 whitespace-nowrap">
                <span class="px-2 inline-flex text-xs leading-5 font-semibold rounded-full bg-teal-100 text-teal-800">
                    { &product.category }
                </span>
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                { format_price(product.price) }
            </td>
            <td class="px-6 py-4 whitespace-nowrap text-sm font-medium">
                <button class="text-teal-600 hover:text-teal-900 mr-4" onclick={on_edit}>{ "Edit" }</button>
                <button class="text-red-600 hover:text-red-900" onclick={on_delete}>{ "Delete" }</button>
            </td>
        </tr>
    }
}
