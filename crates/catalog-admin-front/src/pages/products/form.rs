use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app::use_catalog;
use crate::components::{FormField, Modal};
use crate::models::{ProductField, ProductForm};

#[derive(Properties, PartialEq)]
pub struct ProductFormModalProps {
    pub form: ProductForm,
    /// Names from the category cache, offered in the selector.
    pub categories: Vec<String>,
}

#[function_component(ProductFormModal)]
pub fn product_form_modal(props: &ProductFormModalProps) -> Html {
    let catalog = use_catalog();
    let form = &props.form;

    let on_input = |field: ProductField| {
        let catalog = catalog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            catalog.update_product_form(field, input.value());
        })
    };

    let on_description = {
        let catalog = catalog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            catalog.update_product_form(ProductField::Description, input.value());
        })
    };

    let on_category = {
        let catalog = catalog.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            catalog.update_product_form(ProductField::Category, select.value());
        })
    };

    let on_close = {
        let catalog = catalog.clone();
        Callback::from(move |_| catalog.close_product_form())
    };

    let on_cancel = {
        let catalog = catalog.clone();
        Callback::from(move |_: MouseEvent| catalog.close_product_form())
    };

    let on_submit = {
        let catalog = catalog.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            catalog.spawn(|catalog| async move { catalog.submit_product_form().await });
        })
    };

    // Keep an edited product's category selectable even if it is not cached.
    let mut options = props.categories.clone();
    if !form.category.is_empty() && !options.contains(&form.category) {
        options.push(form.category.clone());
    }

    html! {
        <Modal title={form.title()} on_close={on_close}>
            <form id="product-form" onsubmit={on_submit}>
                <FormField label="Name *">
                    <input
                        type="text"
                        class="w-full border rounded px-3 py-2"
                        value={form.name.clone()}
                        oninput={on_input(ProductField::Name)}
                        required={true}
                    />
                </FormField>
                <FormField label="Description">
                    <textarea
                        class="w-full border rounded px-3 py-2"
                        rows="3"
                        value={form.description.clone()}
                        oninput={on_description}
                    />
                </FormField>
                <FormField label="Price *">
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        class="w-full border rounded px-3 py-2"
                        value={form.price.clone()}
                        oninput={on_input(ProductField::Price)}
                        required={true}
                    />
                </FormField>
                <FormField label="Category">
                    <select class="w-full border rounded px-3 py-2" onchange={on_category}>
                        { for options.iter().map(|name| html! {
                            <option key={name.clone()} value={name.clone()} selected={*name == form.category}>
                                { name }
                            </option>
                        }) }
                    </select>
                </FormField>
                <FormField label="Image URL">
                    <input
                        type="url"
                        class="w-full border rounded px-3 py-2"
                        value={form.image_url.clone()}
                        oninput={on_input(ProductField::ImageUrl)}
                        placeholder="https://"
                    />
                </FormField>

                <div class="flex justify-end space-x-3 pt-2">
                    <button type="button" class="px-4 py-2 rounded bg-gray-200 hover:bg-gray-300" onclick={on_cancel}>
                        { "Cancel" }
                    </button>
                    <button type="submit" class="px-4 py-2 rounded bg-teal-600 text-white hover:bg-teal-700">
                        { "Save" }
                    </button>
                </div>
            </form>
        </Modal>
    }
}
