use common::request::CATEGORY_COLOR_PRESETS;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::app::use_catalog;
use crate::components::{FormField, Modal};
use crate::models::{CategoryField, CategoryForm};

#[derive(Properties, PartialEq)]
pub struct CategoryFormModalProps {
    pub form: CategoryForm,
}

#[function_component(CategoryFormModal)]
pub fn category_form_modal(props: &CategoryFormModalProps) -> Html {
    let catalog = use_catalog();
    let form = &props.form;

    let on_name = {
        let catalog = catalog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            catalog.update_category_form(CategoryField::Name, input.value());
        })
    };

    let on_description = {
        let catalog = catalog.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            catalog.update_category_form(CategoryField::Description, input.value());
        })
    };

    let on_color = {
        let catalog = catalog.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            catalog.update_category_form(CategoryField::Color, select.value());
        })
    };

    let on_close = {
        let catalog = catalog.clone();
        Callback::from(move |_| catalog.close_category_form())
    };

    let on_cancel = {
        let catalog = catalog.clone();
        Callback::from(move |_: MouseEvent| catalog.close_category_form())
    };

    let on_submit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        catalog.spawn(|catalog| async move { catalog.submit_category_form().await });
    });

    let mut colors: Vec<(String, String)> = CATEGORY_COLOR_PRESETS
        .iter()
        .map(|(label, class)| (label.to_string(), class.to_string()))
        .collect();
    if !colors.iter().any(|(_, class)| *class == form.color) {
        colors.push(("Custom".to_string(), form.color.clone()));
    }

    html! {
        <Modal title={form.title()} on_close={on_close}>
            <form id="category-form" onsubmit={on_submit}>
                <FormField label="Name *">
                    <input
                        type="text"
                        class="w-full border rounded px-3 py-2"
                        value={form.name.clone()}
                        oninput={on_name}
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
                <FormField label="Color">
                    <div class="flex items-center space-x-3">
                        <div class={classes!("w-8", "h-8", "rounded-full", "flex-shrink-0", form.color.clone())}></div>
                        <select class="w-full border rounded px-3 py-2" onchange={on_color}>
                            { for colors.iter().map(|(label, class)| html! {
                                <option key={class.clone()} value={class.clone()} selected={*class == form.color}>
                                    { label }
                                </option>
                            }) }
                        </select>
                    </div>
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
