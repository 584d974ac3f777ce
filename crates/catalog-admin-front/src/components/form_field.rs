use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub label: String,
    pub children: Children,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    html! {
        <div class="mb-4">
            <label class="block text-sm font-medium text-gray-700 mb-1">{&props.label}</label>
            {for props.children.iter()}
        </div>
    }
}
