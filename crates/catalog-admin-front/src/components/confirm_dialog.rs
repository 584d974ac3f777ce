use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub title: String,
    pub message: String,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
    pub show: bool,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    if !props.show {
        return html! {};
    }

    let on_confirm = {
        let callback = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    let on_cancel = {
        let callback = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| callback.emit(()))
    };

    html! {
        <div class="fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50">
            <div class="bg-white rounded-lg shadow-xl p-6 w-full max-w-md" role="alertdialog">
                <h3 class="text-lg font-semibold text-gray-800 mb-2">{&props.title}</h3>
                <p class="text-gray-600 mb-6">{&props.message}</p>
                <div class="flex justify-end space-x-3">
                    <button class="px-4 py-2 rounded bg-gray-200 hover:bg-gray-300" onclick={on_cancel}>
                        {"Cancel"}
                    </button>
                    <button class="px-4 py-2 rounded bg-red-600 text-white hover:bg-red-700" onclick={on_confirm}>
                        {"Delete"}
                    </button>
                </div>
            </div>
        </div>
    }
}
