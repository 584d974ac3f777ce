use yew::prelude::*;

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex flex-col items-center py-12 text-gray-500">
            <div class="animate-spin h-8 w-8 border-4 border-teal-600 border-t-transparent rounded-full mb-3"></div>
            <p>{"Loading..."}</p>
        </div>
    }
}
