use crate::components::{DeleteConfirmation, Navbar};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-gray-100">
            <Navbar />
            <main class="container mx-auto px-4 py-8">
                {for props.children.iter()}
            </main>
            <DeleteConfirmation />
        </div>
    }
}
