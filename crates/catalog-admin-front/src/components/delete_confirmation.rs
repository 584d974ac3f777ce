use yew::prelude::*;
use yewdux::prelude::*;

use crate::app::use_catalog;
use crate::components::ConfirmDialog;
use crate::models::CatalogState;

/// Confirmation for whichever delete is pending in the catalog state.
#[function_component(DeleteConfirmation)]
pub fn delete_confirmation() -> Html {
    let catalog = use_catalog();
    let (state, _) = use_store::<CatalogState>();

    let Some(pending) = state.pending_delete.clone() else {
        return html! {};
    };

    let on_confirm = {
        let catalog = catalog.clone();
        Callback::from(move |_| {
            catalog.spawn(|catalog| async move { catalog.confirm_delete().await });
        })
    };

    let on_cancel = Callback::from(move |_| catalog.cancel_delete());

    html! {
        <ConfirmDialog
            title={pending.title()}
            message={pending.message()}
            on_confirm={on_confirm}
            on_cancel={on_cancel}
            show={true}
        />
    }
}
