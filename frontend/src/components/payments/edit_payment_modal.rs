use yew::prelude::*;
use web_sys::HtmlInputElement;

use crate::state::edit_dialog::EditDialog;

#[derive(Properties, PartialEq)]
pub struct EditPaymentModalProps {
    pub dialog: EditDialog,
    pub saving: bool,
    pub on_amount_change: Callback<String>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(EditPaymentModal)]
pub fn edit_payment_modal(props: &EditPaymentModalProps) -> Html {
    let on_amount_input = {
        let on_amount_change = props.on_amount_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_amount_change.emit(input.value());
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        let saving = props.saving;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            // The dialog stays up until the pending save settles
            if !saving {
                on_cancel.emit(());
            }
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let Some(draft) = props.dialog.draft() else {
        return html! {};
    };

    html! {
        <div class="edit-payment-modal-backdrop" onclick={on_backdrop_click}>
            <div id="editPaymentModal" class="edit-payment-modal" onclick={on_modal_click}>
                <h3 class="edit-payment-title">{"Edit Payment"}</h3>
                <form class="edit-payment-form" onsubmit={on_submit}>
                    <input id="editPaymentId" type="hidden" value={draft.payment_id.to_string()} />
                    <div class="form-group">
                        <label for="editPaymentAmount">{"Amount"}</label>
                        <input
                            id="editPaymentAmount"
                            type="number"
                            step="0.01"
                            min="0.01"
                            value={draft.amount_input.clone()}
                            oninput={on_amount_input}
                            disabled={props.saving}
                            autofocus=true
                        />
                    </div>
                    <div class="edit-payment-buttons">
                        <button type="submit" class="btn btn-primary" disabled={props.saving}>
                            {if props.saving { "Saving..." } else { "Save" }}
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            onclick={on_cancel_click}
                            disabled={props.saving}
                        >
                            {"Cancel"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
