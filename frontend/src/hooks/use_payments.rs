use shared::PaymentId;
use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::services::api::AuthorizedClient;
use crate::services::dialogs::BrowserDialogs;
use crate::state::dashboard::{DashboardAction, DashboardState};
use crate::state::flows::{self, PayFlow, PlaceholderPayFlow};
use crate::state::in_flight::{ActionKey, InFlight};

pub struct UsePaymentsResult {
    pub state: DashboardState,
    pub in_flight: InFlight,
    pub actions: UsePaymentsActions,
}

impl UsePaymentsResult {
    pub fn is_pending(&self, key: ActionKey) -> bool {
        self.in_flight.is_pending(key)
    }
}

#[derive(Clone, PartialEq)]
pub struct UsePaymentsActions {
    pub on_student_id_change: Callback<String>,
    pub load: Callback<()>,
    /// (payment id, current amount)
    pub open_edit: Callback<(PaymentId, f64)>,
    pub on_edit_amount_change: Callback<String>,
    pub submit_edit: Callback<()>,
    pub cancel_edit: Callback<()>,
    pub delete: Callback<PaymentId>,
    pub pay: Callback<()>,
}

/// Dashboard data and the user actions on it, all going through `gateway`
#[hook]
pub fn use_payments(gateway: &AuthorizedClient) -> UsePaymentsResult {
    let state = use_reducer(DashboardState::default);
    let in_flight = (*use_state(InFlight::default)).clone();
    let force_update = use_force_update();

    let on_student_id_change = {
        let state = state.clone();
        Callback::from(move |input: String| {
            state.dispatch(DashboardAction::StudentIdChanged(input));
        })
    };

    let load = {
        let state = state.clone();
        let gateway = gateway.clone();
        let in_flight = in_flight.clone();
        let force_update = force_update.clone();

        Callback::from(move |_: ()| {
            let Some(ticket) = in_flight.try_begin(ActionKey::LoadPayments) else {
                return;
            };
            force_update.force_update();
            let student_id = state.student_id_input.clone();
            let dispatcher = state.dispatcher();
            let gateway = gateway.clone();
            let force_update = force_update.clone();

            spawn_local(async move {
                let dispatch = move |action| dispatcher.dispatch(action);
                flows::load_payments(&gateway, &BrowserDialogs, &student_id, &dispatch).await;
                drop(ticket);
                force_update.force_update();
            });
        })
    };

    let open_edit = {
        let state = state.clone();
        Callback::from(move |(payment_id, amount): (PaymentId, f64)| {
            state.dispatch(DashboardAction::EditOpened { payment_id, amount });
        })
    };

    let on_edit_amount_change = {
        let state = state.clone();
        Callback::from(move |input: String| {
            state.dispatch(DashboardAction::EditAmountChanged(input));
        })
    };

    let submit_edit = {
        let state = state.clone();
        let gateway = gateway.clone();
        let in_flight = in_flight.clone();
        let force_update = force_update.clone();

        Callback::from(move |_: ()| {
            let Some(ticket) = in_flight.try_begin(ActionKey::SaveEdit) else {
                return;
            };
            force_update.force_update();
            let dialog = state.edit.clone();
            let student_id = state.current_student().map(str::to_string);
            let dispatcher = state.dispatcher();
            let gateway = gateway.clone();
            let force_update = force_update.clone();

            spawn_local(async move {
                let dispatch = move |action| dispatcher.dispatch(action);
                flows::submit_edit(
                    &gateway,
                    &BrowserDialogs,
                    &dialog,
                    student_id.as_deref(),
                    &dispatch,
                )
                .await;
                drop(ticket);
                force_update.force_update();
            });
        })
    };

    let cancel_edit = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            state.dispatch(DashboardAction::EditCancelled);
        })
    };

    let delete = {
        let state = state.clone();
        let gateway = gateway.clone();
        let in_flight = in_flight.clone();
        let force_update = force_update.clone();

        Callback::from(move |payment_id: PaymentId| {
            let Some(ticket) = in_flight.try_begin(ActionKey::Delete(payment_id)) else {
                return;
            };
            force_update.force_update();
            let student_id = state.current_student().map(str::to_string);
            let dispatcher = state.dispatcher();
            let gateway = gateway.clone();
            let force_update = force_update.clone();

            spawn_local(async move {
                let dispatch = move |action| dispatcher.dispatch(action);
                flows::delete_payment(
                    &gateway,
                    &BrowserDialogs,
                    &BrowserDialogs,
                    payment_id,
                    student_id.as_deref(),
                    &dispatch,
                )
                .await;
                drop(ticket);
                force_update.force_update();
            });
        })
    };

    let pay = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            PlaceholderPayFlow::new(BrowserDialogs).start(state.current_student());
        })
    };

    UsePaymentsResult {
        state: (*state).clone(),
        in_flight,
        actions: UsePaymentsActions {
            on_student_id_change,
            load,
            open_edit,
            on_edit_amount_change,
            submit_edit,
            cancel_edit,
            delete,
            pay,
        },
    }
}
