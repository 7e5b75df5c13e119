use yew::prelude::*;

use super::header::Header;
use super::payments::{EditPaymentModal, PaymentTableView};
use super::student_lookup::StudentLookup;
use crate::hooks::use_payments::use_payments;
use crate::services::api::AuthorizedClient;
use crate::state::in_flight::ActionKey;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub gateway: AuthorizedClient,
    pub username: AttrValue,
    pub on_logout: Callback<()>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let payments = use_payments(&props.gateway);
    let state = &payments.state;
    let actions = &payments.actions;

    html! {
        <div id="dashboardSection" class="dashboard-section">
            <Header username={props.username.clone()} on_logout={props.on_logout.clone()} />

            <main class="main">
                <div class="container">
                    <StudentLookup
                        value={state.student_id_input.clone()}
                        loading={payments.is_pending(ActionKey::LoadPayments)}
                        on_change={actions.on_student_id_change.clone()}
                        on_search={actions.load.clone()}
                    />

                    {if let Some(table) = &state.table {
                        html! {
                            <PaymentTableView
                                table={table.clone()}
                                in_flight={payments.in_flight.clone()}
                                on_edit={actions.open_edit.clone()}
                                on_delete={actions.delete.clone()}
                                on_pay={actions.pay.clone()}
                            />
                        }
                    } else {
                        html! {}
                    }}
                </div>
            </main>

            <EditPaymentModal
                dialog={state.edit.clone()}
                saving={payments.is_pending(ActionKey::SaveEdit)}
                on_amount_change={actions.on_edit_amount_change.clone()}
                on_submit={actions.submit_edit.clone()}
                on_cancel={actions.cancel_edit.clone()}
            />
        </div>
    }
}
