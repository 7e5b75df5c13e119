use shared::PaymentId;
use yew::prelude::*;

use crate::state::in_flight::{ActionKey, InFlight};
use crate::state::payment_table::{PaymentRow, PaymentTable, EMPTY_NOTICE};

#[derive(Properties, PartialEq)]
pub struct PaymentTableViewProps {
    pub table: PaymentTable,
    pub in_flight: InFlight,
    /// (payment id, current amount)
    pub on_edit: Callback<(PaymentId, f64)>,
    pub on_delete: Callback<PaymentId>,
    pub on_pay: Callback<()>,
}

#[function_component(PaymentTableView)]
pub fn payment_table_view(props: &PaymentTableViewProps) -> Html {
    let on_pay_click = {
        let on_pay = props.on_pay.clone();
        Callback::from(move |_: MouseEvent| on_pay.emit(()))
    };

    html! {
        <section id="paymentHistorySection" class="payment-history-section">
            <h2>{"Payment History"}</h2>
            {if let Some(caption) = props.table.caption() {
                html! { <p class="payment-history-caption">{caption.to_string()}</p> }
            } else {
                html! {}
            }}

            {if props.table.shows_pay_action() {
                html! {
                    <button id="payButton" type="button" class="btn btn-success" onclick={on_pay_click}>
                        {"Pay"}
                    </button>
                }
            } else {
                html! {}
            }}

            <div class="table-container">
                <table class="payments-table">
                    <thead>
                        <tr>
                            <th>{"ID"}</th>
                            <th>{"Amount"}</th>
                            <th>{"Date"}</th>
                            <th>{"Category"}</th>
                            <th>{"Status"}</th>
                            <th>{"Actions"}</th>
                        </tr>
                    </thead>
                    <tbody id="paymentsTableBody">
                        {if props.table.rows().is_empty() {
                            html! {
                                <tr>
                                    <td colspan="6" class="text-center">{EMPTY_NOTICE}</td>
                                </tr>
                            }
                        } else {
                            html! {
                                {for props.table.rows().iter().map(|row| html! {
                                    <PaymentRowView
                                        key={row.id.to_string()}
                                        row={row.clone()}
                                        deleting={props.in_flight.is_pending(ActionKey::Delete(row.id))}
                                        on_edit={props.on_edit.clone()}
                                        on_delete={props.on_delete.clone()}
                                    />
                                })}
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct PaymentRowViewProps {
    row: PaymentRow,
    deleting: bool,
    on_edit: Callback<(PaymentId, f64)>,
    on_delete: Callback<PaymentId>,
}

#[function_component(PaymentRowView)]
fn payment_row_view(props: &PaymentRowViewProps) -> Html {
    let row = &props.row;

    let on_edit_click = {
        let on_edit = props.on_edit.clone();
        let target = (row.id, row.amount);
        Callback::from(move |_: MouseEvent| on_edit.emit(target))
    };

    let on_delete_click = {
        let on_delete = props.on_delete.clone();
        let id = row.id;
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    html! {
        <tr title={row.details.clone()}>
            <td>{row.id.to_string()}</td>
            <td>{row.amount_label.clone()}</td>
            <td>{row.created_on.clone()}</td>
            <td>{row.category.clone()}</td>
            <td>{row.status.clone()}</td>
            <td>
                <button type="button" class="btn btn-sm btn-warning" onclick={on_edit_click}>
                    {"Edit"}
                </button>
                <button
                    type="button"
                    class="btn btn-sm btn-danger"
                    onclick={on_delete_click}
                    disabled={props.deleting}
                >
                    {"Delete"}
                </button>
            </td>
        </tr>
    }
}
