use yew::prelude::*;
use web_sys::HtmlInputElement;

#[derive(Properties, PartialEq)]
pub struct StudentLookupProps {
    pub value: AttrValue,
    pub loading: bool,
    pub on_change: Callback<String>,
    pub on_search: Callback<()>,
}

#[function_component(StudentLookup)]
pub fn student_lookup(props: &StudentLookupProps) -> Html {
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    let on_submit = {
        let on_search = props.on_search.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_search.emit(());
        })
    };

    html! {
        <form class="student-lookup" onsubmit={on_submit}>
            <label for="studentIdInput">{"Student ID"}</label>
            <input
                id="studentIdInput"
                type="text"
                placeholder="Enter student ID"
                value={props.value.clone()}
                oninput={on_input}
            />
            <button type="submit" class="btn btn-primary" disabled={props.loading}>
                {if props.loading { "Loading..." } else { "Load Payments" }}
            </button>
        </form>
    }
}
