use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub username: AttrValue,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_logout_click = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <header class="header">
            <div class="container">
                <h1>{"Payments"}</h1>
                <div class="header-right">
                    <span id="currentUser" class="current-user">{props.username.to_string()}</span>
                    <button type="button" class="btn btn-outline-secondary" onclick={on_logout_click}>
                        {"Logout"}
                    </button>
                </div>
            </div>
        </header>
    }
}
