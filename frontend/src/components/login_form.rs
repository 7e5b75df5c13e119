use yew::prelude::*;
use web_sys::HtmlInputElement;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    /// (username, password)
    pub on_login: Callback<(String, String)>,
    pub busy: bool,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    let on_username_input = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_login.emit(((*username).clone(), (*password).clone()));
        })
    };

    html! {
        <section id="loginSection" class="login-section">
            <h2>{"Login"}</h2>
            <form class="login-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="username">{"Username"}</label>
                    <input
                        id="username"
                        type="text"
                        autocomplete="username"
                        value={(*username).clone()}
                        oninput={on_username_input}
                        disabled={props.busy}
                        autofocus=true
                    />
                </div>
                <div class="form-group">
                    <label for="password">{"Password"}</label>
                    <input
                        id="password"
                        type="password"
                        autocomplete="current-password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                        disabled={props.busy}
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled={props.busy}>
                    {if props.busy { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </section>
    }
}
