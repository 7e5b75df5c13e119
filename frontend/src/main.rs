use yew::prelude::*;

mod components;
mod hooks;
mod services;
mod state;
#[cfg(test)]
mod test_utils;

use components::{Dashboard, LoginForm};
use hooks::use_session;
use services::{ApiClient, ClientConfig, LocalTokenStore};
use services::logging::Logger;
use state::ViewState;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: ClientConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api_client = use_memo(props.config.clone(), ApiClient::from_config);
    let store = use_memo(props.config.token_storage_key.clone(), |key| {
        LocalTokenStore::new(key.clone())
    });
    let session = use_session(&api_client, &store);

    match (session.session.view(), api_client.authorized(&session.session)) {
        (ViewState::Dashboard, Some(gateway)) => html! {
            <Dashboard
                gateway={gateway}
                username={session.session.display_name().to_string()}
                on_logout={session.actions.logout.clone()}
            />
        },
        _ => html! {
            <LoginForm on_login={session.actions.login.clone()} busy={session.logging_in} />
        },
    }
}

fn main() {
    let config = ClientConfig::from_build_env();
    Logger::init(config.log_level);
    log::info!(target: "app", "Starting payments desk against {:?}", config.api_base_url);

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
