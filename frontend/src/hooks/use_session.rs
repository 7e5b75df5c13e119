use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::services::api::ApiClient;
use crate::services::dialogs::{BrowserDialogs, Notifier};
use crate::services::storage::LocalTokenStore;
use crate::state::in_flight::{ActionKey, InFlight};
use crate::state::session::{self, Session};

pub struct UseSessionResult {
    pub session: Session,
    pub logging_in: bool,
    pub actions: UseSessionActions,
}

#[derive(Clone, PartialEq)]
pub struct UseSessionActions {
    /// (username, password)
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
}

/// Session state for the whole app. Restored from storage on first render.
#[hook]
pub fn use_session(api_client: &ApiClient, store: &LocalTokenStore) -> UseSessionResult {
    let session = {
        let store = store.clone();
        use_state(move || Session::restore(&store))
    };
    let in_flight = use_state(InFlight::default);
    let logging_in = use_state(|| false);

    let login = {
        let api_client = api_client.clone();
        let store = store.clone();
        let session = session.clone();
        let in_flight = (*in_flight).clone();
        let logging_in = logging_in.clone();

        use_callback((), move |(username, password): (String, String), _| {
            let Some(ticket) = in_flight.try_begin(ActionKey::Login) else {
                return;
            };
            let api_client = api_client.clone();
            let store = store.clone();
            let session = session.clone();
            let logging_in = logging_in.clone();

            spawn_local(async move {
                let _ticket = ticket;
                logging_in.set(true);

                match session::login(&api_client, &store, &username, &password).await {
                    Ok(next) => session.set(next),
                    Err(e) => {
                        log::debug!(target: "session", "Login rejected: {:?}", e.cause());
                        BrowserDialogs.notify(&e.to_string());
                    }
                }

                logging_in.set(false);
            });
        })
    };

    let logout = {
        let store = store.clone();
        let session = session.clone();
        use_callback((), move |_: (), _| {
            session.set(Session::logout(&store));
        })
    };

    UseSessionResult {
        session: (*session).clone(),
        logging_in: *logging_in,
        actions: UseSessionActions { login, logout },
    }
}
