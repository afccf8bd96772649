use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::storage;
use crate::backend::backend;

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub id_token: Option<String>,
    pub user: Option<UserInfo>,
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let (session, set_session) = signal(SessionState::default());

    // Try to restore the session from localStorage on mount, validating the
    // stored token against the auth service.
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(id_token) = storage::get_id_token() else {
                return;
            };
            // Show the cached identity right away, then validate the token.
            if let Some(user) = storage::get_user() {
                set_session.set(SessionState {
                    id_token: Some(id_token.clone()),
                    user: Some(user),
                });
            }
            match backend().auth.lookup(&id_token).await {
                Ok(user) => {
                    storage::save_user(&user);
                    set_session.set(SessionState {
                        id_token: Some(id_token),
                        user: Some(user),
                    });
                }
                Err(err) => {
                    log::warn!("stored session is no longer valid: {}", err);
                    storage::clear_session();
                    set_session.set(SessionState::default());
                }
            }
        });
    });

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access the session state
pub fn use_session() -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
    let session = use_context::<ReadSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");
    let set_session = use_context::<WriteSignal<SessionState>>()
        .expect("SessionProvider not found in component tree");

    (session, set_session)
}

/// Helper: sign in and persist the session
pub async fn do_login(
    set_session: WriteSignal<SessionState>,
    email: String,
    password: String,
) -> Result<(), String> {
    let response = backend().auth.sign_in(email, password).await?;

    storage::save_id_token(&response.id_token);
    storage::save_user(&response.user);

    set_session.set(SessionState {
        id_token: Some(response.id_token),
        user: Some(response.user),
    });

    Ok(())
}

/// Helper: sign out and clear the session.
///
/// A failed sign-out is returned as an error and leaves the stored session
/// untouched; the caller logs it and the dashboard stays up.
pub async fn do_logout(
    session: ReadSignal<SessionState>,
    set_session: WriteSignal<SessionState>,
) -> Result<(), String> {
    let outcome = match session.get_untracked().id_token {
        Some(id_token) => backend().auth.sign_out(&id_token).await,
        None => Ok(()),
    };

    if let Some(next) = session_after_sign_out(&outcome) {
        storage::clear_session();
        set_session.set(next);

        // The only routing side effect in the application.
        if let Some(window) = web_sys::window() {
            if let Ok(history) = window.history() {
                let _ = history.push_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some("/login"),
                );
            }
        }
    }

    outcome
}

/// Session state to install after a sign-out attempt, or `None` when the
/// attempt failed and the current session (and view) must stay in place.
fn session_after_sign_out(outcome: &Result<(), String>) -> Option<SessionState> {
    outcome.is_ok().then(SessionState::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_sign_out_keeps_the_session_in_place() {
        let outcome = Err("Sign-out failed: 503".to_string());
        assert!(session_after_sign_out(&outcome).is_none());
    }

    #[test]
    fn successful_sign_out_resets_the_session() {
        let next = session_after_sign_out(&Ok(())).unwrap();
        assert!(next.id_token.is_none());
        assert!(next.user.is_none());
    }
}
