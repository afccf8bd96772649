use crate::dashboards::sales::ui::dashboard::SalesDashboard;
use crate::system::auth::context::use_session;
use crate::system::pages::login::LoginPage;
use leptos::prelude::*;

/// Dashboard for a signed-in session, login view otherwise. Clearing the
/// session (logout, `/login` redirect) lands here.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let (session, _) = use_session();

    view! {
        <Show
            when=move || session.get().id_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <SalesDashboard />
        </Show>
    }
}
