//! Protected account page.
//!
//! This is the enforcement point for the protected area: render only when
//! authenticated, otherwise redirect to the login form. Logout goes through
//! the session store and then navigates explicitly — no page reload.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guard::{self, RouteAction};
use crate::state::session::{Role, SessionStore};
use crate::util::storage::LocalStorage;

/// Account page — greets the signed-in user and offers logout.
#[component]
pub fn AccountPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore<LocalStorage>>>();
    let navigate = use_navigate();

    // Re-evaluated on every navigation, including right after logout.
    Effect::new(move || {
        if let RouteAction::Redirect(to) = guard::decide(guard::ACCOUNT, session.get().is_authenticated()) {
            navigate(to, NavigateOptions::default());
        }
    });

    let logout_navigate = use_navigate();
    let on_logout = Callback::new(move |()| {
        session.update(SessionStore::logout);
        logout_navigate(guard::LOGIN, NavigateOptions::default());
    });

    view! {
        <div class="account-page">
            <Show when=move || session.get().is_authenticated()>
                <h1>"Welcome!"</h1>
                <p>
                    {move || {
                        session
                            .get()
                            .current_user()
                            .map(|user| {
                                let role = match user.role {
                                    Role::Admin => "administrator",
                                    Role::User => "user",
                                };
                                format!("Signed in as {} ({role})", user.display_name)
                            })
                            .unwrap_or_default()
                    }}
                </p>
                <button class="btn" on:click=move |_| on_logout.run(())>
                    "Sign Out"
                </button>
            </Show>
        </div>
    }
}
