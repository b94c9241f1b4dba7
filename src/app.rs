//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::guard::{self, RouteAction};
use crate::pages::{account::AccountPage, auth::AuthPage};
use crate::state::session::SessionStore;
use crate::util::storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the one session store for the process from persisted storage,
/// before any route renders, and provides it via context as the single
/// writer shared by the form and the guarded pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::initialize(LocalStorage));
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/tracker-ui.css"/>
        <Title text="Tracker"/>

        <Router>
            <Routes fallback=CatchAll>
                <Route path=StaticSegment("") view=RootRedirect/>
                <Route path=StaticSegment("login") view=AuthPage/>
                <Route path=StaticSegment("user") view=AccountPage/>
            </Routes>
        </Router>
    }
}

/// The root path never renders content; it forwards to the account area
/// or the login form depending on the session.
#[component]
fn RootRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore<LocalStorage>>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let RouteAction::Redirect(to) = guard::decide(guard::ROOT, session.get().is_authenticated()) {
            navigate(to, NavigateOptions::default());
        }
    });

    view! { <div class="redirect"></div> }
}

/// Unrecognized paths forward to the root, which resolves per its own rule.
#[component]
fn CatchAll() -> impl IntoView {
    let navigate = use_navigate();

    Effect::new(move || {
        navigate(guard::ROOT, NavigateOptions::default());
    });

    view! { <div class="redirect"></div> }
}
