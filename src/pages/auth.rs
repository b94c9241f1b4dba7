//! Login and registration page.
//!
//! One form, two modes. Login success hands the mapped `(user, token)`
//! pair to the session store and navigates to the account area — auth
//! state is never set by any other path. Registration success does not
//! authenticate; it flips back to login mode with a notice.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guard::{self, RouteAction};
use crate::state::session::SessionStore;
use crate::util::storage::LocalStorage;

/// Which face of the form is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Login,
    Register,
}

/// Per-field validation messages; `None` means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub username: Option<&'static str>,
    pub login: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.username.is_none() && self.login.is_none() && self.password.is_none()
    }
}

/// Client-side form validation, checked before any request is sent.
///
/// Username only matters in register mode. These mirror the backend's
/// minimum lengths so the common mistakes fail without a round trip.
#[must_use]
pub fn validate(mode: FormMode, username: &str, login: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if mode == FormMode::Register {
        if username.trim().is_empty() {
            errors.username = Some("Username is required");
        } else if username.len() < 2 {
            errors.username = Some("Username must be at least 2 characters");
        }
    }

    if login.trim().is_empty() {
        errors.login = Some("Login is required");
    } else if login.len() < 3 {
        errors.login = Some("Login must be at least 3 characters");
    }

    if password.is_empty() {
        errors.password = Some("Password is required");
    } else if password.len() < 6 {
        errors.password = Some("Password must be at least 6 characters");
    }

    errors
}

/// Message box above the form.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Notice {
    Success(String),
    Error(String),
}

/// Login/registration form page.
///
/// Redirects to the account area if the session is already authenticated.
#[component]
pub fn AuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionStore<LocalStorage>>>();
    let navigate = use_navigate();

    // A logged-in session never sees the form; re-check on every render.
    Effect::new(move || {
        if let RouteAction::Redirect(to) = guard::decide(guard::LOGIN, session.get().is_authenticated()) {
            navigate(to, NavigateOptions::default());
        }
    });

    let mode = RwSignal::new(FormMode::Login);
    let username = RwSignal::new(String::new());
    let login_field = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::default());
    let notice = RwSignal::new(None::<Notice>);
    let loading = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let submit_navigate = use_navigate();

    let submit = Callback::new(move |()| {
        notice.set(None);
        let errors = validate(mode.get(), &username.get(), &login_field.get(), &password.get());
        if !errors.is_valid() {
            field_errors.set(errors);
            return;
        }
        field_errors.set(FieldErrors::default());
        loading.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = submit_navigate.clone();
            leptos::task::spawn_local(async move {
                match mode.get_untracked() {
                    FormMode::Login => {
                        let req = crate::net::types::LoginRequest {
                            login: login_field.get_untracked(),
                            password: password.get_untracked(),
                        };
                        let outcome = crate::net::api::login(&req)
                            .await
                            .and_then(crate::net::types::LoginResponse::into_authenticated);
                        match outcome {
                            Ok((user, token)) => {
                                use crate::state::session::AuthError;
                                let logged_in = session
                                    .try_update(|s| s.login(user, token))
                                    .unwrap_or(Err(AuthError::InvalidCredentialsShape));
                                match logged_in {
                                    Ok(()) => navigate(guard::ACCOUNT, NavigateOptions::default()),
                                    Err(err) => {
                                        log::error!("login transition rejected: {err}");
                                        notice.set(Some(Notice::Error(
                                            "Authentication failed. Check your credentials and try again."
                                                .to_owned(),
                                        )));
                                    }
                                }
                            }
                            Err(err) => {
                                log::warn!("login failed: {err}");
                                notice.set(Some(Notice::Error(err.user_message())));
                            }
                        }
                    }
                    FormMode::Register => {
                        let req = crate::net::types::RegisterRequest {
                            username: username.get_untracked(),
                            login: login_field.get_untracked(),
                            password: password.get_untracked(),
                        };
                        match crate::net::api::register(&req).await {
                            Ok(()) => {
                                mode.set(FormMode::Login);
                                username.set(String::new());
                                notice.set(Some(Notice::Success(
                                    "Registration successful! You can now sign in.".to_owned(),
                                )));
                            }
                            Err(err) => {
                                log::warn!("registration failed: {err}");
                                notice.set(Some(Notice::Error(err.user_message())));
                            }
                        }
                    }
                }
                loading.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            loading.set(false);
        }
    });

    let toggle = move |_| {
        mode.update(|m| {
            *m = match *m {
                FormMode::Login => FormMode::Register,
                FormMode::Register => FormMode::Login,
            };
        });
        username.set(String::new());
        login_field.set(String::new());
        password.set(String::new());
        field_errors.set(FieldErrors::default());
        notice.set(None);
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__box">
                <h2>{move || if mode.get() == FormMode::Login { "Sign In" } else { "Register" }}</h2>

                {move || {
                    notice
                        .get()
                        .map(|n| match n {
                            Notice::Success(text) => {
                                view! { <div class="message-box message-box--success">{text}</div> }
                                    .into_any()
                            }
                            Notice::Error(text) => {
                                view! { <div class="message-box message-box--error">{text}</div> }
                                    .into_any()
                            }
                        })
                }}

                <form on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }>
                    <Show when=move || mode.get() == FormMode::Register>
                        <label class="form-group">
                            "Username"
                            <input
                                type="text"
                                prop:value=move || username.get()
                                on:input=move |ev| {
                                    username.set(event_target_value(&ev));
                                    field_errors.update(|e| e.username = None);
                                }
                                prop:disabled=move || loading.get()
                            />
                            {move || {
                                field_errors
                                    .get()
                                    .username
                                    .map(|msg| view! { <span class="error-text">{msg}</span> })
                            }}
                        </label>
                    </Show>

                    <label class="form-group">
                        "Login"
                        <input
                            type="text"
                            prop:value=move || login_field.get()
                            on:input=move |ev| {
                                login_field.set(event_target_value(&ev));
                                field_errors.update(|e| e.login = None);
                            }
                            prop:disabled=move || loading.get()
                        />
                        {move || {
                            field_errors
                                .get()
                                .login
                                .map(|msg| view! { <span class="error-text">{msg}</span> })
                        }}
                    </label>

                    <label class="form-group">
                        "Password"
                        <input
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                field_errors.update(|e| e.password = None);
                            }
                            prop:disabled=move || loading.get()
                        />
                        {move || {
                            field_errors
                                .get()
                                .password
                                .map(|msg| view! { <span class="error-text">{msg}</span> })
                        }}
                    </label>

                    <button type="submit" class="btn btn--primary" prop:disabled=move || loading.get()>
                        {move || {
                            if loading.get() {
                                "Loading..."
                            } else if mode.get() == FormMode::Login {
                                "Sign In"
                            } else {
                                "Register"
                            }
                        }}
                    </button>
                </form>

                <p class="auth-page__toggle">
                    {move || {
                        if mode.get() == FormMode::Login { "No account? " } else { "Already registered? " }
                    }}
                    <button class="btn btn--link" on:click=toggle prop:disabled=move || loading.get()>
                        {move || if mode.get() == FormMode::Login { "Register" } else { "Sign In" }}
                    </button>
                </p>
            </div>
        </div>
    }
}
