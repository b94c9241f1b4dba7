//! Route guard: maps a requested path plus session state to a decision.
//!
//! DESIGN
//! ======
//! A pure function of `(path, authenticated)` with no state of its own.
//! Pages re-run it in an effect on every navigation, including the
//! programmatic ones triggered after `login()`/`logout()`; nothing here
//! caches a decision.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

/// Root path; always redirects, never renders.
pub const ROOT: &str = "/";
/// Login/registration form.
pub const LOGIN: &str = "/login";
/// The protected account area.
pub const ACCOUNT: &str = "/user";

/// Outcome of a guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAction {
    /// Render the view registered at this path.
    Render,
    /// Navigate to the given path instead of rendering.
    Redirect(&'static str),
}

/// Decide what to do for `path` given the current authentication state.
///
/// Policy, in priority order:
/// 1. `/` redirects: to the account area when authenticated, else to login.
/// 2. `/login` renders the form, unless already authenticated (then the
///    account area — a logged-in session never sees the form again).
/// 3. `/user` renders when authenticated, else redirects to login. Any
///    future protected path gets the same rule.
/// 4. Anything else redirects to `/`, which resolves per rule 1 on the
///    next evaluation.
#[must_use]
pub fn decide(path: &str, authenticated: bool) -> RouteAction {
    match path {
        ROOT => {
            if authenticated {
                RouteAction::Redirect(ACCOUNT)
            } else {
                RouteAction::Redirect(LOGIN)
            }
        }
        LOGIN => {
            if authenticated {
                RouteAction::Redirect(ACCOUNT)
            } else {
                RouteAction::Render
            }
        }
        ACCOUNT => {
            if authenticated {
                RouteAction::Render
            } else {
                RouteAction::Redirect(LOGIN)
            }
        }
        _ => RouteAction::Redirect(ROOT),
    }
}
