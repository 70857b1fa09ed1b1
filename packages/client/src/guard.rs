//! Session guard: the side effects of an invalidated session.
//!
//! The transport only classifies responses. Every error it produces passes
//! through [`SessionGuard::observe`] before reaching the caller, which is
//! where stored credentials are dropped and the [`Navigator`] is told to
//! show a login page.
//!
//! | Error | Cleared | Redirect |
//! |-------|---------|----------|
//! | `SessionExpired` | token, user | login page for the client's context |
//! | `AdminSessionExpired` | token, user, admin marker | admin login |
//! | anything else | nothing | none |

use std::sync::Arc;

use paintshop::{ApiError, Context, LoginView, Session};
use tracing::warn;

use crate::navigator::Navigator;

#[derive(Clone)]
pub struct SessionGuard {
    session: Arc<Session>,
    navigator: Arc<dyn Navigator>,
    context: Context,
}

impl SessionGuard {
    pub fn new(session: Arc<Session>, navigator: Arc<dyn Navigator>, context: Context) -> Self {
        Self {
            session,
            navigator,
            context,
        }
    }

    pub fn context(&self) -> Context {
        self.context
    }

    /// React to a failed call. Errors that do not end the session are ignored.
    pub fn observe(&self, error: &ApiError) {
        match error {
            ApiError::SessionExpired { .. } => {
                warn!(context = %self.context, "backend rejected the session token");
                if let Err(e) = self.session.clear() {
                    warn!("failed to clear session: {e}");
                }
                self.navigator.redirect(self.context.login_view());
            }
            ApiError::AdminSessionExpired { .. } => {
                warn!("backend refused admin access; dropping admin session");
                if let Err(e) = self.session.clear_admin() {
                    warn!("failed to clear admin session: {e}");
                }
                self.navigator.redirect(LoginView::Admin);
            }
            _ => {}
        }
    }
}

impl std::fmt::Debug for SessionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionGuard")
            .field("context", &self.context)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
