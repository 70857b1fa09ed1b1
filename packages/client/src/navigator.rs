//! Where an invalidated session sends the user.
//!
//! In the browser this was a full-page redirect. Here it is a trait, so the
//! host decides what "go to the login page" means: a log line in the CLI, a
//! recorded event in tests, a real navigation in a UI shell.

use std::sync::Mutex;

use paintshop::LoginView;

/// Receives redirect requests from the [`SessionGuard`](crate::SessionGuard).
pub trait Navigator: Send + Sync + 'static {
    fn redirect(&self, view: LoginView);
}

/// Ignores redirects.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect(&self, _view: LoginView) {}
}

/// Logs redirects at `warn` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn redirect(&self, view: LoginView) {
        tracing::warn!(page = %view, "session ended; sign in again");
    }
}

/// Remembers every redirect, oldest first.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    seen: Mutex<Vec<LoginView>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn redirects(&self) -> Vec<LoginView> {
        self.seen.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<LoginView> {
        self.redirects().last().copied()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, view: LoginView) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(view);
        }
    }
}
