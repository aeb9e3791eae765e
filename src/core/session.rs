use tokio::sync::{watch, RwLock};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignOutReason {
    /// The backend answered 401 to one of our requests
    SessionExpired,
    /// The user signed out explicitly
    UserRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Anonymous,
    SignedOut(SignOutReason),
}

/// Holds the bearer token shared by every backend call.
///
/// A 401 anywhere clears the token and publishes `SignedOut` to all
/// subscribers; nothing in the tree editor handles it locally.
pub struct Session {
    token: RwLock<Option<String>>,
    state: watch::Sender<SessionState>,
}

impl Session {
    pub fn new(token: Option<String>) -> Self {
        let initial = if token.is_some() {
            SessionState::Active
        } else {
            SessionState::Anonymous
        };
        let (state, _) = watch::channel(initial);

        Self {
            token: RwLock::new(token),
            state,
        }
    }

    pub fn anonymous() -> Self {
        Self::new(None)
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub async fn sign_in(&self, token: String) {
        *self.token.write().await = Some(token);
        self.state.send_replace(SessionState::Active);
    }

    pub async fn sign_out(&self, reason: SignOutReason) {
        let had_token = self.token.write().await.take().is_some();
        if had_token || reason == SignOutReason::UserRequested {
            tracing::info!("Session signed out: {:?}", reason);
        }
        self.state.send_replace(SessionState::SignedOut(reason));
    }

    /// Forced sign-out after the backend rejected our credentials
    pub async fn expire(&self) {
        tracing::warn!("Token invalid or expired (401), signing out");
        self.sign_out(SignOutReason::SessionExpired).await;
    }

    pub fn state(&self) -> SessionState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }
}
