//! Session Store
//!
//! Holds the current credential and authenticated identity, persists them
//! across reloads, and exposes them reactively. Constructed once at the
//! app root and handed down via context; only this store ever writes the
//! credential.

use leptos::{create_rw_signal, RwSignal, Signal, SignalGet, SignalGetUntracked, SignalSet};

use crate::api::client::{RegisterPayload, RegisterResponse};
use crate::api::{ApiClient, ApiError};
use crate::model::Role;

const TOKEN_KEY: &str = "officecrm_token";
const IDENTITY_KEY: &str = "officecrm_user";

/// The authenticated session. Exactly one is active at a time; absence
/// means unauthenticated.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub role: Role,
}

/// Identity snapshot persisted next to the token, so the session can be
/// rehydrated without a server round-trip.
#[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
struct IdentitySnapshot {
    user_id: i64,
    role: Role,
}

#[derive(Clone, Copy)]
pub struct SessionStore {
    pub session: RwSignal<Option<Session>>,
    /// True until the startup rehydration attempt has finished; the entry
    /// router shows a neutral placeholder while this holds.
    pub restoring: RwSignal<bool>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            session: create_rw_signal(None),
            restoring: create_rw_signal(true),
        }
    }

    /// Credential read (never written) by every outbound API call.
    pub fn token(&self) -> Signal<Option<String>> {
        let session = self.session;
        Signal::derive(move || session.get().map(|s| s.token))
    }

    /// Reactive role of the current session.
    pub fn role(&self) -> Option<Role> {
        self.session.get().map(|s| s.role)
    }

    /// Attempt to rehydrate a previously persisted session. Runs once at
    /// startup, before the entry router's first real routing decision.
    pub fn restore(&self) {
        if !self.restoring.get_untracked() {
            return;
        }

        let restored = read_item(TOKEN_KEY).zip(read_item(IDENTITY_KEY)).and_then(
            |(token, snapshot)| {
                let snapshot: IdentitySnapshot = serde_json::from_str(&snapshot).ok()?;
                Some(Session {
                    token,
                    user_id: snapshot.user_id,
                    role: snapshot.role,
                })
            },
        );

        if let Some(session) = restored {
            self.session.set(Some(session));
        }
        self.restoring.set(false);
    }

    /// Exchange credentials for a session and make it current.
    pub async fn login(
        self,
        api: ApiClient,
        username: String,
        password: String,
    ) -> Result<(), ApiError> {
        let response = api.login(&username, &password).await?;
        self.install(Session {
            token: response.access_token,
            user_id: response.user_id,
            role: response.user_role,
        });
        Ok(())
    }

    /// Create an account; a successful registration carries an implicit
    /// session.
    pub async fn register(self, api: ApiClient, profile: RegisterPayload) -> Result<(), ApiError> {
        let RegisterResponse { access_token, user } = api.register(profile).await?;
        self.install(Session {
            token: access_token,
            user_id: user.id,
            role: user.role,
        });
        Ok(())
    }

    /// Clear the persisted credential and identity. Succeeds locally,
    /// synchronously and unconditionally; no server round-trip.
    pub fn logout(&self) {
        remove_item(TOKEN_KEY);
        remove_item(IDENTITY_KEY);
        self.session.set(None);
    }

    fn install(&self, session: Session) {
        write_item(TOKEN_KEY, &session.token);
        let snapshot = IdentitySnapshot {
            user_id: session.user_id,
            role: session.role,
        };
        if let Ok(encoded) = serde_json::to_string(&snapshot) {
            write_item(IDENTITY_KEY, &encoded);
        }
        self.session.set(Some(session));
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

fn read_item(key: &str) -> Option<String> {
    storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

fn write_item(key: &str, value: &str) {
    if let Some(storage) = storage() {
        let _ = storage.set_item(key, value);
    }
}

fn remove_item(key: &str) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_snapshot_round_trip() {
        let snapshot = IdentitySnapshot {
            user_id: 42,
            role: Role::Tenant,
        };
        let encoded = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(encoded, r#"{"user_id":42,"role":"tenant"}"#);

        let decoded: IdentitySnapshot = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_corrupt_snapshot_does_not_restore() {
        let snapshot: Result<IdentitySnapshot, _> = serde_json::from_str("{\"user_id\":1}");
        assert!(snapshot.is_err());
    }
}
