//! HTTP API Client
//!
//! Typed wrapper over the CRM REST API. One method per (resource, verb)
//! pair the screens exercise, plus credential exchange and the
//! overdue-payment sweep. Every call attaches the current credential as a
//! bearer authorization header; responses outside the success range are
//! normalized into [`ApiError`]. Calls are independent requests: no
//! coalescing, no retries, no de-duplication.

use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::{Signal, SignalGetUntracked};
use serde::de::DeserializeOwned;

use crate::api::error::{classify, ApiError};
use crate::model::{
    Booking, BookingPayload, Contract, MaintenanceRequest, Office, OfficePayload, Payment,
    PaymentPayload, RequestPayload, RequestStatusPatch, Role, Tenant,
};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item("officecrm_api_url").ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Wire Types ============

#[derive(Debug, Clone, serde::Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user_id: i64,
    pub user_role: Role,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RegisterResponse {
    pub access_token: String,
    pub user: RegisteredUser,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub role: Role,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct RegisterPayload {
    pub username: String,
    pub password: String,
    pub company_name: String,
    pub contact_person: String,
}

/// Summary message returned by the overdue-payment sweep.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SweepOutcome {
    pub detail: String,
}

/// Error body shape used by the server for every non-2xx response.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    detail: String,
}

// ============ Client ============

/// Handle to the remote service. Cheap to copy; reads the credential
/// signal at call time and never writes it.
#[derive(Clone, Copy)]
pub struct ApiClient {
    token: Signal<Option<String>>,
}

impl ApiClient {
    pub fn new(token: Signal<Option<String>>) -> Self {
        Self { token }
    }

    fn url(self, path: &str) -> String {
        format!("{}{}", get_api_base(), path)
    }

    /// Attach the bearer header when a credential is present.
    fn auth(self, builder: RequestBuilder) -> RequestBuilder {
        match self.token.get_untracked() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    // ---- Auth ----

    /// Exchange credentials for a session. The server takes this one
    /// form-encoded rather than as JSON.
    pub async fn login(self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = format!(
            "username={}&password={}",
            urlencoding::encode(username),
            urlencoding::encode(password)
        );

        let response = Request::post(&self.url("/login"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }

    pub async fn register(self, payload: RegisterPayload) -> Result<RegisterResponse, ApiError> {
        let response = Request::post(&self.url("/register"))
            .json(&payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }

    // ---- Offices ----

    pub async fn list_offices(self) -> Result<Vec<Office>, ApiError> {
        self.get_json("/offices/").await
    }

    pub async fn create_office(self, payload: OfficePayload) -> Result<Office, ApiError> {
        self.post_json("/offices/", &payload).await
    }

    pub async fn update_office(self, id: i64, payload: OfficePayload) -> Result<Office, ApiError> {
        self.put_json(&format!("/offices/{}", id), &payload).await
    }

    pub async fn delete_office(self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/offices/{}", id)).await
    }

    // ---- Bookings ----

    pub async fn list_bookings(self) -> Result<Vec<Booking>, ApiError> {
        self.get_json("/bookings/").await
    }

    pub async fn create_booking(self, payload: BookingPayload) -> Result<Booking, ApiError> {
        self.post_json("/bookings/", &payload).await
    }

    pub async fn delete_booking(self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/bookings/{}", id)).await
    }

    // ---- Contracts (list only; lifecycle is server-managed) ----

    pub async fn list_contracts(self) -> Result<Vec<Contract>, ApiError> {
        self.get_json("/contracts/").await
    }

    // ---- Payments ----

    pub async fn list_payments(self) -> Result<Vec<Payment>, ApiError> {
        self.get_json("/payments/").await
    }

    pub async fn create_payment(self, payload: PaymentPayload) -> Result<Payment, ApiError> {
        self.post_json("/payments/", &payload).await
    }

    /// Trigger the server-side overdue sweep. This is the only way a
    /// payment ever becomes overdue from this layer.
    pub async fn check_overdue(self) -> Result<SweepOutcome, ApiError> {
        let response = self
            .auth(Request::post(&self.url("/payments/check-overdue")))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }

    // ---- Requests ----

    pub async fn list_requests(self) -> Result<Vec<MaintenanceRequest>, ApiError> {
        self.get_json("/requests/").await
    }

    pub async fn create_request(
        self,
        payload: RequestPayload,
    ) -> Result<MaintenanceRequest, ApiError> {
        self.post_json("/requests/", &payload).await
    }

    /// Staff advance: PUTs only the new status.
    pub async fn update_request_status(
        self,
        id: i64,
        patch: RequestStatusPatch,
    ) -> Result<MaintenanceRequest, ApiError> {
        self.put_json(&format!("/requests/{}", id), &patch).await
    }

    pub async fn delete_request(self, id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/requests/{}", id)).await
    }

    // ---- Tenants (read-only) ----

    pub async fn list_tenants(self) -> Result<Vec<Tenant>, ApiError> {
        self.get_json("/tenants/").await
    }

    // ---- Shared request plumbing ----

    async fn get_json<T: DeserializeOwned>(self, path: &str) -> Result<T, ApiError> {
        let response = self
            .auth(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }

    async fn post_json<T: DeserializeOwned>(
        self,
        path: &str,
        payload: &impl serde::Serialize,
    ) -> Result<T, ApiError> {
        let response = self
            .auth(Request::post(&self.url(path)))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }

    async fn put_json<T: DeserializeOwned>(
        self,
        path: &str,
        payload: &impl serde::Serialize,
    ) -> Result<T, ApiError> {
        let response = self
            .auth(Request::put(&self.url(path)))
            .json(payload)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        decode(response).await
    }

    /// Success with no decodable body expected (delete and friends). A
    /// 204 or an ignored body both resolve to an empty result.
    async fn delete(self, path: &str) -> Result<(), ApiError> {
        let response = self
            .auth(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(fail(response).await);
        }
        Ok(())
    }
}

/// Check the response and decode the success body.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(fail(response).await);
    }
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Translate a non-2xx response, falling back to a generic message when
/// the body carries none.
async fn fail(response: Response) -> ApiError {
    let status = response.status();
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .map(|body| body.detail);
    classify(status, message)
}
