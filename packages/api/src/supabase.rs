//! # SupabaseBackend: REST client for the hosted service
//!
//! Implements [`store::Backend`] over the three HTTP surfaces of the hosted
//! project:
//!
//! | Surface | Path | Used for |
//! |---------|------|----------|
//! | PostgREST | `/rest/v1/{table}` | cabins, bookings, settings rows |
//! | Storage | `/storage/v1/object/{bucket}/{name}` | cabin photo uploads |
//! | GoTrue | `/auth/v1/...` | sign in / up / out, current user |
//!
//! Every request carries the public `apikey` header. Once signed in, the
//! session's access token replaces the anon key as bearer token; it lives in
//! memory only.
//!
//! Row filters use PostgREST's query syntax (`id=eq.7`), and writes ask for
//! `Prefer: return=representation` so inserts and updates answer with the
//! stored row.

use std::sync::{Arc, Mutex};

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::config::BackendConfig;
use store::models::*;
use store::{Backend, StoreError, StoreResult};

const BOOKING_COLUMNS: &str = "*,cabins(name),guests(full_name,email,nationality,countryFlag)";

#[derive(Clone, Debug)]
pub struct SupabaseBackend {
    client: Client,
    config: BackendConfig,
    access_token: Arc<Mutex<Option<String>>>,
}

/// `user` object returned by the auth endpoints.
#[derive(Debug, Deserialize)]
struct AuthUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    #[serde(default)]
    full_name: Option<String>,
    #[serde(default)]
    avatar: Option<String>,
}

impl From<AuthUser> for UserInfo {
    fn from(user: AuthUser) -> Self {
        UserInfo {
            id: user.id,
            email: user.email.unwrap_or_default(),
            full_name: user.user_metadata.full_name.filter(|n| !n.is_empty()),
            avatar: user.user_metadata.avatar.filter(|a| !a.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AuthSession {
    access_token: String,
    user: AuthUser,
}

/// Sign-up answers with a session when email confirmation is off, and with
/// the bare user otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session { user: AuthUser },
    User(AuthUser),
}

impl SupabaseBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
            access_token: Arc::new(Mutex::new(None)),
        }
    }

    fn rest(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url, table)
    }

    fn auth(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.url, path)
    }

    fn token(&self) -> Option<String> {
        self.access_token.lock().unwrap().clone()
    }

    fn set_token(&self, token: Option<String>) {
        *self.access_token.lock().unwrap() = token;
    }

    /// Attach the api key and the session (or anon) bearer token.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self.token().unwrap_or_else(|| self.config.anon_key.clone());
        request
            .header("apikey", &self.config.anon_key)
            .bearer_auth(bearer)
    }

    fn returning(&self, request: RequestBuilder) -> RequestBuilder {
        self.authorize(request)
            .header("Prefer", "return=representation")
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> StoreResult<T> {
        let response = send_checked(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn send_empty(&self, request: RequestBuilder) -> StoreResult<()> {
        send_checked(request).await.map(|_| ())
    }

    async fn first_row<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        table: &'static str,
        id: i64,
    ) -> StoreResult<T> {
        let rows: Vec<T> = self.send(request).await?;
        rows.into_iter()
            .next()
            .ok_or(StoreError::NotFound { table, id })
    }
}

async fn send_checked(request: RequestBuilder) -> StoreResult<reqwest::Response> {
    let response = request
        .send()
        .await
        .map_err(|e| StoreError::Transport(e.to_string()))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => StoreError::Unauthorized,
        _ => StoreError::Rejected(error_message(&body).unwrap_or_else(|| status.to_string())),
    })
}

/// Pull the human-readable message out of a PostgREST, storage or GoTrue
/// error body.
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "msg", "error_description", "error"]
        .iter()
        .find_map(|key| value.get(*key)?.as_str().map(str::to_string))
}

fn eq(id: i64) -> String {
    format!("eq.{id}")
}

impl Backend for SupabaseBackend {
    fn storage_url(&self) -> String {
        self.config.url.clone()
    }

    async fn list_cabins(&self) -> StoreResult<Vec<Cabin>> {
        let request = self
            .client
            .get(self.rest("cabins"))
            .query(&[("select", "*"), ("order", "name.asc")]);
        self.send(self.authorize(request)).await
    }

    async fn insert_cabin(&self, row: CabinRow) -> StoreResult<Cabin> {
        let request = self.client.post(self.rest("cabins")).json(&[row]);
        self.first_row(self.returning(request), "cabins", 0).await
    }

    async fn update_cabin(&self, id: CabinId, row: CabinRow) -> StoreResult<Cabin> {
        let request = self
            .client
            .patch(self.rest("cabins"))
            .query(&[("id", eq(id))])
            .json(&row);
        self.first_row(self.returning(request), "cabins", id).await
    }

    async fn delete_cabin(&self, id: CabinId) -> StoreResult<()> {
        let request = self
            .client
            .delete(self.rest("cabins"))
            .query(&[("id", eq(id))]);
        self.send_empty(self.authorize(request)).await
    }

    async fn upload_image(&self, bucket: &str, name: &str, bytes: Vec<u8>) -> StoreResult<()> {
        let url = format!("{}/storage/v1/object/{bucket}/{name}", self.config.url);
        let request = self
            .client
            .post(url)
            .header("Content-Type", "application/octet-stream")
            .header("x-upsert", "false")
            .body(bytes);
        self.send_empty(self.authorize(request)).await
    }

    async fn list_bookings(&self, status: Option<BookingStatus>) -> StoreResult<Vec<Booking>> {
        let mut query = vec![("select", BOOKING_COLUMNS.to_string())];
        if let Some(status) = status {
            query.push(("status", format!("eq.{}", status.as_str())));
        }
        let request = self.client.get(self.rest("bookings")).query(&query);
        self.send(self.authorize(request)).await
    }

    async fn get_booking(&self, id: BookingId) -> StoreResult<Booking> {
        let request = self
            .client
            .get(self.rest("bookings"))
            .query(&[("select", BOOKING_COLUMNS.to_string()), ("id", eq(id))]);
        self.first_row(self.authorize(request), "bookings", id).await
    }

    async fn delete_booking(&self, id: BookingId) -> StoreResult<()> {
        let request = self
            .client
            .delete(self.rest("bookings"))
            .query(&[("id", eq(id))]);
        self.send_empty(self.authorize(request)).await
    }

    async fn get_settings(&self) -> StoreResult<HotelSettings> {
        let request = self.client.get(self.rest("settings")).query(&[("select", "*")]);
        self.first_row(self.authorize(request), "settings", 1).await
    }

    async fn update_settings(&self, update: SettingsUpdate) -> StoreResult<HotelSettings> {
        let request = self
            .client
            .patch(self.rest("settings"))
            .query(&[("id", eq(1))])
            .json(&update);
        self.first_row(self.returning(request), "settings", 1).await
    }

    async fn sign_in(&self, credentials: Credentials) -> StoreResult<UserInfo> {
        let request = self
            .client
            .post(self.auth("token"))
            .query(&[("grant_type", "password")])
            .header("apikey", &self.config.anon_key)
            .json(&credentials);
        let session: AuthSession = self.send(request).await?;
        self.set_token(Some(session.access_token));
        Ok(session.user.into())
    }

    async fn sign_up(&self, user: NewUser) -> StoreResult<UserInfo> {
        let body = serde_json::json!({
            "email": user.email,
            "password": user.password,
            "data": { "full_name": user.full_name, "avatar": "" },
        });
        let request = self
            .client
            .post(self.auth("signup"))
            .header("apikey", &self.config.anon_key)
            .json(&body);
        let created = match self.send::<SignUpResponse>(request).await? {
            SignUpResponse::Session { user } => user,
            SignUpResponse::User(user) => user,
        };
        Ok(created.into())
    }

    async fn current_user(&self) -> StoreResult<Option<UserInfo>> {
        if self.token().is_none() {
            return Ok(None);
        }
        let request = self.authorize(self.client.get(self.auth("user")));
        match self.send::<AuthUser>(request).await {
            Ok(user) => Ok(Some(user.into())),
            Err(StoreError::Unauthorized) => {
                tracing::info!("Session expired");
                self.set_token(None);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn sign_out(&self) -> StoreResult<()> {
        if self.token().is_none() {
            return Ok(());
        }
        let request = self.authorize(self.client.post(self.auth("logout")));
        let result = self.send_empty(request).await;
        self.set_token(None);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_variants() {
        assert_eq!(
            error_message(r#"{"code":"23505","message":"duplicate key"}"#),
            Some("duplicate key".to_string())
        );
        assert_eq!(
            error_message(r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
            Some("Invalid login credentials".to_string())
        );
        assert_eq!(error_message("<html>"), None);
    }

    #[test]
    fn test_sign_up_response_shapes() {
        let with_session = r#"{"access_token":"t","user":{"id":"u1","email":"a@b.c","user_metadata":{"full_name":"A","avatar":""}}}"#;
        let bare = r#"{"id":"u2","email":"d@e.f"}"#;

        let user = match serde_json::from_str::<SignUpResponse>(with_session).unwrap() {
            SignUpResponse::Session { user } => UserInfo::from(user),
            SignUpResponse::User(_) => panic!("expected session"),
        };
        assert_eq!(user.full_name.as_deref(), Some("A"));
        assert_eq!(user.avatar, None);

        let user = match serde_json::from_str::<SignUpResponse>(bare).unwrap() {
            SignUpResponse::User(user) => UserInfo::from(user),
            SignUpResponse::Session { .. } => panic!("expected bare user"),
        };
        assert_eq!(user.display_name(), "d@e.f");
    }

    #[tokio::test]
    async fn test_signed_out_client_skips_network() {
        let backend = SupabaseBackend::new(BackendConfig::default());
        assert_eq!(backend.current_user().await.unwrap(), None);
        backend.sign_out().await.unwrap();
        assert_eq!(backend.storage_url(), "");
    }
}
