//! Request dispatch for the users API.
//!
//! This module turns validated users and contacts into [`ApiRequest`]s and
//! hands them to a [`Transport`]. The transport is the HTTP layer and lives
//! outside this crate; it receives fully formed requests and returns the raw
//! response body untouched.

use crate::domain::ValidationError;
use crate::error::{ApiError, ApiResult};
use crate::models::{Contact, User};
use crate::params::Params;
use std::fmt;

/// HTTP method of a users API request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready to be sent by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,

    /// Path relative to the API base URL, with a leading '/'
    pub path: String,

    /// Request parameters; empty for GET and DELETE
    pub params: Params,
}

impl ApiRequest {
    /// Create a request without parameters.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Params::new(),
        }
    }

    /// Attach parameters to the request.
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Build a full URL from a base URL and this request's path.
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        let path = self.path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

/// The HTTP layer that actually delivers requests.
///
/// Implementations own authentication, encoding of [`Params`] into the
/// request, timeouts and error mapping. They should report delivery failures
/// as [`ApiError::Transport`].
pub trait Transport {
    /// Send a request and return the raw response body.
    fn send(&self, request: &ApiRequest) -> ApiResult<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &ApiRequest) -> ApiResult<String> {
        (**self).send(request)
    }
}

/// Client for the users endpoints.
///
/// Every write runs the entity's validator before anything is handed to the
/// transport, so an invalid user or contact never produces a request.
#[derive(Debug, Clone)]
pub struct UsersClient<T> {
    transport: T,
}

impl<T: Transport> UsersClient<T> {
    /// Create a client that sends requests through `transport`.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Get a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn dispatch(&self, request: ApiRequest) -> ApiResult<String> {
        tracing::debug!(
            "{} {} params: {:?}",
            request.method,
            request.path,
            request.params.keys().collect::<Vec<_>>()
        );
        self.transport.send(&request)
    }

    fn rejected(path: &str, error: ValidationError) -> ApiError {
        tracing::warn!("Rejected request to {}: {}", path, error);
        ApiError::Validation(error)
    }

    // ========================= User Operations =========================

    /// List all users.
    pub fn list_users(&self) -> ApiResult<String> {
        self.dispatch(ApiRequest::new(Method::Get, "/users"))
    }

    /// Create a new user.
    pub fn create_user(&self, user: &User) -> ApiResult<String> {
        let path = "/users";
        user.valid_user().map_err(|e| Self::rejected(path, e))?;

        self.dispatch(ApiRequest::new(Method::Post, path).with_params(user.post_params()))
    }

    /// Update an existing user.
    pub fn update_user(&self, user_id: u64, user: &User) -> ApiResult<String> {
        let path = format!("/users/{}", user_id);
        user.valid_user().map_err(|e| Self::rejected(&path, e))?;

        self.dispatch(ApiRequest::new(Method::Put, path).with_params(user.put_params()))
    }

    /// Delete a user.
    pub fn delete_user(&self, user_id: u64) -> ApiResult<String> {
        self.dispatch(ApiRequest::new(Method::Delete, format!("/users/{}", user_id)))
    }

    // ========================= Contact Target Operations =========================

    /// Add a contact target to a user.
    pub fn create_contact(&self, user_id: u64, contact: &Contact) -> ApiResult<String> {
        let path = format!("/users/{}", user_id);
        contact.valid_contact().map_err(|e| Self::rejected(&path, e))?;

        self.dispatch(
            ApiRequest::new(Method::Post, path).with_params(contact.post_contact_params()),
        )
    }

    /// Update one of a user's contact targets.
    pub fn update_contact(
        &self,
        user_id: u64,
        contact_id: u64,
        contact: &Contact,
    ) -> ApiResult<String> {
        let path = format!("/users/{}/{}", user_id, contact_id);
        contact.valid_contact().map_err(|e| Self::rejected(&path, e))?;

        self.dispatch(
            ApiRequest::new(Method::Put, path).with_params(contact.put_contact_params()),
        )
    }

    /// Delete one of a user's contact targets.
    pub fn delete_contact(&self, user_id: u64, contact_id: u64) -> ApiResult<String> {
        self.dispatch(ApiRequest::new(
            Method::Delete,
            format!("/users/{}/{}", user_id, contact_id),
        ))
    }
}
