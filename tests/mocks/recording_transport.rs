use pingdom_users::error::{ApiError, ApiResult};
use pingdom_users::{ApiRequest, Transport};
use std::sync::{Arc, Mutex};

/// Mock transport for testing.
///
/// Records every request it is handed and answers with a canned body, or
/// with a transport error when configured to fail.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<ApiRequest>>>,
    failure: Option<String>,
}

#[allow(dead_code)]
impl RecordingTransport {
    /// Create a transport that accepts every request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport that fails every request with `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            failure: Some(message.to_string()),
        }
    }

    /// All requests handed to the transport, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<ApiRequest> {
        self.sent.lock().unwrap().last().cloned()
    }

    pub fn request_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: &ApiRequest) -> ApiResult<String> {
        self.sent.lock().unwrap().push(request.clone());

        match &self.failure {
            Some(message) => Err(ApiError::Transport(message.clone())),
            None => Ok(r#"{"message":"ok"}"#.to_string()),
        }
    }
}
