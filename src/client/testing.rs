use std::io;
use std::sync::{Arc, Mutex};

use super::{Auth, BoxFuture, ForwardEmailClient, HttpRequest, HttpResponse, HttpTransport};

#[derive(Debug, Clone)]
pub(super) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    last_request: Option<HttpRequest>,
    response: Result<HttpResponse, String>,
}

impl FakeTransport {
    pub(super) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
        Self::with_response(Ok(HttpResponse {
            status: response_status,
            body: response_body.into(),
        }))
    }

    pub(super) fn failing(message: impl Into<String>) -> Self {
        Self::with_response(Err(message.into()))
    }

    fn with_response(response: Result<HttpResponse, String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                last_request: None,
                response,
            })),
        }
    }

    pub(super) fn last_request(&self) -> HttpRequest {
        let state = self.state.lock().unwrap();
        state.last_request.clone().expect("no request was sent")
    }
}

impl HttpTransport for FakeTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn std::error::Error + Send + Sync>>> {
        Box::pin(async move {
            let response = {
                let mut state = self.state.lock().unwrap();
                state.last_request = Some(request);
                state.response.clone()
            };
            response.map_err(|message| {
                Box::new(io::Error::new(io::ErrorKind::ConnectionRefused, message))
                    as Box<dyn std::error::Error + Send + Sync>
            })
        })
    }
}

pub(super) fn make_client(transport: FakeTransport) -> ForwardEmailClient {
    ForwardEmailClient {
        auth: Auth::api_key("test_key").unwrap(),
        base_url: "https://example.invalid".to_owned(),
        http: Arc::new(transport),
    }
}

pub(super) fn assert_param(params: &[(String, String)], key: &str, value: &str) {
    assert!(
        params.iter().any(|(k, v)| k == key && v == value),
        "missing param {key}={value}; got: {params:?}"
    );
}
