use serde::{de::DeserializeOwned, Serialize};
use url::Url;

pub use webapi_model::{
    AdmissionInquiry, ContactRequest, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest,
};

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("API returned an invalid response: {reason}")]
    InvalidResponse { reason: String },

    #[error("API returned an error: {reason}")]
    ApiError { reason: String },
}

type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Clone, Debug)]
pub struct AdmissionsApiClient {
    endpoint: Url,
    client: reqwest::Client,
}

impl AdmissionsApiClient {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.endpoint
            .join(path)
            .map_err(|e| GatewayError::InvalidRequest {
                reason: e.to_string(),
            })
    }

    async fn send_request<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::InvalidRequest {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            return response
                .json::<T>()
                .await
                .map_err(|e| GatewayError::InvalidResponse {
                    reason: e.to_string(),
                });
        }

        let body = response
            .json::<MessageResponse>()
            .await
            .map_err(|e| GatewayError::InvalidResponse {
                reason: format!("{} ({})", e, status),
            })?;
        let reason = if body.message.is_empty() {
            status.to_string()
        } else {
            body.message
        };
        Err(GatewayError::ApiError { reason })
    }

    async fn post<T: DeserializeOwned>(&self, path: &str, req: &impl Serialize) -> Result<T> {
        Self::send_request::<T>(self.client.post(self.url(path)?).json(req)).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        self.post("login", request).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse> {
        self.post("register", request).await
    }

    pub async fn submit_admission(&self, inquiry: &AdmissionInquiry) -> Result<MessageResponse> {
        self.post("submit-admission", inquiry).await
    }

    pub async fn submit_contact(&self, request: &ContactRequest) -> Result<MessageResponse> {
        self.post("submit-contact", request).await
    }
}

impl PartialEq for AdmissionsApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.endpoint == other.endpoint
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};

    use super::*;

    async fn login(Json(req): Json<LoginRequest>) -> (StatusCode, Json<Value>) {
        if req.password == "hunter2" {
            (
                StatusCode::OK,
                Json(json!({ "message": "Welcome back", "token": format!("token-for-{}", req.email) })),
            )
        } else {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Invalid credentials" })),
            )
        }
    }

    async fn register(Json(req): Json<RegisterRequest>) -> Json<Value> {
        Json(json!({ "message": format!("Registered {}", req.name) }))
    }

    async fn submit_admission(Json(req): Json<AdmissionInquiry>) -> (StatusCode, Json<Value>) {
        if req.mobile.is_empty() {
            (StatusCode::BAD_REQUEST, Json(json!({})))
        } else {
            (
                StatusCode::OK,
                Json(json!({ "message": format!("Inquiry for {} received", req.course) })),
            )
        }
    }

    async fn submit_contact() -> (StatusCode, &'static str) {
        (StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>")
    }

    fn routes() -> Router {
        Router::new()
            .route("/login", post(login))
            .route("/register", post(register))
            .route("/submit-admission", post(submit_admission))
            .route("/submit-contact", post(submit_contact))
    }

    async fn serve(router: Router, base_path: &str) -> AdmissionsApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
        AdmissionsApiClient::new(Url::parse(&format!("http://{}{}", addr, base_path)).unwrap())
    }

    #[tokio::test]
    async fn login_returns_token() {
        let api = serve(routes(), "/").await;
        let response = api
            .login(&LoginRequest {
                email: "student@example.com".into(),
                password: "hunter2".into(),
            })
            .await
            .unwrap();

        assert_eq!(response.token, "token-for-student@example.com");
        assert_eq!(response.message, "Welcome back");
    }

    #[tokio::test]
    async fn rejected_login_carries_server_message() {
        let api = serve(routes(), "/").await;
        let error = api
            .login(&LoginRequest {
                email: "student@example.com".into(),
                password: "wrong".into(),
            })
            .await
            .unwrap_err();

        match error {
            GatewayError::ApiError { reason } => assert_eq!(reason, "Invalid credentials"),
            e => panic!("unexpected error: {}", e),
        }
    }

    #[tokio::test]
    async fn register_and_admission_messages() {
        let api = serve(routes(), "/").await;

        let registered = api
            .register(&RegisterRequest {
                name: "Ravi".into(),
                email: "ravi@example.com".into(),
                password: "pw".into(),
            })
            .await
            .unwrap();
        assert_eq!(registered.message, "Registered Ravi");

        let inquiry = api
            .submit_admission(&AdmissionInquiry {
                name: "Ravi".into(),
                mobile: "9000000000".into(),
                course: "AI Engineering".into(),
            })
            .await
            .unwrap();
        assert_eq!(inquiry.message, "Inquiry for AI Engineering received");
    }

    #[tokio::test]
    async fn error_without_message_uses_status() {
        let api = serve(routes(), "/").await;
        let error = api
            .submit_admission(&AdmissionInquiry::default())
            .await
            .unwrap_err();

        match error {
            GatewayError::ApiError { reason } => assert_eq!(reason, "400 Bad Request"),
            e => panic!("unexpected error: {}", e),
        }
    }

    #[tokio::test]
    async fn non_json_error_body_is_invalid_response() {
        let api = serve(routes(), "/").await;
        let error = api
            .submit_contact(&ContactRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(error, GatewayError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn endpoint_path_prefix_is_kept() {
        let api = serve(Router::new().nest("/api", routes()), "/api/").await;
        let registered = api
            .register(&RegisterRequest {
                name: "Meera".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(registered.message, "Registered Meera");
    }

    #[tokio::test]
    async fn unreachable_server_is_invalid_request() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = AdmissionsApiClient::new(Url::parse(&format!("http://{}/", addr)).unwrap());
        let error = api
            .submit_contact(&ContactRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(error, GatewayError::InvalidRequest { .. }));
    }

    #[test]
    fn clients_compare_by_endpoint() {
        let a = AdmissionsApiClient::new(Url::parse("http://localhost:3000/").unwrap());
        let b = AdmissionsApiClient::new(Url::parse("http://localhost:3000/").unwrap());
        let c = AdmissionsApiClient::new(Url::parse("https://example.com/api/").unwrap());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
