use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

/// Response captured from the router: status plus raw body
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }
}

/// Thin wrapper around the router for driving the poll API
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn create_token(&self) -> String {
        let response = self.get("/v1/create-token").await;
        assert_eq!(response.status, StatusCode::OK);
        response.json()["token"].as_str().unwrap().to_string()
    }

    pub async fn create_room(&self, owner: &str) -> String {
        let response = self
            .post("/v1/create-room", json!({ "token": owner }))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response.json()["roomId"].as_str().unwrap().to_string()
    }

    pub async fn vote(&self, room_id: &str, token: &str, answer: Value) -> TestResponse {
        self.post(
            &format!("/v1/vote/{room_id}"),
            json!({ "token": token, "answer": answer }),
        )
        .await
    }

    pub async fn my_answer(&self, room_id: &str, token: &str) -> TestResponse {
        self.post(&format!("/v1/my-answer/{room_id}"), json!({ "token": token }))
            .await
    }

    pub async fn reset(&self, room_id: &str, token: &str) -> TestResponse {
        self.post(&format!("/v1/reset/{room_id}"), json!({ "token": token }))
            .await
    }

    pub async fn tally(&self, room_id: &str) -> TestResponse {
        self.get(&format!("/v1/tally/{room_id}")).await
    }
}
