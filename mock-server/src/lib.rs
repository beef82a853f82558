//! HTTP server that answers `GET /users/{id}` with a fixed user document.

use axum::{extract::Path, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub login: String,
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl User {
    /// The document served for every id.
    pub fn canned() -> Self {
        Self {
            login: "0x4e0x4b".to_string(),
            id: 1,
            kind: "User".to_string(),
        }
    }
}

pub fn app() -> Router {
    Router::new().route("/users/{id}", get(get_user))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn get_user(Path(id): Path<String>) -> Json<User> {
    tracing::debug!(%id, "serving user");
    Json(User::canned())
}
