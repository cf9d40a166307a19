use std::net::SocketAddr;

use reqwest::Client;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tempfile::TempDir;

use catalog_server::config::{
    AppConfig, CorsConfig, DatabaseConfig, LogConfig, ServerConfig,
};
use catalog_server::state::AppState;

pub mod routes {
    pub const EXPERIMENTS: &str = "/experiments/";
    pub const PRODUCTS: &str = "/products/";
    pub const FILES: &str = "/files/";

    pub fn experiment(id: i64) -> String {
        format!("/experiments/{id}")
    }

    pub fn product(id: i64) -> String {
        format!("/products/{id}")
    }

    pub fn file(id: i64) -> String {
        format!("/files/{id}")
    }
}

/// A running test server backed by its own SQLite database file.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub db: DatabaseConnection,
    _dir: TempDir,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}?mode=rwc", dir.path().join("catalog.db").display());

        let app_config = AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors: CorsConfig {
                    allow_origins: vec![],
                    max_age: 3600,
                },
            },
            database: DatabaseConfig {
                max_connections: 1,
                ..DatabaseConfig::with_url(db_url)
            },
            log: LogConfig {
                level: "warn".to_string(),
            },
        };

        let db = catalog_server::database::init_db(&app_config.database)
            .await
            .expect("Failed to initialize test database");

        let state = AppState {
            db: db.clone(),
            config: app_config,
        };

        let app = catalog_server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            db,
            _dir: dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    /// GET with a JSON body, as used by the file filter.
    pub async fn get_with_body(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send POST request");

        TestResponse::from_response(res).await
    }

    pub async fn put(&self, path: &str, body: &Value) -> TestResponse {
        let res = self
            .client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send PUT request");

        TestResponse::from_response(res).await
    }

    pub async fn delete(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send DELETE request");

        TestResponse::from_response(res).await
    }

    /// Create an experiment via the API and return its `id`.
    pub async fn create_experiment(&self, name: &str) -> i64 {
        let res = self
            .post(routes::EXPERIMENTS, &serde_json::json!({ "name": name }))
            .await;
        assert_eq!(res.status, 201, "create_experiment failed: {}", res.text);
        res.id("experiment")
    }

    /// Create a product via the API and return its `id`.
    pub async fn create_product(&self, name: &str, experiment_id: i64) -> i64 {
        let res = self
            .post(
                routes::PRODUCTS,
                &serde_json::json!({ "name": name, "experiment_id": experiment_id }),
            )
            .await;
        assert_eq!(res.status, 201, "create_product failed: {}", res.text);
        res.id("product")
    }

    /// Create a file via the API and return its `id`.
    pub async fn create_file(&self, path: &str, product_id: i64, date_time: &str) -> i64 {
        let res = self
            .post(
                routes::FILES,
                &serde_json::json!({
                    "path": path,
                    "product_id": product_id,
                    "dateTime": date_time,
                    "level": "L3",
                }),
            )
            .await;
        assert_eq!(res.status, 201, "create_file failed: {}", res.text);
        res.id("file")
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    /// The `id` of the entity wrapped under `key`.
    pub fn id(&self, key: &str) -> i64 {
        self.body[key]["id"]
            .as_i64()
            .unwrap_or_else(|| panic!("response body should contain '{key}.id': {}", self.text))
    }

    /// Sorted ids of the entities listed under `key`.
    pub fn ids(&self, key: &str) -> Vec<i64> {
        let mut ids: Vec<i64> = self.body[key]
            .as_array()
            .unwrap_or_else(|| panic!("response body should contain list '{key}': {}", self.text))
            .iter()
            .map(|item| item["id"].as_i64().expect("listed item should have an id"))
            .collect();
        ids.sort_unstable();
        ids
    }
}
