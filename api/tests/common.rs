use std::future::Future;

use anyhow::Result;
use once_cell::sync::Lazy;
use reqwest::{header, RequestBuilder};

use apikey_api::Server;

#[derive(Clone, Debug)]
pub struct TestClient {
    pub base: String,
    pub client: reqwest::Client,
}

impl TestClient {
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(format!("{}/{}", self.base, path))
    }

    /// A client that sends `authorization` on every request.
    pub fn clone_with_authorization(&self, authorization: &str) -> Result<TestClient> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(authorization)?,
        );

        Ok(TestClient {
            base: self.base.clone(),
            client: reqwest::ClientBuilder::new()
                .timeout(std::time::Duration::from_secs(30))
                .default_headers(headers)
                .build()?,
        })
    }
}

pub struct TestApp {
    /// A client set to the base url of the server, sending no credentials.
    pub client: TestClient,
}

async fn start_app() -> Result<TestApp> {
    let config = apikey_api::config::Config {
        port: 0, // Bind to random port
        host: "127.0.0.1".to_string(),
        env: "test".to_string(),
    };
    Lazy::force(&apikey_test::TRACING);
    let Server { server, host, port } = apikey_api::run_server(config)?;

    tokio::task::spawn(server);

    let client = TestClient {
        base: format!("http://{}:{}", host, port),
        client: reqwest::ClientBuilder::new()
            .timeout(std::time::Duration::from_secs(30))
            .build()?,
    };

    Ok(TestApp { client })
}

pub async fn run_app_test<F, R>(f: F)
where
    F: FnOnce(TestApp) -> R,
    R: Future<Output = Result<(), anyhow::Error>>,
{
    let app = start_app().await.expect("Starting app");
    f(app).await.unwrap();
}
