//! Remote trivia API client

use super::{ApiCategory, CategorySource, LoadError};
use crate::core::CategoryId;
use reqwest::Client;
use std::time::Duration;

/// Fetches categories from `GET {base_url}/category?id={id}`
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Build a client for the given API root
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Http` if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LoadError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint for category lookups, independent of trailing slashes in the base URL
    #[must_use]
    pub fn category_url(&self) -> String {
        format!("{}/category", self.base_url.trim_end_matches('/'))
    }
}

impl CategorySource for HttpSource {
    async fn fetch_category(&self, id: CategoryId) -> Result<ApiCategory, LoadError> {
        let response = self
            .client
            .get(self.category_url())
            .query(&[("id", id.value())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Category {id} request returned {status}");
            return Err(LoadError::HttpStatus { id, status });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, Clue};
    use crate::loader::load_category;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve a single canned response on a local port and return its base URL
    fn serve_once(status: &'static str, body: &'static str, delay: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => return,
                    Ok(n) => request.extend_from_slice(&buf[..n]),
                }
            }

            thread::sleep(delay);
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
        });

        format!("http://{addr}/api/")
    }

    fn local_source(url: String, timeout: Duration) -> HttpSource {
        HttpSource::new(url, timeout).unwrap()
    }

    #[test]
    fn category_url_with_trailing_slash() {
        let source = HttpSource::new("https://jservice.io/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(source.category_url(), "https://jservice.io/api/category");
    }

    #[test]
    fn category_url_without_trailing_slash() {
        let source = HttpSource::new("http://localhost:8080/api", Duration::from_secs(1)).unwrap();
        assert_eq!(source.category_url(), "http://localhost:8080/api/category");
        assert_eq!(source.base_url(), "http://localhost:8080/api");
    }

    #[tokio::test]
    async fn fetch_shapes_math_category() {
        let body = r#"{"id": 5, "title": "Math", "clues": [{"question": "2+2", "answer": "4", "value": 200}]}"#;
        let url = serve_once("200 OK", body, Duration::ZERO);
        let source = local_source(url, Duration::from_secs(5));

        let category = load_category(&source, CategoryId::new(5)).await.unwrap();

        assert_eq!(category, Category::new("Math", vec![Clue::new("2+2", "4")]));
    }

    #[tokio::test]
    async fn fetch_rejects_error_status() {
        let url = serve_once("404 Not Found", "{}", Duration::ZERO);
        let source = local_source(url, Duration::from_secs(5));

        let err = source.fetch_category(CategoryId::new(5)).await.unwrap_err();

        assert!(matches!(
            err,
            LoadError::HttpStatus { id, status } if id.value() == 5 && status.as_u16() == 404
        ));
    }

    #[tokio::test]
    async fn fetch_reports_malformed_body_as_json_error() {
        let url = serve_once("200 OK", "<html>oops</html>", Duration::ZERO);
        let source = local_source(url, Duration::from_secs(5));

        let err = source.fetch_category(CategoryId::new(1)).await.unwrap_err();

        assert!(matches!(err, LoadError::Json(_)));
    }

    #[tokio::test]
    async fn fetch_accepts_null_title_and_clues() {
        let url = serve_once("200 OK", r#"{"title": null, "clues": null}"#, Duration::ZERO);
        let source = local_source(url, Duration::from_secs(5));

        let category = load_category(&source, CategoryId::new(1)).await.unwrap();

        assert_eq!(category, Category::new("", Vec::new()));
    }

    #[tokio::test]
    async fn fetch_fails_when_reply_is_slower_than_timeout() {
        let url = serve_once("200 OK", r#"{"title": "Late"}"#, Duration::from_millis(1500));
        let source = local_source(url, Duration::from_millis(100));

        let err = source.fetch_category(CategoryId::new(1)).await.unwrap_err();

        assert!(matches!(err, LoadError::Http(ref e) if e.is_timeout()), "{err:?}");
    }
}
