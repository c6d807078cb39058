use reqwest::Url;

use crate::error::FetchError;

/// Issues a single GET and hands back the raw body text.
pub trait Transport: Send + Sync {
    fn get_text(&self, url: &Url) -> Result<String, FetchError>;
}

/// Blocking reqwest client. No timeout or retry is configured beyond the
/// client defaults.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(user_agent: &str) -> reqwest::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get_text(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| FetchError::Transport {
                url: redacted(url),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %redacted(url), %status, "upstream returned an error status");
            return Err(FetchError::Status {
                url: redacted(url),
                status,
            });
        }

        response.text().map_err(|source| FetchError::Transport {
            url: redacted(url),
            source,
        })
    }
}

/// The URL without its query string, safe to log since the query carries
/// the client id.
pub fn redacted(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve a single raw HTTP response on an ephemeral local port.
    fn serve_once(status_line: &'static str, body: &'static str) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                line.clear();
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\n\
                 Content-Type: application/json\r\n\
                 Content-Length: {}\r\n\
                 Connection: close\r\n\r\n{body}",
                body.len()
            );
            reader.get_mut().write_all(response.as_bytes()).unwrap();
        });

        Url::parse(&format!("http://{addr}/api/search?client_id=secret-id")).unwrap()
    }

    #[test]
    fn test_error_status_is_redacted_transport_error() {
        let url = serve_once("503 Service Unavailable", "down");
        let transport = HttpTransport::new("boardgame-catalog-test").unwrap();

        let err = transport.get_text(&url).unwrap_err();

        assert!(err.is_transport());
        assert_eq!(err.as_str(), "HTTP_STATUS_ERROR");
        assert!(matches!(
            err,
            FetchError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                ..
            }
        ));
        assert!(!err.to_string().contains("secret-id"));
        assert!(err.to_string().contains("/api/search"));
    }

    #[test]
    fn test_success_returns_body_text() {
        let url = serve_once("200 OK", r#"{"games": []}"#);
        let transport = HttpTransport::new("boardgame-catalog-test").unwrap();

        assert_eq!(transport.get_text(&url).unwrap(), r#"{"games": []}"#);
    }

    #[test]
    fn test_redacted_drops_query() {
        let url =
            Url::parse("https://api.boardgameatlas.com/api/search?limit=5&client_id=abc").unwrap();

        assert_eq!(redacted(&url), "https://api.boardgameatlas.com/api/search");
    }
}
