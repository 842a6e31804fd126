use reqwest::Client;

use crate::{Result, REQUEST_TIMEOUT};

/// Builds the client shared by every request in a session.
pub(crate) fn build_client() -> Result<Client> {
    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    Ok(client)
}

/// Page 1 lives at the bare base url, every later page under `page/{n}/`.
pub(crate) fn page_url(base_url: &str, page_num: usize) -> String {
    if page_num <= 1 {
        base_url.to_owned()
    } else {
        format!("{base_url}page/{page_num}/")
    }
}

/// Requests a single page and returns the HTML body.
/// One attempt only; retrying is up to the caller.
pub(crate) async fn fetch_page(client: &Client, base_url: &str, page_num: usize) -> Result<String> {
    let res = client.get(page_url(base_url, page_num)).send().await?;
    let html = res.error_for_status()?.text().await?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::Error;

    fn base_url(server: &MockServer) -> String {
        format!("{}/", server.uri())
    }

    #[test]
    fn first_page_uses_the_bare_url() {
        assert_eq!(page_url("http://q.example/", 1), "http://q.example/");
    }

    #[test]
    fn later_pages_get_a_page_segment() {
        assert_eq!(page_url("http://q.example/", 3), "http://q.example/page/3/");
    }

    #[tokio::test]
    async fn fetches_the_page_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page/2/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>two</html>"))
            .mount(&server)
            .await;

        let client = build_client().unwrap();
        let html = fetch_page(&client, &base_url(&server), 2).await.unwrap();
        assert_eq!(html, "<html>two</html>");
    }

    #[tokio::test]
    async fn status_failures_are_classified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_client().unwrap();
        let err = fetch_page(&client, &base_url(&server), 1).await.unwrap_err();
        assert!(matches!(err, Error::HttpStatus(status) if status.as_u16() == 404));
    }

    #[tokio::test]
    async fn slow_responses_time_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let client = Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap();
        let err = fetch_page(&client, &base_url(&server), 1).await.unwrap_err();
        assert!(matches!(err, Error::Timeout));
    }

    #[tokio::test]
    async fn refused_connections_are_classified() {
        // Port 9 (discard) is not bound in the test environment.
        let client = build_client().unwrap();
        let err = fetch_page(&client, "http://127.0.0.1:9/", 1)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Connection(_)));
    }
}
