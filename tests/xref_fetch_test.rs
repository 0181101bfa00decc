#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use xref::XrefError;

    const NOTES_PAGE: &str = r##"
        <html><body>
          <p>
            <a class="reference internal" href="/docs/api/parser"><code>http_parser</code></a>
            <a class="reference external" href="/docs/flags#runtime">--runtime-flag</a>
            <a class="headerlink" href="#section">¶</a>
          </p>
        </body></html>
    "##;

    #[tokio::test]
    async fn scrapes_reference_anchors_from_the_notes_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/version_history/v1.33/v1.33.0"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(NOTES_PAGE, "text/html"))
            .mount(&server)
            .await;

        let url = format!("{}/version_history/v1.33/v1.33.0", server.uri());
        let table = xref::fetch_reference_table(&url).await.unwrap();

        assert_eq!(table["http_parser"], "/docs/api/parser");
        assert_eq!(table["--runtime-flag"], "/docs/flags#runtime");
        assert!(!table.contains_key("¶"));
    }

    #[tokio::test]
    async fn non_html_content_type_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/notes"))
            .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
            .mount(&server)
            .await;

        let url = format!("{}/notes", server.uri());
        let err = xref::fetch_reference_table(&url).await.unwrap_err();
        assert!(matches!(err, XrefError::ContentType(_)));
    }

    #[tokio::test]
    async fn missing_page_is_an_error() {
        let server = MockServer::start().await;

        let url = format!("{}/does-not-exist", server.uri());
        let err = xref::fetch_reference_table(&url).await.unwrap_err();
        assert!(matches!(err, XrefError::Status(_)));
    }
}
