//! Envelope dispatch over HTTP.

#[cfg(test)]
mod tests {
    use resultkit_core::{JsonNamingPolicy, ResultKitConfig};
    use resultkit_http::REQUEST_ID_HEADER;

    use crate::{TestServer, client};

    #[tokio::test]
    async fn test_should_return_success_with_data() {
        let server = TestServer::start().await.unwrap();
        let resp = client().get(server.url("/hello")).send().await.unwrap();

        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()["content-type"],
            "application/json; charset=utf-8"
        );
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));
        assert_eq!(
            resp.text().await.unwrap(),
            r#"{"code":0,"title":"OK","data":"success"}"#
        );
    }

    #[tokio::test]
    async fn test_should_return_singletons() {
        let server = TestServer::start().await.unwrap();

        let resp = client().get(server.url("/success")).send().await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.text().await.unwrap(), r#"{"code":0,"title":"OK"}"#);

        let resp = client().get(server.url("/failure")).send().await.unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.text().await.unwrap(),
            r#"{"code":-1,"title":"request fail"}"#
        );
    }

    #[tokio::test]
    async fn test_should_return_xml_document() {
        let server = TestServer::start().await.unwrap();
        let resp = client().get(server.url("/xml")).send().await.unwrap();

        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()["content-type"],
            "application/xml; charset=utf-8"
        );
        assert_eq!(
            resp.text().await.unwrap(),
            concat!(
                r#"<?xml version="1.0" encoding="utf-8"?>"#,
                r#"<ApiResult xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
                r#"xmlns:xsd="http://www.w3.org/2001/XMLSchema">"#,
                "<Code>0</Code><Title>OK</Title><Data>success</Data></ApiResult>",
            )
        );
    }

    #[tokio::test]
    async fn test_should_return_empty_plain_text_body() {
        let server = TestServer::start().await.unwrap();
        let resp = client().get(server.url("/plain")).send().await.unwrap();

        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["content-type"], "text/plain");
        assert!(resp.bytes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_should_translate_unsupported_content_type_to_server_error() {
        let server = TestServer::start().await.unwrap();
        let resp = client().get(server.url("/stream")).send().await.unwrap();

        assert_eq!(resp.status(), 500);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["code"], -1);
        assert_eq!(
            body["title"],
            "Unsupported content type: application/octet-stream"
        );
    }

    #[tokio::test]
    async fn test_should_return_not_found_envelope() {
        let server = TestServer::start().await.unwrap();
        let resp = client().get(server.url("/missing")).send().await.unwrap();

        assert_eq!(resp.status(), 404);
        assert_eq!(
            resp.text().await.unwrap(),
            r#"{"code":-1,"title":"No route for /missing"}"#
        );
    }

    #[tokio::test]
    async fn test_should_report_health() {
        let server = TestServer::start().await.unwrap();
        let resp = client().get(server.url("/health")).send().await.unwrap();

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["data"]["Status"], "running");
    }

    #[tokio::test]
    async fn test_should_apply_configured_naming_and_default() {
        let server = TestServer::start_with(ResultKitConfig {
            json_naming: JsonNamingPolicy::PascalCase,
            ..ResultKitConfig::default()
        })
        .await
        .unwrap();

        let resp = client().get(server.url("/hello")).send().await.unwrap();
        assert_eq!(
            resp.text().await.unwrap(),
            r#"{"Code":0,"Title":"OK","Data":"success"}"#
        );
    }
}
