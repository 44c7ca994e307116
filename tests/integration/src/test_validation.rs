//! Validation-failure envelopes over HTTP.

#[cfg(test)]
mod tests {
    use crate::{TestServer, client};

    #[tokio::test]
    async fn test_should_return_validation_errors_as_json() {
        let server = TestServer::start().await.unwrap();
        let resp = client()
            .post(server.url("/validation"))
            .body(r#"{"age":200}"#)
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["code"], 400_000);
        assert_eq!(body["title"], "One or more validation errors occurred.");
        assert_eq!(
            body["data"],
            serde_json::json!({
                "age": ["The field Age must be between 1 and 120."],
                "name": ["The Name field is required."],
            })
        );
    }

    #[tokio::test]
    async fn test_should_refuse_validation_errors_as_xml() {
        let server = TestServer::start().await.unwrap();
        let resp = client()
            .post(server.url("/validation?format=xml"))
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), 500);
        assert_eq!(
            resp.headers()["content-type"],
            "application/json; charset=utf-8"
        );
        let body: serde_json::Value = resp.json().await.unwrap();
        let title = body["title"].as_str().unwrap();
        assert!(title.starts_with("cannot serialize payload of type"), "{title}");
    }

    #[tokio::test]
    async fn test_should_accept_valid_body_in_both_formats() {
        let server = TestServer::start().await.unwrap();
        let payload = r#"{"name":"Ada","age":36}"#;

        let resp = client()
            .post(server.url("/validation"))
            .body(payload)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.text().await.unwrap(),
            r#"{"code":0,"title":"OK","data":{"Name":"Ada","Age":36}}"#
        );

        let resp = client()
            .post(server.url("/validation?format=xml"))
            .body(payload)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        assert!(
            resp.text()
                .await
                .unwrap()
                .ends_with("<Data><Name>Ada</Name><Age>36</Age></Data></ApiResult>")
        );
    }

    #[tokio::test]
    async fn test_should_reject_malformed_body() {
        let server = TestServer::start().await.unwrap();
        let resp = client()
            .post(server.url("/validation"))
            .body("{")
            .send()
            .await
            .unwrap();

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["code"], -1);
    }
}
