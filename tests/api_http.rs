// HTTP-level tests for `ApiClient` against a local mock backend. The
// client is blocking, so the mock server runs on its own tokio runtime
// and the requests are made from the test thread.

use std::fs;

use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use webship::api::ApiClient;
use webship::deploy::SiteBackend;
use webship::manifest::build_manifest;
use webship::walk::{list_files, ErrorMode};

fn client_for(server: &MockServer, token: &str) -> ApiClient {
    ApiClient::new(server.uri(), Some(token.to_string())).unwrap()
}

#[test]
fn register_alias_posts_json_with_bearer_token() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/website"))
            .and(header("authorization", "Bearer sekrit"))
            .and(body_string_contains("\"alias\":\"demo\""))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server),
    );

    // An unmatched request would get 404 from the mock server, so a
    // successful call proves the method, path, header and body matched.
    client_for(&server, "sekrit").register_alias("demo").unwrap();
}

#[test]
fn create_endpoints_hit_their_paths() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    for endpoint in ["/website/bucket", "/website/cloudfront", "/website/record"] {
        rt.block_on(
            Mock::given(method("POST"))
                .and(path(endpoint))
                .respond_with(ResponseTemplate::new(201))
                .mount(&server),
        );
    }

    let api = client_for(&server, "t");
    api.create_bucket("demo").unwrap();
    api.create_cloudfront("demo").unwrap();
    api.create_record("demo").unwrap();
}

#[test]
fn upload_sends_one_part_per_relative_key() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/website/bucket/upload/demo"))
            .and(body_string_contains("name=\"index.html\""))
            .and(body_string_contains("name=\"assets/app.js\""))
            .and(body_string_contains("hello site"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server),
    );

    let tmp = TempDir::new().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    fs::write(root.join("index.html"), b"hello site").unwrap();
    fs::create_dir(root.join("assets")).unwrap();
    fs::write(root.join("assets").join("app.js"), b"console.log(1)").unwrap();

    let files = list_files(&root, ErrorMode::FailFast).unwrap();
    let manifest = build_manifest(&root, &files).unwrap();

    client_for(&server, "t").upload_site("demo", &manifest).unwrap();
}

#[test]
fn backend_rejection_carries_status_and_body() {
    let rt = Runtime::new().unwrap();
    let server = rt.block_on(MockServer::start());
    rt.block_on(
        Mock::given(method("POST"))
            .and(path("/website"))
            .respond_with(ResponseTemplate::new(500).set_body_string("alias already taken"))
            .mount(&server),
    );

    let err = client_for(&server, "t").register_alias("demo").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("500"), "missing status in: {msg}");
    assert!(msg.contains("alias already taken"), "missing body in: {msg}");
}
