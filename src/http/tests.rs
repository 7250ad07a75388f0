//! Tests for the HTTP module

use super::*;
use crate::auth::Signature;
use crate::config::{ClientConfig, Credentials};
use crate::error::Error;
use crate::types::{Query, Resource};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fetcher_for(base_url: &str) -> HttpFetcher {
    let config = ClientConfig::builder().base_url(base_url).build();
    HttpFetcher::new(&config, Arc::new(Credentials::new("abc", "key"))).unwrap()
}

#[test]
fn test_page_url_shape() {
    let fetcher = fetcher_for("https://api.booli.se");
    let signature = Signature::new(fetcher.credentials(), "1000", "nonce");
    let query = Query::new().q("Malmö").with("limit", "100").with("offset", "0");

    let url = fetcher
        .page_url(Resource::Sold, &query, &signature)
        .unwrap();

    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("api.booli.se"));
    assert_eq!(url.path(), "/sold");
    assert_eq!(
        url.query(),
        Some(
            "callerId=abc&hash=3f918a1a04c20b2847dec9ce0b86dc9e07dff14e&limit=100\
             &offset=0&q=Malm%C3%B6&time=1000&unique=nonce"
        )
    );
}

#[test]
fn test_page_url_trailing_slash_root() {
    let fetcher = fetcher_for("http://localhost:9000/api/");
    let signature = Signature::new(fetcher.credentials(), "1", "n");
    let url = fetcher
        .page_url(Resource::Areas, &Query::new(), &signature)
        .unwrap();
    assert_eq!(url.path(), "/api/areas");
}

#[test]
fn test_filter_overrides_signature_field() {
    let fetcher = fetcher_for("https://api.booli.se");
    let signature = Signature::new(fetcher.credentials(), "1000", "nonce");
    let query = Query::new().with("time", "override");

    let url = fetcher
        .page_url(Resource::Listings, &query, &signature)
        .unwrap();
    let pairs: HashMap<String, String> = url.query_pairs().into_owned().collect();
    assert_eq!(pairs.get("time").map(String::as_str), Some("override"));
    assert_eq!(pairs.len(), 4);
}

#[test]
fn test_invalid_base_url() {
    let config = ClientConfig::builder().base_url("not a url").build();
    let err = HttpFetcher::new(&config, Arc::new(Credentials::new("a", "b"))).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

#[tokio::test]
async fn test_fetch_page_sends_signed_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/listings"))
        .and(query_param("callerId", "abc"))
        .and(query_param("q", "Tygelsjö"))
        .and(query_param("limit", "100"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"totalCount":0}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server.uri());
    let query = Query::new()
        .q("Tygelsjö")
        .with("limit", "100")
        .with("offset", "0");

    let body = fetcher.fetch_page(Resource::Listings, &query).await.unwrap();
    assert_eq!(&body[..], br#"{"totalCount":0}"#);

    let requests = mock_server.received_requests().await.unwrap();
    let params: HashMap<String, String> = requests[0].url.query_pairs().into_owned().collect();

    let unique = &params["unique"];
    assert_eq!(unique.len(), crate::auth::NONCE_LENGTH);
    let expected = Signature::new(fetcher.credentials(), params["time"].clone(), unique.clone());
    assert_eq!(params["hash"], expected.hash);
}

#[tokio::test]
async fn test_fetch_page_fresh_signature_per_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/areas"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(2)
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server.uri());
    fetcher.fetch_page(Resource::Areas, &Query::new()).await.unwrap();
    fetcher.fetch_page(Resource::Areas, &Query::new()).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    let nonce = |i: usize| {
        requests[i]
            .url
            .query_pairs()
            .find(|(k, _)| k == "unique")
            .map(|(_, v)| v.into_owned())
    };
    assert_ne!(nonce(0), nonce(1));
}

#[tokio::test]
async fn test_fetch_page_does_not_interpret_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sold"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&mock_server)
        .await;

    let fetcher = fetcher_for(&mock_server.uri());
    let body = fetcher.fetch_page(Resource::Sold, &Query::new()).await.unwrap();
    assert_eq!(&body[..], b"Forbidden");
}

#[tokio::test]
async fn test_fetch_page_transport_failure() {
    let fetcher = fetcher_for("http://127.0.0.1:1");
    let err = fetcher
        .fetch_page(Resource::Sold, &Query::new())
        .await
        .unwrap_err();
    assert!(err.is_transport());
}
