//! Common test utilities
//!
//! Builds the gateway router on the real upstream-header auth adapter and an
//! in-memory directory, and wraps `oneshot` calls into JSON responses.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use idgate::config::GatewayConfig;
use idgate::directory_adapter::DirectoryAdapter;
use idgate::{App, AppBuilder, routes};
use idgate_auth_adapter_upstream::HeaderAuthAdapter;
use idgate_directory_adapter_memory::{MemoryDirectoryAdapter, Seed};

pub const ADMIN_ENTITLEMENT: &str = "cn=admins";

pub const CONFIG: &str = r#"
entitlement: cn=admins
features:
  search:
    title: Search
    verbs: { get: true, put: false }
  export:
    title: Export
    verbs: { all: true, delete: false }
  purge:
    verbs: { delete: [Admin] }
  reports:
    verbs: { post: true }
urlMap:
  - path: /identity
    access: authenticated
  - path: /accounts/identity/*
    methods: [POST]
    access: admin
  - path: /roles/account/*
    methods: [POST]
    access: admin
  - path: /rolls/account/*
    methods: [POST]
    access: admin
"#;

pub const SEED: &str = r#"
identities:
  alice:
    accounts: [acc-1, acc-2]
  bob:
    accounts: [acc-3]
accounts:
  acc-1:
    roles: [billing]
  acc-3:
    roles: [billing, support]
"#;

pub fn directory() -> Arc<dyn DirectoryAdapter> {
	let seed = Seed::from_yaml(SEED).expect("Failed to parse seed");
	Arc::new(MemoryDirectoryAdapter::from_seed(seed).expect("Failed to seed directory"))
}

pub fn build_app(config: GatewayConfig, directory: Arc<dyn DirectoryAdapter>) -> App {
	let mut builder = AppBuilder::new();
	builder
		.config(config)
		.auth_adapter(Arc::new(HeaderAuthAdapter::default()))
		.directory_adapter(directory);
	builder.build().expect("Failed to build app")
}

pub fn router_with(config: &str, directory: Arc<dyn DirectoryAdapter>) -> Router {
	let config = GatewayConfig::from_yaml(config).expect("Failed to parse config");
	routes::init(build_app(config, directory))
}

pub fn router() -> Router {
	router_with(CONFIG, directory())
}

#[derive(Clone, Copy)]
pub enum Caller {
	Anonymous,
	User,
	Admin,
}

pub fn request(method: Method, uri: &str, caller: Caller) -> axum::http::request::Builder {
	let builder = Request::builder().method(method).uri(uri);
	match caller {
		Caller::Anonymous => builder,
		Caller::User => builder
			.header("x-auth-givenname", "Grace")
			.header("x-auth-surname", "Hopper")
			.header("x-auth-entitlements", "cn=staff"),
		Caller::Admin => builder
			.header("x-auth-givenname", "Ada")
			.header("x-auth-surname", "Lovelace")
			.header("x-auth-entitlements", format!("cn=staff,{}", ADMIN_ENTITLEMENT)),
	}
}

pub fn form(method: Method, uri: &str, caller: Caller, fields: &[(&str, &str)]) -> Request<Body> {
	let body = serde_urlencoded::to_string(fields).expect("Failed to encode form");
	request(method, uri, caller)
		.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
		.body(Body::from(body))
		.expect("Failed to build request")
}

pub struct TestResponse {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Value,
}

pub async fn send(router: &Router, req: Request<Body>) -> TestResponse {
	let res = router.clone().oneshot(req).await.expect("Router is infallible");
	let status = res.status();
	let headers = res.headers().clone();
	let bytes = res.into_body().collect().await.expect("Failed to read body").to_bytes();
	let body = if bytes.is_empty() {
		Value::Null
	} else {
		serde_json::from_slice(&bytes).expect("Response is not JSON")
	};
	TestResponse { status, headers, body }
}

pub async fn call(router: &Router, method: Method, uri: &str, caller: Caller) -> TestResponse {
	let req = request(method, uri, caller).body(Body::empty()).expect("Failed to build request");
	send(router, req).await
}

pub fn ids(body: &Value) -> Vec<&str> {
	body.as_array()
		.expect("Expected a JSON array")
		.iter()
		.map(|feature| feature["id"].as_str().expect("Feature without id"))
		.collect()
}

// vim: ts=4
