//! Identity endpoint, authentication and URL-map access over HTTP

mod common;

use axum::body::Body;
use axum::http::{HeaderValue, Method, Request, StatusCode};
use serde_json::json;

use common::*;

#[tokio::test]
async fn test_identity_for_admin() {
	let router = router();
	let res = call(&router, Method::PUT, "/identity", Caller::Admin).await;

	assert_eq!(res.status, StatusCode::OK);
	assert_eq!(res.body, json!({ "name": "Ada Lovelace", "role": "Admin" }));
}

#[tokio::test]
async fn test_identity_for_user() {
	let router = router();
	let res = call(&router, Method::PUT, "/identity", Caller::User).await;

	assert_eq!(res.status, StatusCode::OK);
	assert_eq!(res.body, json!({ "name": "Grace Hopper", "role": "User" }));
}

#[tokio::test]
async fn test_identity_with_utf8_name() {
	let router = router();
	let utf8 = |value: &str| HeaderValue::from_bytes(value.as_bytes()).expect("header value");
	let req = Request::builder()
		.method(Method::PUT)
		.uri("/identity")
		.header("x-auth-givenname", utf8("José"))
		.header("x-auth-surname", utf8("Müller"))
		.header("x-auth-entitlements", "cn=staff")
		.body(Body::empty())
		.expect("request");
	let res = send(&router, req).await;

	assert_eq!(res.status, StatusCode::OK);
	assert_eq!(res.body, json!({ "name": "José Müller", "role": "User" }));
}

#[tokio::test]
async fn test_identity_requires_principal() {
	let router = router();
	let res = call(&router, Method::PUT, "/identity", Caller::Anonymous).await;

	assert_eq!(res.status, StatusCode::UNAUTHORIZED);
	assert_eq!(res.body["statusText"], "Unauthorized");
}

#[tokio::test]
async fn test_identity_only_answers_put() {
	let router = router();
	let res = call(&router, Method::GET, "/identity", Caller::Admin).await;
	assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_invalid_assertion_is_rejected_everywhere() {
	let router = router();
	let req = Request::builder()
		.uri("/allfeatures")
		.header("x-auth-givenname", "")
		.body(Body::empty())
		.expect("request");
	let res = send(&router, req).await;
	assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_rule_on_directory_writes() {
	let router = router();
	let fields = [("account", "acc-9")];

	let anonymous =
		send(&router, form(Method::POST, "/accounts/identity/bob", Caller::Anonymous, &fields)).await;
	assert_eq!(anonymous.status, StatusCode::UNAUTHORIZED);

	let user = send(&router, form(Method::POST, "/accounts/identity/bob", Caller::User, &fields)).await;
	assert_eq!(user.status, StatusCode::FORBIDDEN);
	assert_eq!(user.body["description"], "Permission denied");

	let admin =
		send(&router, form(Method::POST, "/accounts/identity/bob", Caller::Admin, &fields)).await;
	assert_eq!(admin.status, StatusCode::OK);

	// The rule is limited to POST; reads stay anonymous
	let read = call(&router, Method::GET, "/accounts/identity/bob", Caller::Anonymous).await;
	assert_eq!(read.status, StatusCode::OK);
}

// vim: ts=4
