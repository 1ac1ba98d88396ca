//! Feature endpoints over HTTP

mod common;

use axum::http::{Method, StatusCode, header};
use serde_json::json;

use common::*;

#[tokio::test]
async fn test_all_features_in_catalog_order() {
	let router = router();
	let res = call(&router, Method::GET, "/allfeatures", Caller::Anonymous).await;

	assert_eq!(res.status, StatusCode::OK);
	assert_eq!(ids(&res.body), ["search", "export", "purge", "reports"]);
	assert_eq!(res.body[0]["title"], "Search");
	assert_eq!(res.body[0]["verbs"], json!({ "get": true, "put": false }));
	assert_eq!(res.body[2]["verbs"], json!({ "delete": ["Admin"] }));
	assert_eq!(
		res.headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
		Some("application/json")
	);
}

#[tokio::test]
async fn test_features_filtered_by_request_verb() {
	let router = router();

	let get = call(&router, Method::GET, "/features", Caller::Anonymous).await;
	assert_eq!(ids(&get.body), ["search", "export"]);

	// export has no `put` entry and falls back to `all`
	let put = call(&router, Method::PUT, "/features", Caller::Anonymous).await;
	assert_eq!(ids(&put.body), ["export"]);

	let post = call(&router, Method::POST, "/features", Caller::Anonymous).await;
	assert_eq!(ids(&post.body), ["export", "reports"]);
}

#[tokio::test]
async fn test_head_features_mirror_get() {
	let router = router();
	let get = call(&router, Method::GET, "/features", Caller::Anonymous).await;
	let head = call(&router, Method::HEAD, "/features", Caller::Anonymous).await;

	assert_eq!(head.status, StatusCode::OK);
	assert_eq!(head.body, serde_json::Value::Null);
	assert!(get.headers.get(header::CONTENT_LENGTH).is_some());
	assert_eq!(head.headers.get(header::CONTENT_LENGTH), get.headers.get(header::CONTENT_LENGTH));
}

#[tokio::test]
async fn test_delete_features_carry_account_count() {
	let router = router();
	let res = call(&router, Method::DELETE, "/features", Caller::Anonymous).await;

	assert_eq!(res.status, StatusCode::OK);
	assert_eq!(ids(&res.body), ["purge"]);
	assert_eq!(res.body[0]["count"], 3);
}

#[tokio::test]
async fn test_empty_delete_list_has_no_count() {
	let router = router_with(
		"entitlement: cn=admins\nfeatures:\n  search:\n    verbs: { get: true }\n",
		directory(),
	);
	let res = call(&router, Method::DELETE, "/features", Caller::Anonymous).await;

	assert_eq!(res.status, StatusCode::OK);
	assert_eq!(res.body, json!([]));
}

#[tokio::test]
async fn test_count_is_not_part_of_other_listings() {
	let router = router();
	let res = call(&router, Method::GET, "/allfeatures", Caller::Anonymous).await;
	assert!(res.body[2].get("count").is_none());
}

#[tokio::test]
async fn test_feature_by_id_for_every_verb() {
	let router = router();
	for method in [Method::GET, Method::PUT, Method::POST, Method::DELETE] {
		let res = call(&router, method.clone(), "/features/reports", Caller::Anonymous).await;
		assert_eq!(res.status, StatusCode::OK, "{}", method);
		assert_eq!(res.body["id"], "reports");
		assert_eq!(res.body["verbs"], json!({ "post": true }));
	}
}

#[tokio::test]
async fn test_unknown_feature_is_not_found() {
	let router = router();
	let res = call(&router, Method::GET, "/features/nope", Caller::Anonymous).await;

	assert_eq!(res.status, StatusCode::NOT_FOUND);
	assert_eq!(
		res.body,
		json!({
			"status": 404,
			"statusText": "Not Found",
			"description": "Resource /features/nope using GET method does not exist."
		})
	);

	let res = call(&router, Method::DELETE, "/features/nope", Caller::Anonymous).await;
	assert_eq!(res.body["description"], "Resource /features/nope using DELETE method does not exist.");
}

#[tokio::test]
async fn test_undecodable_feature_id_is_not_found() {
	let router = router();
	let res = call(&router, Method::GET, "/features/%FF", Caller::Anonymous).await;

	assert_eq!(res.status, StatusCode::NOT_FOUND);
	assert_eq!(
		res.headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
		Some("application/json")
	);
	assert_eq!(res.body["status"], 404);
	assert_eq!(res.body["description"], "Resource /features/%FF using GET method does not exist.");
}

#[tokio::test]
async fn test_feature_ids_are_case_sensitive() {
	let router = router();
	let res = call(&router, Method::GET, "/features/Search", Caller::Anonymous).await;
	assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unmatched_route() {
	let router = router();
	let res = call(&router, Method::GET, "/nope", Caller::Anonymous).await;

	assert_eq!(res.status, StatusCode::NOT_FOUND);
	assert_eq!(res.body["description"], "Resource /nope using GET method does not exist.");
}

#[tokio::test]
async fn test_method_not_allowed() {
	let router = router();
	let res = call(&router, Method::PATCH, "/features", Caller::Anonymous).await;

	assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED);
	assert_eq!(res.body["status"], 405);
	assert_eq!(res.body["statusText"], "Method Not Allowed");
}

// vim: ts=4
