use axum::routing::get;
use axum::Router;

use crate::AppState;

pub mod autocomplete;
pub mod key;
pub mod places;
pub mod status;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/places", get(places::nearby))
        .route("/api/places/within", get(places::within))
        .route("/api/autocomplete", get(autocomplete::autocomplete))
        .route("/api/google-maps-key", get(key::google_maps_key))
        .route("/api/v1/status", get(status::status))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::net::{SocketAddr, TcpListener};

    use axum::body::Body;
    use axum::extract::Query;
    use axum::Json;
    use http::{Request, StatusCode};
    use serde_json::{json, Value};
    use speculoos::prelude::*;
    use tower::ServiceExt;

    use places_client::{GooglePlacesClient, PlacesApiConfig};

    use super::*;
    use crate::settings::Settings;

    /// Stand-in for the places API, echoing the query parameters it got.
    fn serve_upstream() -> SocketAddr {
        let upstream = Router::new()
            .route(
                "/place/nearbysearch/json",
                get(|Query(params): Query<HashMap<String, String>>| async move {
                    Json(json!({
                        "html_attributions": [],
                        "params": params,
                        "results": [
                            { "name": "inside", "geometry": { "location": { "lat": 40.72, "lng": -73.98 } } },
                            { "name": "outside", "geometry": { "location": { "lat": 40.80, "lng": -73.98 } } }
                        ],
                        "status": "OK"
                    }))
                }),
            )
            .route(
                "/place/autocomplete/json",
                get(|Query(params): Query<HashMap<String, String>>| async move {
                    Json(json!({
                        "predictions": [{ "description": params.get("input") }],
                        "status": "OK"
                    }))
                }),
            );

        let listener = TcpListener::bind("127.0.0.1:0").expect("bind upstream");
        let addr = listener.local_addr().expect("upstream address");
        let server = axum::Server::from_tcp(listener)
            .expect("upstream server")
            .serve(upstream.into_make_service());
        tokio::spawn(server);
        addr
    }

    fn app(upstream: SocketAddr) -> Router {
        let mut places_api = PlacesApiConfig::default().with_key("server-key");
        places_api.url = format!("http://{upstream}/place");
        let settings = Settings {
            places_api: places_api.clone(),
            ..Default::default()
        };
        let client = GooglePlacesClient::new(places_api).expect("client");
        router(AppState { client, settings })
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn should_proxy_nearby_search() {
        let app = app(serve_upstream());

        let (status, body) =
            get_json(app, "/api/places?center=40.7,-74.01&radius=1000&keyword=deli").await;

        assert_that!(status).is_equal_to(StatusCode::OK);
        assert_that!(body["params"]["location"]).is_equal_to(json!("40.7,-74.01"));
        assert_that!(body["params"]["radius"]).is_equal_to(json!("1000"));
        assert_that!(body["params"]["keyword"]).is_equal_to(json!("deli"));
        assert_that!(body["params"]["key"]).is_equal_to(json!("server-key"));
        assert_that!(body["results"].as_array().map(Vec::len)).is_equal_to(Some(2));
    }

    #[tokio::test]
    async fn should_use_configured_radius_by_default() {
        let app = app(serve_upstream());

        let (_, body) = get_json(app, "/api/places?center=40.7,-74.01").await;

        assert_that!(body["params"]["radius"]).is_equal_to(json!("50000"));
        assert_that!(body["params"].get("keyword")).is_none();
    }

    #[tokio::test]
    async fn should_reject_malformed_center() {
        let app = app(serve_upstream());

        let (status, body) = get_json(app, "/api/places?center=somewhere").await;

        assert_that!(status).is_equal_to(StatusCode::BAD_REQUEST);
        assert_that!(body["error"].is_string()).is_true();
    }

    #[tokio::test]
    async fn should_filter_places_within_box() {
        let app = app(serve_upstream());

        let (status, body) = get_json(
            app,
            "/api/places/within?southwest_lat=40.70&southwest_lng=-74.01&northeast_lat=40.75&northeast_lng=-73.95",
        )
        .await;

        assert_that!(status).is_equal_to(StatusCode::OK);
        assert_that!(body).is_equal_to(json!([
            { "name": "inside", "geometry": { "location": { "lat": 40.72, "lng": -73.98 } } }
        ]));
    }

    #[tokio::test]
    async fn should_reject_out_of_range_box() {
        let app = app(serve_upstream());

        let (status, _) = get_json(
            app,
            "/api/places/within?southwest_lat=-95&southwest_lng=-74.01&northeast_lat=40.75&northeast_lng=-73.95",
        )
        .await;

        assert_that!(status).is_equal_to(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_answer_500_when_places_api_is_down() {
        let down = TcpListener::bind("127.0.0.1:0")
            .and_then(|listener| listener.local_addr())
            .unwrap();
        let app = app(down);

        let (status, body) = get_json(app, "/api/places?center=40.7,-74.01").await;

        assert_that!(status).is_equal_to(StatusCode::INTERNAL_SERVER_ERROR);
        assert_that!(body["error"].is_string()).is_true();
    }

    #[tokio::test]
    async fn should_proxy_autocomplete() {
        let app = app(serve_upstream());

        let (status, body) = get_json(app, "/api/autocomplete?input=Central%20Pa").await;

        assert_that!(status).is_equal_to(StatusCode::OK);
        assert_that!(body["predictions"][0]["description"]).is_equal_to(json!("Central Pa"));
    }

    #[tokio::test]
    async fn should_expose_key_and_status() {
        let upstream = serve_upstream();

        let (_, key) = get_json(app(upstream), "/api/google-maps-key").await;
        assert_that!(key).is_equal_to(json!({ "googleMapsApiKey": "server-key" }));

        let (status, body) = get_json(app(upstream), "/api/v1/status").await;
        assert_that!(status).is_equal_to(StatusCode::OK);
        assert_that!(body["places_api"]["radius"]).is_equal_to(json!(50_000));
    }
}
