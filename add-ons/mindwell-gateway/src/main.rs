//! Axum-based HTTP gateway for the companion backend. Config-driven via CoreConfig.

mod handlers;

use axum::http::{HeaderValue, Method};
use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use mindwell_core::{CoreConfig, CredentialPolicy};
use mindwell_skills::{MoodAnalyzer, WellnessPlanner};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Pre-flight check: config loads, credential admissibility per handler, port is free.
fn run_verify() -> Result<(), String> {
    let config = CoreConfig::load().map_err(|e| format!("Config load failed: {}", e))?;
    println!("Config loaded: {} (model {})", config.app_name, config.llm_model);

    let credential = config.credential();
    for (label, policy) in [
        ("mood analysis", CredentialPolicy::Guidance),
        ("wellness plan", CredentialPolicy::StructuredPlan),
    ] {
        let mode = if policy.admits(credential) { "live backend" } else { "static fallback" };
        println!("Checking {} credential... {}", label, mode);
    }

    let port = config.port;
    print!("Checking port {}... ", port);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], port));
    match std::net::TcpListener::bind(addr) {
        Ok(listener) => {
            drop(listener);
            println!("OK (available)");
        }
        Err(e) => {
            return Err(format!("Port {} BLOCKED: {}", port, e));
        }
    }

    println!("\nAll checks passed. Ready to start gateway.");
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load .env file if present (before any env::var calls)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("[mindwell-gateway] .env not loaded: {} (using system environment)", e);
    }

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--verify") {
        match run_verify() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("PRE-FLIGHT FAILED: {}", e);
                std::process::exit(1);
            }
        }
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match CoreConfig::load() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            tracing::error!(target: "mindwell::gateway", error = %e, "Config load failed");
            std::process::exit(1);
        }
    };

    let state = AppState {
        config: Arc::clone(&config),
        mood_analyzer: Arc::new(MoodAnalyzer::from_config(&config)),
        planner: Arc::new(WellnessPlanner::from_config(&config)),
    };
    tracing::info!(
        target: "mindwell::gateway",
        mood_backend = state.mood_analyzer.has_backend(),
        plan_backend = state.planner.has_backend(),
        "Generation backends resolved"
    );

    let app = build_app(state);
    let addr = std::net::SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(target: "mindwell::gateway", error = %e, "Bind {} failed", addr);
            std::process::exit(1);
        }
    };
    tracing::info!("{} listening on {}", config.app_name, addr);
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(target: "mindwell::gateway", error = %e, "Server error");
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(target: "mindwell::gateway", error = %e, "Ctrl-C handler failed");
        std::future::pending::<()>().await;
    }
    tracing::info!(target: "mindwell::gateway", "Shutting down");
}

/// `http://localhost:3000` and `http://127.0.0.1:8080` style origins.
fn is_localhost_origin(origin: &str) -> bool {
    let rest = origin.split_once("://").map(|(_, r)| r).unwrap_or(origin);
    let host = rest.split(':').next().unwrap_or(rest);
    host == "localhost" || host == "127.0.0.1"
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    // Empty list: any localhost origin (local web client during development).
    let allow_origin = if origins.is_empty() {
        AllowOrigin::predicate(|origin: &HeaderValue, _| {
            origin.to_str().map(is_localhost_origin).unwrap_or(false)
        })
    } else {
        AllowOrigin::list(origins.iter().filter_map(|o| o.parse::<HeaderValue>().ok()))
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

fn build_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.frontend_origins);

    let api = Router::new()
        .route("/mood-analysis", post(handlers::mood::mood_analysis))
        .route("/wellness-plan", post(handlers::wellness::wellness_plan))
        .route("/crisis-resources", get(handlers::resources::crisis_resources_handler))
        .route("/v1/health", get(health));

    Router::new()
        .route("/v1/status", get(status))
        .nest("/api", api)
        .with_state(state)
        .layer(cors)
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Arc<CoreConfig>,
    pub(crate) mood_analyzer: Arc<MoodAnalyzer>,
    pub(crate) planner: Arc<WellnessPlanner>,
}

/// GET /api/v1/health – liveness check for UI and scripts.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}

/// GET /v1/status – app identity and which handlers will call the live backend.
async fn status(State(state): State<AppState>) -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "app_name": state.config.app_name,
        "port": state.config.port,
        "llm_model": state.config.llm_model,
        "backends": {
            "mood_analysis": state.mood_analyzer.has_backend(),
            "wellness_plan": state.planner.has_backend(),
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use mindwell_core::{
        fallback_plans, mood_response, ActivityCategory, MoodLevel, WellnessPlan,
        GENERIC_SUPPORT_MESSAGE,
    };
    use std::collections::HashSet;
    use tower::ServiceExt;

    fn test_config() -> CoreConfig {
        CoreConfig {
            app_name: "Test Gateway".to_string(),
            port: 8001,
            llm_api_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            llm_model: "gpt-4".to_string(),
            request_timeout_secs: 1,
            frontend_origins: Vec::new(),
            openai_api_key: None,
        }
    }

    /// App with no credential: every request takes the static path.
    fn test_app() -> Router {
        let config = test_config();
        build_app(AppState {
            mood_analyzer: Arc::new(MoodAnalyzer::from_config(&config)),
            planner: Arc::new(WellnessPlanner::from_config(&config)),
            config: Arc::new(config),
        })
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(res: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_ok() {
        let req = Request::builder().uri("/api/v1/health").body(Body::empty()).unwrap();
        let res = test_app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_status_reports_identity_and_fallback_mode() {
        let req = Request::builder().uri("/v1/status").body(Body::empty()).unwrap();
        let res = test_app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = json_body(res).await;
        assert_eq!(json["app_name"], "Test Gateway");
        assert_eq!(json["llm_model"], "gpt-4");
        assert_eq!(json["backends"]["mood_analysis"], false);
        assert_eq!(json["backends"]["wellness_plan"], false);
    }

    #[tokio::test]
    async fn test_mood_analysis_crisis_scenario_without_credential() {
        let body = serde_json::json!({
            "mood": 1,
            "description": "I feel hopeless and there's no point",
            "previousMoods": []
        });
        let res = test_app()
            .oneshot(post_json("/api/mood-analysis", body.to_string()))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = json_body(res).await;
        assert_eq!(json["response"], mood_response(MoodLevel::VerySad));
        assert_eq!(json["isCrisis"], true);
        assert!(json["timestamp"].as_str().is_some_and(|t| t.ends_with('Z')));
    }

    #[tokio::test]
    async fn test_mood_analysis_good_day_scenario_without_credential() {
        let body = serde_json::json!({ "mood": 4, "description": "pretty good day" });
        let res = test_app()
            .oneshot(post_json("/api/mood-analysis", body.to_string()))
            .await
            .unwrap();
        let json = json_body(res).await;
        assert_eq!(json["response"], mood_response(MoodLevel::Good));
        assert_eq!(json["isCrisis"], false);
    }

    #[tokio::test]
    async fn test_mood_analysis_out_of_range_uses_neutral() {
        let body = serde_json::json!({ "mood": 42 });
        let res = test_app()
            .oneshot(post_json("/api/mood-analysis", body.to_string()))
            .await
            .unwrap();
        let json = json_body(res).await;
        assert_eq!(json["response"], mood_response(MoodLevel::Neutral));
        assert_eq!(json["isCrisis"], false);
    }

    #[tokio::test]
    async fn test_mood_analysis_malformed_body_is_generic_success() {
        for body in ["{not json", r#"{"mood": 2, "description": 17}"#, r#""just a string""#] {
            let res = test_app()
                .oneshot(post_json("/api/mood-analysis", body.to_string()))
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK, "body: {}", body);
            let json = json_body(res).await;
            assert_eq!(json["response"], GENERIC_SUPPORT_MESSAGE);
            assert_eq!(json["isCrisis"], false);
        }
    }

    fn post_with_content_type(uri: &str, content_type: Option<&str>, body: &str) -> Request<Body> {
        let builder = Request::builder().method("POST").uri(uri);
        let builder = match content_type {
            Some(ct) => builder.header("content-type", ct),
            None => builder,
        };
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_mood_analysis_reads_json_body_regardless_of_content_type() {
        let body = r#"{"mood": 1, "description": "I feel hopeless and there's no point"}"#;
        for content_type in [None, Some("text/plain;charset=UTF-8")] {
            let res = test_app()
                .oneshot(post_with_content_type("/api/mood-analysis", content_type, body))
                .await
                .unwrap();
            assert_eq!(res.status(), StatusCode::OK, "content-type: {:?}", content_type);
            let json = json_body(res).await;
            assert_eq!(json["response"], mood_response(MoodLevel::VerySad));
            assert_eq!(json["isCrisis"], true, "content-type: {:?}", content_type);
        }
    }

    #[tokio::test]
    async fn test_mood_analysis_tolerates_odd_history_entries() {
        let body = serde_json::json!({
            "mood": 2,
            "description": "can't go on like this",
            "previousMoods": [null, true, 3]
        });
        let res = test_app()
            .oneshot(post_json("/api/mood-analysis", body.to_string()))
            .await
            .unwrap();
        let json = json_body(res).await;
        assert_eq!(json["response"], mood_response(MoodLevel::Sad));
        assert_eq!(json["isCrisis"], true);
    }

    #[tokio::test]
    async fn test_wellness_plan_reads_text_plain_body() {
        let res = test_app()
            .oneshot(post_with_content_type(
                "/api/wellness-plan",
                Some("text/plain"),
                r#"{"moods": [3, 4], "goals": "sleep better"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let plan: WellnessPlan = serde_json::from_value(json_body(res).await).unwrap();
        assert!(fallback_plans().contains(&plan));
    }

    #[tokio::test]
    async fn test_wellness_plan_without_credential_returns_fallback_member() {
        let body = serde_json::json!({
            "moods": ["neutral", "good"],
            "preferences": "mindfulness and light exercise",
            "goals": "reduce stress and improve sleep",
            "timestamp": 1_700_000_000_000_i64
        });
        let res = test_app()
            .oneshot(post_json("/api/wellness-plan", body.to_string()))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = json_body(res).await;
        assert_eq!(json["activities"].as_array().map(Vec::len), Some(5));
        assert!(json["activities"][0]["duration"].as_str().is_some());

        let plan: WellnessPlan = serde_json::from_value(json).unwrap();
        assert!(fallback_plans().contains(&plan));
        assert_eq!(plan.goals.len(), 3);
        assert!(!plan.affirmation.is_empty());
        let categories: HashSet<ActivityCategory> = plan.activities.iter().map(|a| a.category).collect();
        assert_eq!(categories.len(), 5);
    }

    #[tokio::test]
    async fn test_wellness_plan_malformed_body_still_returns_plan() {
        let res = test_app()
            .oneshot(post_json("/api/wellness-plan", "{\"moods\": 3".to_string()))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let plan: WellnessPlan = serde_json::from_value(json_body(res).await).unwrap();
        assert!(fallback_plans().contains(&plan));
    }

    #[tokio::test]
    async fn test_crisis_resources_lists_hotlines() {
        let req = Request::builder().uri("/api/crisis-resources").body(Body::empty()).unwrap();
        let res = test_app().oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json = json_body(res).await;
        assert_eq!(json["contacts"][0]["number"], "988");
        assert_eq!(json["contacts"][0]["type"], "call");
        assert_eq!(json["strategies"][1]["title"], "Box Breathing");
    }

    #[tokio::test]
    async fn test_cors_allows_localhost_origin() {
        let req = Request::builder()
            .uri("/api/v1/health")
            .header("origin", "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let res = test_app().oneshot(req).await.unwrap();
        assert_eq!(
            res.headers().get("access-control-allow-origin").and_then(|v| v.to_str().ok()),
            Some("http://localhost:3000")
        );
    }

    #[test]
    fn test_is_localhost_origin() {
        assert!(is_localhost_origin("http://localhost:3000"));
        assert!(is_localhost_origin("http://127.0.0.1:8080"));
        assert!(is_localhost_origin("http://localhost"));
        assert!(!is_localhost_origin("https://example.com"));
        assert!(!is_localhost_origin("http://localhost.evil.com:3000"));
    }
}
