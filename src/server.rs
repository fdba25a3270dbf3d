use axum::{routing::post, Router, Json};
use crate::data::{Domain, SchedulingOutput, SchedulingRequest};
use crate::solver;

async fn solve_handler(Json(request): Json<SchedulingRequest>) -> Result<Json<SchedulingOutput>, (axum::http::StatusCode, String)> {
    match Domain::from_request(&request) {
        Ok(domain) => Ok(Json(solver::solve(&domain))),
        Err(e) => Err((axum::http::StatusCode::BAD_REQUEST, e)),
    }
}

pub async fn run_server() {
    let app = Router::new()
        .route("/v1/schedule/solve", post(solve_handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080")
        .await
        .unwrap();

    println!("Server running at http://{}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
