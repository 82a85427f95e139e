//! Static file server for the output directory (JSON snapshots and the viewer page).

use actix_files::Files;
use actix_web::{get, App, HttpResponse, HttpServer, Responder};
use std::path::PathBuf;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: env!("CARGO_PKG_NAME"),
    })
}

/// Avoid 404 in browser tab: favicon not required for the viewer.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Serve `dir` on `host:port` until the process is stopped.
pub async fn serve(dir: PathBuf, host: &str, port: u16) -> std::io::Result<()> {
    log::info!("Serving {} at http://{}:{}", dir.display(), host, port);
    HttpServer::new(move || {
        App::new()
            .service(api_health)
            .service(favicon)
            .service(Files::new("/", dir.clone()).index_file("index.html"))
    })
    .bind((host, port))?
    .run()
    .await
}
