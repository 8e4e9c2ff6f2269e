use std::path::Path;
use std::sync::Arc;

use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpServer, web};
use sqlx::PgPool;
use tokio::task::JoinHandle;
use tracing::info;

use crate::application::post_service::PostService;
use crate::data::post_repository::PostgresPostRepository;
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::database::{create_pool, run_migrations};
use crate::presentation::handlers;
use crate::presentation::middleware::{RequestIdMiddleware, TimingMiddleware};

/// Running server. `start` is the only way to obtain one, so a handle
/// always refers to a store connection and a bound listener.
pub struct ServerHandle {
    pool: PgPool,
    server: actix_web::dev::ServerHandle,
    task: JoinHandle<std::io::Result<()>>,
}

impl ServerHandle {
    /// Closes the store connection, then drains and stops the listener.
    /// Completes only after both have finished.
    pub async fn stop(self) -> anyhow::Result<()> {
        info!("closing server");
        self.pool.close().await;
        self.server.stop(true).await;
        self.task.await??;
        Ok(())
    }
}

/// Connects to the store and binds the HTTP listener. A connection
/// failure never starts the listener; a bind failure tears the pool down
/// before surfacing.
pub async fn start(config: AppConfig) -> anyhow::Result<ServerHandle> {
    let pool = create_pool(&config.database_url).await?;
    if let Err(e) = run_migrations(&pool).await {
        pool.close().await;
        return Err(e.into());
    }

    let service = PostService::new(Arc::new(PostgresPostRepository::new(pool.clone())));
    let bind_address = (config.host.clone(), config.port);
    let factory_config = config.clone();

    let bound = HttpServer::new(move || {
        let cors = build_cors(&factory_config);
        App::new()
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .wrap(TimingMiddleware)
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "no-referrer"))
                    .add(("Permissions-Policy", "geolocation=()"))
                    .add(("Cross-Origin-Opener-Policy", "same-origin")),
            )
            .wrap(cors)
            .app_data(web::Data::new(factory_config.clone()))
            .app_data(web::Data::new(service.clone()))
            .configure(crate::presentation::api_routes)
            .route("/", web::get().to(index))
            .service(Files::new("/static", factory_config.static_dir.clone()))
            .default_service(web::route().to(handlers::not_found))
    })
    .bind((bind_address.0.as_str(), bind_address.1));

    let server = match bound {
        Ok(server) => server.run(),
        Err(e) => {
            pool.close().await;
            return Err(e.into());
        }
    };

    info!("listening on http://{}:{}", bind_address.0, bind_address.1);

    let handle = server.handle();
    let task = tokio::spawn(server);

    Ok(ServerHandle {
        pool,
        server: handle,
        task,
    })
}

async fn index(config: web::Data<AppConfig>) -> actix_web::Result<NamedFile> {
    let path = Path::new(&config.static_dir).join("index.html");
    Ok(NamedFile::open_async(path).await?)
}

fn build_cors(config: &AppConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![actix_web::http::header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600);

    for origin in &config.cors_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
