use actix_web::{middleware, App, HttpServer};
use math_server::{api::configure_routes, banner, config::AppConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    banner::print_banner();

    // .env is optional; plain environment variables work just as well
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("⚠️  Warning: Could not load .env file: {}", e);
        }
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let (host, port) = app_config.bind_address();
    log::info!("Running server on {}:{}", host, port);

    let mut server = HttpServer::new(|| {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    });
    if let Some(workers) = app_config.workers {
        server = server.workers(workers);
    }

    let server = server.bind((host.as_str(), port)).map_err(|e| {
        log::error!("Error running server: {}", e);
        e
    })?;

    server.run().await
}
