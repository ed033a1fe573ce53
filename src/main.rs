use actix_files::Files;
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;
use chrono::Local;
use env_logger::{Env, Target};
use std::io::Write;
use std::sync::Arc;

use nbfo_backend::{
    config::Config,
    database::{create_pool, run_migrations},
    handlers,
    middlewares::create_cors,
    services::*,
    swagger::swagger_config,
};

fn init_logger() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let config = Config::from_toml().context("loading configuration")?;

    let pool = Arc::new(
        create_pool(&config.database)
            .await
            .context("connecting to the database")?,
    );

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .context("running database migrations")?;
    } else {
        log::info!("migrations disabled, expecting an up-to-date schema");
    }

    let audit_service = AuditService::new(pool.clone());
    let auth_service = AuthService::new(pool.clone(), audit_service.clone());
    let user_service = UserService::new(pool.clone(), audit_service.clone());
    let producer_service = ProducerService::new(pool.clone(), audit_service.clone());
    let validation_service = ValidationService::new(pool.clone(), audit_service.clone());
    let ledger_service = LedgerService::new(pool.clone());
    let lot_service = LotService::new(pool.clone());
    let stock_service = StockService::new(pool.clone());
    let cheque_service = ChequeService::new(pool.clone());
    let message_service = MessageService::new(pool.clone());
    let locality_service = LocalityService::new(pool.clone());

    let web_config = config.web.clone();
    log::info!(
        "Starting HTTP server at {}:{}, serving {}",
        config.server.host,
        config.server.port,
        web_config.static_dir
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors(&web_config.allowed_origins))
            .app_data(web::Data::from(pool.clone()))
            .app_data(web::Data::new(audit_service.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .app_data(web::Data::new(user_service.clone()))
            .app_data(web::Data::new(producer_service.clone()))
            .app_data(web::Data::new(validation_service.clone()))
            .app_data(web::Data::new(ledger_service.clone()))
            .app_data(web::Data::new(lot_service.clone()))
            .app_data(web::Data::new(stock_service.clone()))
            .app_data(web::Data::new(cheque_service.clone()))
            .app_data(web::Data::new(message_service.clone()))
            .app_data(web::Data::new(locality_service.clone()))
            .configure(handlers::extractor_config)
            .configure(swagger_config)
            .configure(handlers::system_config)
            .configure(handlers::auth_config)
            .configure(handlers::user_config)
            .configure(handlers::producer_config)
            .configure(handlers::lot_config)
            .configure(handlers::operation_config)
            .configure(handlers::stock_config)
            .configure(handlers::cheque_config)
            .configure(handlers::message_config)
            .configure(handlers::validation_config)
            .configure(handlers::audit_config)
            .configure(handlers::locality_config)
            // static files last so API routes take precedence
            .service(Files::new("/", &web_config.static_dir).index_file(web_config.index_file.clone()))
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await?;

    Ok(())
}
