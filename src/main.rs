pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::catalog;
pub use modules::comment;
pub use modules::email;
pub use modules::review;

use crate::auth::adapter::outgoing::confirmation_code_repository_postgres::ConfirmationCodeRepositoryPostgres;
use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::adapter::outgoing::security::random_code_generator::RandomCodeGenerator;
use crate::auth::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::auth::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::auth::application::auth_use_cases::{AuthUseCases, UserUseCases};
use crate::auth::application::ports::outgoing::{TokenProvider, UserQuery, UserRepository};
use crate::auth::application::services::confirmation::{
    parse_flag, ConfirmationConfig, ConfirmationRegistry,
};

use crate::catalog::adapter::outgoing::{
    title_query_postgres::TitleQueryPostgres, title_repository_postgres::TitleRepositoryPostgres,
    vocabulary_query_postgres::VocabularyQueryPostgres,
    vocabulary_repository_postgres::VocabularyRepositoryPostgres,
};
use crate::catalog::application::catalog_use_cases::CatalogUseCases;
use crate::comment::adapter::outgoing::{
    comment_query_postgres::CommentQueryPostgres,
    comment_repository_postgres::CommentRepositoryPostgres,
};
use crate::comment::application::comment_use_cases::CommentUseCases;
use crate::review::adapter::outgoing::{
    review_query_postgres::ReviewQueryPostgres, review_repository_postgres::ReviewRepositoryPostgres,
};
use crate::review::application::review_use_cases::ReviewUseCases;

use crate::api::openapi::ApiDoc;
use crate::email::adapter::outgoing::mock_sender::MockEmailSender;
use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::ports::outgoing::EmailSender;
use crate::email::application::services::ConfirmationEmailService;
use crate::shared::api::{custom_json_config, custom_query_config};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub users: UserUseCases,
    pub catalog: CatalogUseCases,
    pub reviews: ReviewUseCases,
    pub comments: CommentUseCases,
    /// Loads the caller for every authenticated request.
    pub user_query: Arc<dyn UserQuery + Send + Sync>,
}

#[cfg(not(tarpaulin_include))]
fn email_sender_from_env() -> anyhow::Result<Arc<dyn EmailSender + Send + Sync>> {
    let from_email = env::var("EMAIL_FROM").context("EMAIL_FROM not set")?;

    if env::var("RUST_ENV").as_deref() == Ok("test") {
        // Local Mailpit
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port: u16 = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "1025".to_string())
            .parse()
            .context("Invalid SMTP_PORT")?;
        return Ok(Arc::new(SmtpEmailSender::new_local(&host, port, &from_email)));
    }

    match env::var("SMTP_SERVER") {
        Ok(smtp_server) => {
            let smtp_user = env::var("SMTP_USERNAME").context("SMTP_USERNAME not set")?;
            let smtp_pass = env::var("SMTP_PASSWORD").context("SMTP_PASSWORD not set")?;
            let sender = SmtpEmailSender::new(&smtp_server, &smtp_user, &smtp_pass, &from_email)
                .map_err(anyhow::Error::msg)
                .context("Failed to build SMTP transport")?;
            Ok(Arc::new(sender))
        }
        Err(_) => {
            warn!("SMTP_SERVER not set, confirmation emails are only logged");
            Ok(Arc::new(MockEmailSender::new()))
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL is not set in .env file")?;
    let host = env::var("HOST").context("HOST is not set in .env file")?;
    let port = env::var("PORT").context("PORT is not set in .env file")?;

    let email_sender = email_sender_from_env()?;
    let html_emails = env::var("EMAIL_HTML_ENABLED")
        .map(|v| parse_flag(&v))
        .unwrap_or(false);

    let server_url = format!("{host}:{port}");
    info!(server_url = %server_url, environment = %env_name, "Server configured");

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    let db_arc = Arc::new(conn);

    // Identity
    let jwt_service = JwtTokenService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let user_query: Arc<dyn UserQuery + Send + Sync> =
        Arc::new(UserQueryPostgres::new(Arc::clone(&db_arc)));
    let user_repo: Arc<dyn UserRepository + Send + Sync> =
        Arc::new(UserRepositoryPostgres::new(Arc::clone(&db_arc)));

    let registry = ConfirmationRegistry::new(
        Arc::new(ConfirmationCodeRepositoryPostgres::new(Arc::clone(&db_arc))),
        Arc::new(RandomCodeGenerator),
        ConfirmationConfig::from_env(),
    );
    let notifier = Arc::new(ConfirmationEmailService::new(email_sender, html_emails));

    let state = AppState {
        auth: AuthUseCases::new(
            registry,
            notifier,
            Arc::clone(&user_query),
            Arc::clone(&user_repo),
            Arc::clone(&token_provider_arc),
        ),
        users: UserUseCases::new(Arc::clone(&user_query), user_repo),
        catalog: CatalogUseCases::from_ports(
            VocabularyRepositoryPostgres::new(Arc::clone(&db_arc)),
            VocabularyQueryPostgres::new(Arc::clone(&db_arc)),
            TitleRepositoryPostgres::new(Arc::clone(&db_arc)),
            TitleQueryPostgres::new(Arc::clone(&db_arc)),
        ),
        reviews: ReviewUseCases::from_ports(
            ReviewRepositoryPostgres::new(Arc::clone(&db_arc)),
            ReviewQueryPostgres::new(Arc::clone(&db_arc)),
        ),
        comments: CommentUseCases::from_ports(
            CommentRepositoryPostgres::new(Arc::clone(&db_arc)),
            CommentQueryPostgres::new(Arc::clone(&db_arc)),
        ),
        user_query,
    };

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::catalog::adapter::incoming::web::routes as catalog_routes;
    use crate::comment::adapter::incoming::web::routes as comment_routes;
    use crate::review::adapter::incoming::web::routes as review_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth_routes::request_code_handler);
    cfg.service(auth_routes::obtain_token_handler);
    // Users: `me` before `{username}`
    cfg.service(auth_routes::get_own_profile_handler);
    cfg.service(auth_routes::update_own_profile_handler);
    cfg.service(auth_routes::list_users_handler);
    cfg.service(auth_routes::create_user_handler);
    cfg.service(auth_routes::get_user_handler);
    cfg.service(auth_routes::update_user_handler);
    cfg.service(auth_routes::delete_user_handler);
    // Categories & genres
    cfg.service(catalog_routes::list_categories_handler);
    cfg.service(catalog_routes::create_category_handler);
    cfg.service(catalog_routes::delete_category_handler);
    cfg.service(catalog_routes::category_detail_not_allowed);
    cfg.service(catalog_routes::list_genres_handler);
    cfg.service(catalog_routes::create_genre_handler);
    cfg.service(catalog_routes::delete_genre_handler);
    cfg.service(catalog_routes::genre_detail_not_allowed);
    // Titles
    cfg.service(catalog_routes::get_titles_handler);
    cfg.service(catalog_routes::create_title_handler);
    cfg.service(catalog_routes::get_title_handler);
    cfg.service(catalog_routes::replace_title_handler);
    cfg.service(catalog_routes::patch_title_handler);
    cfg.service(catalog_routes::delete_title_handler);
    // Reviews
    cfg.service(review_routes::get_reviews_handler);
    cfg.service(review_routes::create_review_handler);
    cfg.service(review_routes::get_review_handler);
    cfg.service(review_routes::replace_review_handler);
    cfg.service(review_routes::patch_review_handler);
    cfg.service(review_routes::delete_review_handler);
    // Comments
    cfg.service(comment_routes::get_comments_handler);
    cfg.service(comment_routes::create_comment_handler);
    cfg.service(comment_routes::get_comment_handler);
    cfg.service(comment_routes::replace_comment_handler);
    cfg.service(comment_routes::patch_comment_handler);
    cfg.service(comment_routes::delete_comment_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
