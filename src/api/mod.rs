//! API endpoint modules.

pub mod health;
pub mod openapi;
pub mod projects;
pub mod test_cases;
pub mod test_results;
pub mod test_runs;
pub mod users;

use actix_web::web;

use crate::error::AppError;

pub use health::configure_health_routes;
pub use openapi::ApiDoc;
pub use projects::configure_routes as configure_project_routes;
pub use test_cases::configure_routes as configure_test_case_routes;
pub use test_results::configure_routes as configure_test_result_routes;
pub use test_runs::configure_routes as configure_test_run_routes;
pub use users::configure_routes as configure_user_routes;

/// JSON body extraction that reports malformed bodies as `INVALID_INPUT`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into())
}

/// Path extraction that reports unparsable ids as `INVALID_INPUT`.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::InvalidInput(err.to_string()).into())
}

/// Register every API route along with the extractor configuration.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .configure(configure_health_routes)
        .configure(configure_project_routes)
        .configure(configure_user_routes)
        .configure(configure_test_case_routes)
        .configure(configure_test_run_routes)
        .configure(configure_test_result_routes);
}
