use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

use crate::utils::webutils::validate_token;

pub mod auth;
pub mod health;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let bearer = HttpAuthentication::bearer(validate_token);

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/api/auth")
            .service(auth::register::register)
            .service(auth::login::login)
            .service(
                web::scope("")
                    .wrap(bearer)
                    .service(auth::me::me)
                    .service(auth::logout::logout)
                    .service(auth::refresh::refresh),
            ),
    );
}
