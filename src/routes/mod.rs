use crate::utils::webutils::{validate_admin_token, validate_readonly_token};
use actix_web::{guard, web};
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod login;
pub mod register;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let readonly_auth = HttpAuthentication::bearer(validate_readonly_token);
    let admin_auth = HttpAuthentication::bearer(validate_admin_token);

    cfg.service(web::scope("/register").service(register::register));
    cfg.service(web::scope("/login").service(login::login));
    cfg.service(
        web::scope("/users")
            .service(user::list::list)
            .service(user::get::get_by_id)
            .service(
                web::resource("/{id}")
                    .guard(guard::Delete())
                    .route(web::delete().to(user::delete::delete_user))
                    .wrap(admin_auth),
            ),
    );
    cfg.service(
        web::scope("/test")
            .service(test::test)
            .wrap(readonly_auth),
    );
}
