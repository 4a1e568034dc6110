use std::env;
use std::sync::OnceLock;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: i32,
    pub db_url: String,
    pub jwt: JwtConfig,
}

/// One independent signing secret per role. There is no key hierarchy:
/// an admin token is simply one that verifies under the admin secret.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub admin_secret: String,
    pub editor_secret: String,
    pub readonly_secret: String,
}

impl EnvConfig {
    fn get_env(key: &str) -> String {
        env::var(key).unwrap_or_else(|_| panic!("Environment variable {} not set", key))
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        EnvConfig {
            port: Self::get_env("PORT").parse().unwrap_or(8000),
            db_url: Self::get_env("DATABASE_URL"),
            jwt: JwtConfig {
                admin_secret: Self::get_env("JWT_ADMIN"),
                editor_secret: Self::get_env("JWT_EDITOR"),
                readonly_secret: Self::get_env("JWT_READONLY"),
            },
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get().expect("Not initialized")
}
