use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::postgres::Postgres;
use usergate::config::{EnvConfig, JwtConfig, CONFIG};
use usergate::db::postgres_service::PostgresService;

pub mod client;

pub struct TestContext {
    pub db: Arc<PostgresService>,
    pub _container: ContainerAsync<Postgres>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        init_test_config();

        let container = Postgres::default()
            .start()
            .await
            .expect("Failed to start postgres container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let db_url = format!("postgresql://postgres:postgres@{}:{}/postgres", host, port);

        let db = Arc::new(
            PostgresService::new(&db_url)
                .await
                .expect("Failed to initialize PostgresService"),
        );

        TestContext {
            db,
            _container: container,
        }
    }
}

pub fn test_jwt() -> JwtConfig {
    JwtConfig {
        admin_secret: "test-admin-secret".to_string(),
        editor_secret: "test-editor-secret".to_string(),
        readonly_secret: "test-readonly-secret".to_string(),
    }
}

/// Process-wide config the auth middleware reads. Safe to call from
/// every test; only the first call wins and they all set the same values.
pub fn init_test_config() {
    let _ = CONFIG.set(EnvConfig {
        port: 8000,
        db_url: "unused-in-tests".to_string(),
        jwt: test_jwt(),
    });
}

// Test data helpers
pub mod test_data {
    use usergate::types::user::RRegister;

    pub fn sample_register() -> RRegister {
        RRegister {
            name: Some("Alice".to_string()),
            email: Some("alice@x.com".to_string()),
            password: Some("secret123".to_string()),
            role: Some("editor".to_string()),
        }
    }

    pub fn register_with(email: &str, role: &str) -> RRegister {
        RRegister {
            name: Some("Test User".to_string()),
            email: Some(email.to_string()),
            password: Some("secret123".to_string()),
            role: Some(role.to_string()),
        }
    }
}
