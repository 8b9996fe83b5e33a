//! Shared setup for integration tests: a fresh temp database plus a mock
//! backend.

use biterec_app::AppContext;
use biterec_domain::{ApiConfig, Config, DatabaseConfig};
use tempfile::TempDir;
use wiremock::MockServer;

pub struct TestContext {
    pub ctx: AppContext,
    pub server: MockServer,
    /// Keep the temporary directory alive for the lifetime of the context.
    pub temp_dir: TempDir,
}

impl TestContext {
    /// Config pointing at this context's database and mock backend, for
    /// building a second context over the same storage.
    #[allow(dead_code)]
    pub fn config(&self) -> Config {
        Config {
            api: ApiConfig { base_url: self.server.uri(), timeout_secs: None },
            database: DatabaseConfig {
                path: self.temp_dir.path().join("biterec.db").to_string_lossy().into_owned(),
                pool_size: 2,
            },
        }
    }
}

/// Create a test context with fresh storage and an empty mock backend.
pub async fn setup_test_context() -> TestContext {
    let temp_dir = TempDir::new().expect("failed to create temporary database directory");
    let server = MockServer::start().await;

    let config = Config {
        api: ApiConfig { base_url: server.uri(), timeout_secs: None },
        database: DatabaseConfig {
            path: temp_dir.path().join("biterec.db").to_string_lossy().into_owned(),
            pool_size: 2,
        },
    };
    let ctx = AppContext::with_config(config).expect("failed to build application context");

    TestContext { ctx, server, temp_dir }
}
