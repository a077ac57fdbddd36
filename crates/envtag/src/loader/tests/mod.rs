//! Tests for layered `.env` loading.
//!
//! Responsibilities:
//! - Test merge order across multiple files.
//! - Test read and parse failures and what they leave behind.
//! - Test loading onto the process environment and the default file.
//!
//! Invariants:
//! - Layering tests load into `MemoryEnv` so they never touch process state.
//! - Tests that touch the process environment or cwd use `serial_test` and
//!   `env_lock()`.
//! - Fixture files live in a `TempDir` and are cleaned up automatically.

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::TempDir;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

pub const PRODUCTION: &str = "\
# Production defaults
APP_ENV=production
DEBUG=false
API_URL=https://api.example.com
DB_HOST=db.prod.internal
DB_PORT=5432
DB_USER=prod_user
FEATURE_FLAG_NEW_UI=false
CACHE_TTL=300
LOG_LEVEL=warn
";

pub const DEVELOPMENT: &str = "\
APP_ENV=development
DEBUG=true
API_URL=\"http://localhost:3000/api\"
DB_HOST=localhost   # local postgres
DB_PORT=5432
DB_USER=dev_user
FEATURE_FLAG_NEW_UI=true
CACHE_TTL=60
LOG_LEVEL=debug
";

pub const TEST: &str = "\
APP_ENV=test
DEBUG=true
DB_HOST=test-db
USE_MOCKS=true
TIMEOUT_MS=5000
RETRY_COUNT=3
";

pub const STAGING: &str = "\
APP_ENV=staging
LOG_LEVEL=info
ENABLE_ANALYTICS=true
ANALYTICS_KEY=\"stg-xyz-123\"
MAINTENANCE_MODE=false
";

pub const CI: &str = "\
# Set by the pipeline
APP_ENV=ci
DEBUG=false
RUN_E2E=true
PARALLEL_JOBS=4
GIT_COMMIT_SHA=abcdef123456
CI_PIPELINE_ID=78910
";

/// A temporary directory holding the standard fixture files.
pub struct Fixtures {
    pub dir: TempDir,
}

impl Fixtures {
    pub fn create() -> Self {
        let dir = TempDir::new().unwrap();
        for (name, content) in [
            (".env", PRODUCTION),
            (".env.development", DEVELOPMENT),
            (".env.test", TEST),
            (".env.staging", STAGING),
            (".env.ci", CI),
        ] {
            fs::write(dir.path().join(name), content).unwrap();
        }
        Self { dir }
    }

    /// Writes an extra file into the fixture directory.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, content).unwrap();
        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn paths(&self, names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|name| self.path(name)).collect()
    }
}
