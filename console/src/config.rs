use std::env::VarError;
use std::path::PathBuf;

use error_stack::Report;
use kernel::KernelError;
use vodca::References;

static LOG_DIR: &str = "CATALOG_LOG_DIR";
static LOG_FILE: &str = "CATALOG_LOG_FILE";
static LOG_FILTER: &str = "RUST_LOG";

const DEFAULT_LOG_DIR: &str = "./logs/";
const DEFAULT_LOG_FILE: &str = "catalog.log";
const DEFAULT_LOG_FILTER: &str = "application=debug,driver=debug,console=debug";

#[derive(Debug, Clone, PartialEq, Eq, References)]
pub struct ConsoleConfig {
    log_dir: PathBuf,
    log_file: String,
    log_filter: String,
}

impl ConsoleConfig {
    /// Reads the process environment after loading `.env`, if there is one.
    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        dotenvy::dotenv().ok();
        for key in [LOG_DIR, LOG_FILE, LOG_FILTER] {
            if let Err(error @ dotenvy::Error::EnvVar(VarError::NotUnicode(_))) = dotenvy::var(key)
            {
                return Err(Report::new(error)
                    .change_context(KernelError::Internal)
                    .attach_printable(format!("{key} is not valid unicode")));
            }
        }
        Ok(Self::resolve(|key| dotenvy::var(key).ok()))
    }

    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_dir: lookup(LOG_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR)),
            log_file: lookup(LOG_FILE).unwrap_or_else(|| DEFAULT_LOG_FILE.into()),
            log_filter: lookup(LOG_FILTER).unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
        }
    }
}
