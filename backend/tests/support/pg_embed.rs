//! Bootstrap helper for embedded PostgreSQL clusters in integration tests.
//!
//! `pg-embed-setup-unpriv` installs binaries and data directories under
//! `/var/tmp` by default, which sandboxed runners refuse to write. Unless the
//! caller already set them, `PG_RUNTIME_DIR` and `PG_DATA_DIR` are pointed at
//! unique directories under the cargo target directory for the duration of
//! the bootstrap. The override is scoped with `env_lock` and serialised so
//! parallel tests cannot observe each other's environment.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use pg_embedded_setup_unpriv::TestCluster;
use uuid::Uuid;

static BOOTSTRAP_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

const BOOTSTRAP_ATTEMPTS: u32 = 3;
const BOOTSTRAP_RETRY_DELAY: Duration = Duration::from_millis(500);

fn target_dir() -> PathBuf {
    std::env::var_os("CARGO_TARGET_DIR").map_or_else(
        || {
            PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("..")
                .join("target")
        },
        PathBuf::from,
    )
}

fn create_unique_dirs() -> Result<(PathBuf, PathBuf), String> {
    let base = target_dir()
        .join("pg-embed")
        .join(Uuid::new_v4().simple().to_string());
    let runtime_dir = base.join("runtime");
    let data_dir = base.join("data");
    for dir in [&runtime_dir, &data_dir] {
        std::fs::create_dir_all(dir)
            .map_err(|err| format!("failed to create {}: {err}", dir.display()))?;
    }
    Ok((runtime_dir, data_dir))
}

/// Bootstraps a fresh embedded cluster, retrying transient failures.
pub fn test_cluster() -> Result<TestCluster, String> {
    let _bootstrap_guard = BOOTSTRAP_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .map_err(|_| "bootstrap lock poisoned".to_string())?;

    let needs_override =
        std::env::var_os("PG_RUNTIME_DIR").is_none() || std::env::var_os("PG_DATA_DIR").is_none();
    let _env_guard = if needs_override {
        let (runtime_dir, data_dir) = create_unique_dirs()?;
        Some(env_lock::lock_env([
            (
                "PG_RUNTIME_DIR",
                Some(runtime_dir.to_string_lossy().into_owned()),
            ),
            ("PG_DATA_DIR", Some(data_dir.to_string_lossy().into_owned())),
        ]))
    } else {
        None
    };

    let mut last_error = String::new();
    for attempt in 1..=BOOTSTRAP_ATTEMPTS {
        match TestCluster::new() {
            Ok(cluster) => return Ok(cluster),
            Err(err) => {
                last_error = format!("{err:?}");
                if attempt < BOOTSTRAP_ATTEMPTS {
                    std::thread::sleep(BOOTSTRAP_RETRY_DELAY);
                }
            }
        }
    }
    Err(format!(
        "embedded cluster bootstrap failed after {BOOTSTRAP_ATTEMPTS} attempts: {last_error}"
    ))
}
