//! Shared helpers for integration tests.

use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Variables read by `ServerConfig::load`.
pub const CONFIG_VARS: [&str; 5] = [
    "MOVIES_CONFIG",
    "HOST",
    "PORT",
    "CORS_ALLOWED_ORIGIN",
    "MOVIES_SEED_FILE",
];

/// Runs `f` with the configuration variables cleared, then `changes` applied.
///
/// Tests run in parallel and the environment is process-global, so callers
/// are serialized on a lock. The previous values come back on drop, even if
/// `f` panics.
pub fn with_config_env<F, R>(changes: &[(&str, &str)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = lock_env();
    let _guard = EnvSnapshot::take();

    for key in CONFIG_VARS {
        std::env::remove_var(key);
    }
    for (key, value) in changes {
        std::env::set_var(key, value);
    }
    f()
}

// A panicking test poisons the lock; the guard has already restored the env.
fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvSnapshot {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvSnapshot {
    fn take() -> Self {
        let saved = CONFIG_VARS
            .iter()
            .map(|key| (*key, std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvSnapshot {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain(..) {
            match value {
                Some(val) => std::env::set_var(key, val),
                None => std::env::remove_var(key),
            }
        }
    }
}
