//! Shared backend constructor for all platforms.
//!
//! Returns the [`store::Backend`] the screens talk to:
//! - **Web** (WASM + `web` feature): the hosted project via [`api::SupabaseBackend`],
//!   configured from the `WILDOASIS_*` variables present at build time
//! - **Everywhere else**: a seeded [`store::MemoryBackend`], so the screens
//!   can be exercised without a hosted project
//!
//! One backend (and one session) exists per thread; every call returns a
//! cheap clone of it.

use store::AppConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppBackend = api::SupabaseBackend;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppBackend = store::MemoryBackend;

thread_local! {
    static CONFIG: AppConfig = load_config();
    static BACKEND: AppBackend = build_backend();
}

/// The configuration the app was started with.
pub fn app_config() -> AppConfig {
    CONFIG.with(Clone::clone)
}

/// The platform's backend. All clones share the same session.
pub fn make_backend() -> AppBackend {
    BACKEND.with(Clone::clone)
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn load_config() -> AppConfig {
    use store::config::{ENV_ANON_KEY, ENV_BACKEND_URL, ENV_IMAGE_BUCKET};

    let mut config = AppConfig::default();
    config.apply_overrides(|key| {
        let value = match key {
            ENV_BACKEND_URL => option_env!("WILDOASIS_BACKEND_URL"),
            ENV_ANON_KEY => option_env!("WILDOASIS_ANON_KEY"),
            ENV_IMAGE_BUCKET => option_env!("WILDOASIS_IMAGE_BUCKET"),
            _ => None,
        };
        value.map(str::to_string)
    });
    config
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn load_config() -> AppConfig {
    let mut config = std::fs::read_to_string(AppConfig::filename())
        .ok()
        .and_then(|text| match AppConfig::from_toml(&text) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!("Ignoring invalid {}: {}", AppConfig::filename(), e);
                None
            }
        })
        .unwrap_or_default();
    config.apply_env();
    config
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn build_backend() -> AppBackend {
    let config = app_config().backend;
    if !config.is_configured() {
        tracing::error!(
            "Backend is not configured; set WILDOASIS_BACKEND_URL and WILDOASIS_ANON_KEY at build time"
        );
    }
    api::SupabaseBackend::new(config)
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn build_backend() -> AppBackend {
    tracing::info!("Using the in-memory backend with demo data");
    store::MemoryBackend::seeded()
}
