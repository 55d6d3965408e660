//! Инициализация журналирования.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Фильтр по умолчанию, если `RUST_LOG` не задан.
pub const DEFAULT_FILTER: &str = "salary_tracker=info";

/// Устанавливает глобальный подписчик `tracing` один раз за процесс.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt};

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Подписчик мог быть установлен вызывающим кодом.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        tracing::debug!("tracing initialized");
    });
}
