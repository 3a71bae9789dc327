use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LEVEL: &str = "info";
pub const VERBOSE_LEVEL: &str = "debug";

/// `--verbose` 優先於設定檔的 logging.level
pub fn resolve_level(verbose: bool, configured: Option<&str>) -> &str {
    if verbose {
        VERBOSE_LEVEL
    } else {
        configured.unwrap_or(DEFAULT_LEVEL)
    }
}

fn filter_for(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("trip_cost={}", level.to_ascii_lowercase())))
}

/// 終端機用 compact 格式，`json` 時輸出 JSON 方便交給日誌收集器
pub fn init(level: &str, json: bool) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let registry = tracing_subscriber::registry().with(filter_for(level));

    if json {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer.compact()).init();
    }
}
