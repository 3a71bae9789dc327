use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use trip_cost::app::{runner, Session};
use trip_cost::config::{Command, ThemeAction};
use trip_cost::utils::error::ErrorSeverity;
use trip_cost::utils::{logger, validation::Validate};
use trip_cost::{AppConfig, CliConfig, ThemePreferenceStore, TripCostError};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入並驗證配置
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init(
        logger::resolve_level(cli.verbose, config.log_level()),
        config.json_logs(),
    );

    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("Resolved config: {:?}", config);

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn run(command: Command, config: &AppConfig) -> Result<(), TripCostError> {
    let mut stdout = std::io::stdout();

    match command {
        Command::Estimate {
            distance,
            efficiency,
            price,
        } => {
            runner::run_estimate(&mut stdout, &distance, &efficiency, &price)?;
        }
        Command::Info => runner::run_info(&mut stdout)?,
        Command::Theme { action } => {
            let store = open_store(config).await?;
            match action {
                ThemeAction::Show => runner::run_theme_show(&mut stdout, &store)?,
                ThemeAction::Set { theme } => {
                    runner::run_theme_set(&mut stdout, &store, theme).await?
                }
                ThemeAction::Watch { interval_ms } => {
                    let interval = Duration::from_millis(interval_ms.max(1));
                    tokio::select! {
                        result = runner::run_theme_watch(&mut stdout, &store, interval, None) => result?,
                        _ = tokio::signal::ctrl_c() => tracing::info!("👋 Stopped watching"),
                    }
                }
            }
        }
        Command::Interactive => {
            let store = open_store(config).await?;
            let session = Session::new(store);
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            runner::run_interactive(stdin, &mut stdout, session).await?;
        }
    }

    Ok(())
}

async fn open_store(config: &AppConfig) -> Result<ThemePreferenceStore, TripCostError> {
    let storage = config.settings_storage();
    tracing::info!("📁 Settings store: {}", storage.file_path().display());
    ThemePreferenceStore::open(Arc::new(storage)).await
}
