use crate::app::commands::SessionCommand;
use crate::app::session::{Outcome, Session};
use crate::core::calculator::FuelCostCalculator;
use crate::core::format::{self, USAGE_INFO_TITLE};
use crate::core::preferences::ThemePreferenceStore;
use crate::domain::model::Theme;
use crate::utils::error::Result;
use std::io::Write;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// 有結果時輸出一行，否則什麼都不輸出
pub fn run_estimate<W: Write>(
    out: &mut W,
    distance: &str,
    efficiency: &str,
    price: &str,
) -> Result<bool> {
    let estimate = FuelCostCalculator::new().estimate(distance, efficiency, price);

    match format::result_line(&estimate) {
        Some(line) => {
            writeln!(out, "{}", line)?;
            Ok(true)
        }
        None => {
            tracing::debug!("Inputs did not produce an estimate");
            Ok(false)
        }
    }
}

pub fn run_info<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", USAGE_INFO_TITLE)?;
    for line in format::usage_info() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

pub fn run_theme_show<W: Write>(out: &mut W, store: &ThemePreferenceStore) -> Result<()> {
    writeln!(out, "{}", store.theme())?;
    Ok(())
}

pub async fn run_theme_set<W: Write>(
    out: &mut W,
    store: &ThemePreferenceStore,
    theme: Theme,
) -> Result<()> {
    store.set_theme(theme).await?;
    writeln!(out, "{}", theme)?;
    Ok(())
}

/// 立即輸出目前主題，之後每次變化輸出一次；`limit` 為 None 時持續執行
pub async fn run_theme_watch<W: Write>(
    out: &mut W,
    store: &ThemePreferenceStore,
    interval: Duration,
    limit: Option<usize>,
) -> Result<()> {
    let mut subscription = store.observe();
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    let mut printed = 0usize;

    if let Some(dark_mode) = subscription.next().await {
        writeln!(out, "{}", Theme::from_dark_mode(dark_mode))?;
        out.flush()?;
        printed += 1;
    }

    while limit.map_or(true, |max| printed < max) {
        tokio::select! {
            next = subscription.next() => {
                let Some(dark_mode) = next else { break };
                writeln!(out, "{}", Theme::from_dark_mode(dark_mode))?;
                out.flush()?;
                printed += 1;
            }
            _ = ticker.tick() => {
                if let Err(e) = store.reload().await {
                    tracing::warn!("⚠️ Failed to re-read settings: {}", e);
                }
            }
        }
    }

    Ok(())
}

/// 逐行讀取指令並在每次指令後重繪畫面；結束前等待所有背景主題寫入
pub async fn run_interactive<R, W>(reader: R, out: &mut W, mut session: Session) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();
    let mut pending_writes = Vec::new();

    render(out, &session)?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match SessionCommand::parse(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "! {} (type 'help')", message)?;
                continue;
            }
        };

        if command == SessionCommand::Help {
            for help in SessionCommand::help_lines() {
                writeln!(out, "  {}", help)?;
            }
            continue;
        }

        match session.apply(command) {
            Outcome::Continue => {}
            Outcome::ThemeWrite(handle) => pending_writes.push(handle),
            Outcome::Rejected(reason) => {
                writeln!(out, "! {}", reason)?;
                continue;
            }
            Outcome::Quit => break,
        }

        render(out, &session)?;
    }

    for handle in pending_writes {
        if let Err(e) = handle.await? {
            tracing::error!("❌ Theme preference was not saved: {}", e);
        }
    }

    Ok(())
}

fn render<W: Write>(out: &mut W, session: &Session) -> Result<()> {
    for line in session.render() {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}
