use crate::app::commands::SessionCommand;
use crate::app::navigation::{Navigator, Route};
use crate::core::calculator::FuelCostCalculator;
use crate::core::format::{self, USAGE_INFO_TITLE};
use crate::core::preferences::ThemePreferenceStore;
use crate::domain::model::{CostEstimate, Theme};
use tokio::task::JoinHandle;

use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorField {
    Distance,
    Efficiency,
    PricePerLiter,
}

impl EstimatorField {
    pub fn label(self) -> &'static str {
        match self {
            EstimatorField::Distance => "Distance (km)",
            EstimatorField::Efficiency => "Fuel Efficiency (km/L)",
            EstimatorField::PricePerLiter => "Fuel Price (per Litre)",
        }
    }
}

/// 估算畫面的表單狀態，離開畫面即丟棄
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimatorForm {
    pub distance: String,
    pub efficiency: String,
    pub price_per_liter: String,
    pub total_cost: CostEstimate,
}

impl EstimatorForm {
    pub fn set(&mut self, field: EstimatorField, value: impl Into<String>) {
        let value = value.into();
        match field {
            EstimatorField::Distance => self.distance = value,
            EstimatorField::Efficiency => self.efficiency = value,
            EstimatorField::PricePerLiter => self.price_per_liter = value,
        }
    }

    pub fn get(&self, field: EstimatorField) -> &str {
        match field {
            EstimatorField::Distance => &self.distance,
            EstimatorField::Efficiency => &self.efficiency,
            EstimatorField::PricePerLiter => &self.price_per_liter,
        }
    }

    /// 每次計算都取代上一次的結果
    pub fn calculate(&mut self, calculator: &FuelCostCalculator) -> CostEstimate {
        self.total_cost =
            calculator.estimate(&self.distance, &self.efficiency, &self.price_per_liter);
        self.total_cost
    }
}

/// 一次互動工作階段：導覽、表單與兩個對話框的可見狀態
#[derive(Debug)]
pub struct Session {
    navigator: Navigator,
    form: EstimatorForm,
    info_dialog_visible: bool,
    theme_dialog_visible: bool,
    calculator: FuelCostCalculator,
    preferences: ThemePreferenceStore,
}

/// `apply` 的結果
#[derive(Debug)]
pub enum Outcome {
    Continue,
    /// 背景寫入主題，呼叫端不必等待
    ThemeWrite(JoinHandle<Result<()>>),
    Rejected(String),
    Quit,
}

impl Session {
    pub fn new(preferences: ThemePreferenceStore) -> Self {
        Self {
            navigator: Navigator::new(),
            form: EstimatorForm::default(),
            info_dialog_visible: false,
            theme_dialog_visible: false,
            calculator: FuelCostCalculator::new(),
            preferences,
        }
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn form(&self) -> &EstimatorForm {
        &self.form
    }

    pub fn info_dialog_visible(&self) -> bool {
        self.info_dialog_visible
    }

    pub fn theme_dialog_visible(&self) -> bool {
        self.theme_dialog_visible
    }

    pub fn theme(&self) -> Theme {
        self.preferences.theme()
    }

    pub fn open_estimator(&mut self) {
        self.form = EstimatorForm::default();
        self.info_dialog_visible = false;
        self.navigator.navigate(Route::FuelEstimator);
    }

    pub fn back(&mut self) -> bool {
        let popped = self.navigator.pop();
        if popped && self.route() == Route::Home {
            self.form = EstimatorForm::default();
            self.info_dialog_visible = false;
        }
        popped
    }

    /// 只在估算畫面有效
    pub fn set_field(&mut self, field: EstimatorField, value: impl Into<String>) -> bool {
        if self.route() != Route::FuelEstimator {
            return false;
        }
        self.form.set(field, value);
        true
    }

    pub fn calculate(&mut self) -> Option<CostEstimate> {
        if self.route() != Route::FuelEstimator {
            return None;
        }
        Some(self.form.calculate(&self.calculator))
    }

    pub fn show_info(&mut self) -> bool {
        if self.route() != Route::FuelEstimator {
            return false;
        }
        self.info_dialog_visible = true;
        true
    }

    pub fn dismiss_info(&mut self) {
        self.info_dialog_visible = false;
    }

    pub fn show_theme_dialog(&mut self) {
        self.theme_dialog_visible = true;
    }

    pub fn cancel_theme_dialog(&mut self) {
        self.theme_dialog_visible = false;
    }

    /// 對話框立即關閉，寫入在背景進行
    pub fn select_theme(&mut self, theme: Theme) -> JoinHandle<Result<()>> {
        self.theme_dialog_visible = false;
        tracing::info!("🎨 Theme selected: {}", theme);
        self.preferences.spawn_set_dark_mode(theme.is_dark())
    }

    pub fn apply(&mut self, command: SessionCommand) -> Outcome {
        match command {
            SessionCommand::Open => {
                if self.route() == Route::FuelEstimator {
                    return Outcome::Rejected("already on the calculator".to_string());
                }
                self.open_estimator();
            }
            SessionCommand::Back => {
                if !self.back() {
                    return Outcome::Rejected("already on the home screen".to_string());
                }
            }
            SessionCommand::Set(field, value) => {
                if !self.set_field(field, value) {
                    return Outcome::Rejected("open the calculator first".to_string());
                }
            }
            SessionCommand::Calculate => {
                if self.calculate().is_none() {
                    return Outcome::Rejected("open the calculator first".to_string());
                }
            }
            SessionCommand::ShowInfo => {
                if !self.show_info() {
                    return Outcome::Rejected("open the calculator first".to_string());
                }
            }
            SessionCommand::DismissInfo => self.dismiss_info(),
            SessionCommand::ShowThemeDialog => self.show_theme_dialog(),
            SessionCommand::SelectTheme(theme) => {
                return Outcome::ThemeWrite(self.select_theme(theme));
            }
            SessionCommand::CancelThemeDialog => self.cancel_theme_dialog(),
            SessionCommand::Help => {}
            SessionCommand::Quit => return Outcome::Quit,
        }
        Outcome::Continue
    }

    pub fn result_line(&self) -> Option<String> {
        format::result_line(&self.form.total_cost)
    }

    /// 以純文字描繪目前畫面與對話框
    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![format!("[{}] theme: {}", self.route(), self.theme())];

        match self.route() {
            Route::Home => {
                lines.push("Trip Cost Calculator".to_string());
                lines.push("Plan your car expenses wisely.".to_string());
                lines.push("> Start Calculating (open)".to_string());
            }
            Route::FuelEstimator => {
                lines.push("Trip Cost Calculator".to_string());
                for field in [
                    EstimatorField::Distance,
                    EstimatorField::Efficiency,
                    EstimatorField::PricePerLiter,
                ] {
                    lines.push(format!("  {}: {}", field.label(), self.form.get(field)));
                }
                if let Some(result) = self.result_line() {
                    lines.push(result);
                }
            }
        }

        if self.info_dialog_visible {
            lines.push(format!("-- {} --", USAGE_INFO_TITLE));
            lines.extend(format::usage_info());
            lines.push("(ok to dismiss)".to_string());
        }

        if self.theme_dialog_visible {
            lines.push("-- Select Theme --".to_string());
            lines.push(format!("  light: {}", Theme::Light.label()));
            lines.push(format!("  dark:  {}", Theme::Dark.label()));
            lines.push("(cancel to close)".to_string());
        }

        lines
    }
}
