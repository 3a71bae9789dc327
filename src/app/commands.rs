use crate::app::session::EstimatorField;
use crate::domain::model::Theme;

/// 互動模式下的一行輸入
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Open,
    Back,
    Set(EstimatorField, String),
    Calculate,
    ShowInfo,
    DismissInfo,
    ShowThemeDialog,
    SelectTheme(Theme),
    CancelThemeDialog,
    Help,
    Quit,
}

impl SessionCommand {
    /// 無法辨識時回傳錯誤說明
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim_start()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "open" | "start" => SessionCommand::Open,
            "back" => SessionCommand::Back,
            "distance" => SessionCommand::Set(EstimatorField::Distance, rest.to_string()),
            "efficiency" => SessionCommand::Set(EstimatorField::Efficiency, rest.to_string()),
            "price" => SessionCommand::Set(EstimatorField::PricePerLiter, rest.to_string()),
            "calc" | "calculate" => SessionCommand::Calculate,
            "info" => SessionCommand::ShowInfo,
            "ok" | "got-it" => SessionCommand::DismissInfo,
            "theme" => match rest {
                "" => SessionCommand::ShowThemeDialog,
                value => SessionCommand::SelectTheme(value.parse::<Theme>()?),
            },
            "light" => SessionCommand::SelectTheme(Theme::Light),
            "dark" => SessionCommand::SelectTheme(Theme::Dark),
            "cancel" => SessionCommand::CancelThemeDialog,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            "" => return Err("empty command".to_string()),
            other => return Err(format!("unknown command '{}'", other)),
        };

        Ok(command)
    }

    pub fn help_lines() -> &'static [&'static str] {
        &[
            "open                 go to the trip cost calculator",
            "back                 return to the home screen",
            "distance <km>        set the trip distance",
            "efficiency <km/L>    set the fuel efficiency",
            "price <per litre>    set the fuel price",
            "calc                 calculate the estimated cost",
            "info / ok            show / dismiss usage information",
            "theme [light|dark]   open the theme selector or pick a theme",
            "cancel               close the theme selector",
            "quit                 leave",
        ]
    }
}
