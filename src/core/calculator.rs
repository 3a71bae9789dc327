//! Trip fuel-cost calculation.
//!
//! The calculator is pure and synchronous: three raw text fields go in, an
//! optional cost comes out. Any field that does not parse as a number, or an
//! efficiency of zero, collapses to "no result". Negative values are not
//! rejected and flow through `(distance / efficiency) * price` unchanged.
//!
//! Number parsing accepts the JVM `Double.valueOf` grammar: surrounding
//! control/space characters are ignored, an `f`/`F`/`d`/`D` suffix is allowed,
//! hexadecimal floating literals (`0x1.8p1`) are accepted, and the only
//! spelled-out values are `NaN` and `Infinity`.

use crate::domain::model::{CostEstimate, TripInputs};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<sign>[+-]?)(?:(?P<special>NaN|Infinity)|(?P<dec>(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)[fFdD]?|0[xX](?P<hexint>[0-9a-fA-F]*)(?:\.(?P<hexfrac>[0-9a-fA-F]*))?[pP](?P<hexexp>[+-]?[0-9]+)[fFdD]?)$",
    )
    .expect("number pattern is valid")
});

/// 與 JVM 相同：前後 <= U+0020 的字元都會被忽略
fn trim_jvm(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// 解析單一欄位；不符合文法時回傳 `None`
pub fn parse_number(text: &str) -> Option<f64> {
    let caps = NUMBER_PATTERN.captures(trim_jvm(text))?;
    let negative = &caps["sign"] == "-";

    let magnitude = if let Some(special) = caps.name("special") {
        match special.as_str() {
            "NaN" => f64::NAN,
            _ => f64::INFINITY,
        }
    } else if let Some(dec) = caps.name("dec") {
        dec.as_str().parse::<f64>().ok()?
    } else {
        let int = caps.name("hexint").map_or("", |m| m.as_str());
        let frac = caps.name("hexfrac").map_or("", |m| m.as_str());
        let exp = caps.name("hexexp").map_or("0", |m| m.as_str());
        parse_hex(int, frac, exp)?
    };

    Some(if negative { -magnitude } else { magnitude })
}

fn parse_hex(int: &str, frac: &str, exp: &str) -> Option<f64> {
    // 至少要有一個十六進位數字
    if int.is_empty() && frac.is_empty() {
        return None;
    }

    let mantissa = int
        .chars()
        .chain(frac.chars())
        .filter_map(|c| c.to_digit(16))
        .fold(0.0f64, |acc, digit| acc * 16.0 + f64::from(digit));

    if mantissa == 0.0 {
        return Some(0.0);
    }

    // 指數位數過長時直接飽和，結果只會是 0 或 inf
    let exp = exp
        .parse::<i64>()
        .unwrap_or(if exp.starts_with('-') { i64::MIN } else { i64::MAX });
    let scale = exp.saturating_sub(4 * frac.len() as i64).clamp(-2200, 2200) as i32;

    // 分兩步乘，避免 2^scale 本身溢位或下溢
    let half = scale / 2;
    Some(mantissa * 2f64.powi(half) * 2f64.powi(scale - half))
}

impl TripInputs {
    /// 三個欄位各自解析；任一失敗或油耗為 0 時回傳 `None`
    pub fn parse(distance: &str, efficiency: &str, price_per_liter: &str) -> Option<Self> {
        let distance = parse_number(distance)?;
        let efficiency = parse_number(efficiency)?;
        let price_per_liter = parse_number(price_per_liter)?;

        // -0.0 也會命中
        if efficiency == 0.0 {
            return None;
        }

        Some(Self {
            distance,
            efficiency,
            price_per_liter,
        })
    }

    /// 不做四捨五入，顯示層自行處理
    pub fn cost(&self) -> f64 {
        (self.distance / self.efficiency) * self.price_per_liter
    }
}

pub fn compute(distance: &str, efficiency: &str, price_per_liter: &str) -> Option<f64> {
    TripInputs::parse(distance, efficiency, price_per_liter).map(|inputs| inputs.cost())
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FuelCostCalculator;

impl FuelCostCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn estimate(&self, distance: &str, efficiency: &str, price_per_liter: &str) -> CostEstimate {
        let estimate = CostEstimate::new(compute(distance, efficiency, price_per_liter));

        match estimate.value() {
            Some(cost) => tracing::debug!("Estimated trip cost: {}", cost),
            None => tracing::debug!(
                "No estimate for distance={:?} efficiency={:?} price={:?}",
                distance,
                efficiency,
                price_per_liter
            ),
        }

        estimate
    }
}
