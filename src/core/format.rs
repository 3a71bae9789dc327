use crate::domain::model::CostEstimate;

/// 固定的幣別標籤與小數位數
pub const DEFAULT_CURRENCY: &str = "AED";
pub const DEFAULT_DECIMALS: usize = 2;

pub const USAGE_INFO_TITLE: &str = "How to Calculate Fuel Cost";

pub fn format_cost(cost: f64) -> String {
    format!(
        "Estimated Cost: {} {:.*}",
        DEFAULT_CURRENCY, DEFAULT_DECIMALS, cost
    )
}

/// 沒有結果時不顯示任何東西
pub fn result_line(estimate: &CostEstimate) -> Option<String> {
    estimate.value().map(format_cost)
}

pub fn usage_info() -> Vec<String> {
    vec![
        "• Distance: Enter your total trip distance in kilometers (km)".to_string(),
        "• Efficiency: Your vehicle's fuel efficiency in kilometers per liter (km/L)".to_string(),
        format!("• Price: Current fuel price per liter in {}", DEFAULT_CURRENCY),
        "The calculator will estimate your total fuel cost for the trip.".to_string(),
    ]
}
