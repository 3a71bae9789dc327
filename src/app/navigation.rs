use std::fmt;

pub const HOME_ROUTE: &str = "home";
pub const FUEL_ESTIMATOR_ROUTE: &str = "fuel_estimator";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    FuelEstimator,
}

impl Route {
    pub fn name(self) -> &'static str {
        match self {
            Route::Home => HOME_ROUTE,
            Route::FuelEstimator => FUEL_ESTIMATOR_ROUTE,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 簡單的 push/pop 導覽堆疊，起點固定為 home
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    pub fn current(&self) -> Route {
        // 堆疊永遠至少有起點
        self.stack.last().copied().unwrap_or(Route::Home)
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!("Navigate {} -> {}", self.current(), route);
        self.stack.push(route);
    }

    /// 已在起點時不動作並回傳 false
    pub fn pop(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        let left = self.stack.pop();
        tracing::debug!("Pop {:?} -> {}", left, self.current());
        true
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        let navigator = Navigator::new();
        assert_eq!(navigator.current(), Route::Home);
        assert_eq!(navigator.current().name(), "home");
    }

    #[test]
    fn test_push_and_pop() {
        let mut navigator = Navigator::new();
        navigator.navigate(Route::FuelEstimator);
        assert_eq!(navigator.current(), Route::FuelEstimator);

        assert!(navigator.pop());
        assert_eq!(navigator.current(), Route::Home);
        assert!(!navigator.pop());
        assert_eq!(navigator.current(), Route::Home);
    }

    #[test]
    fn test_route_names() {
        assert_eq!(Route::FuelEstimator.name(), "fuel_estimator");
        assert_eq!(Route::Home.to_string(), HOME_ROUTE);
    }
}
