use crate::utils::error::{Result, TripCostError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TripCostError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TripCostError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 儲存名稱會變成檔名，不允許路徑分隔符
pub fn validate_store_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.contains(['/', '\\', '\0']) || name == "." || name == ".." {
        return Err(TripCostError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Store name must be a plain file name".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TripCostError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("storage.dir", "./.trip-cost").is_ok());
        assert!(validate_path("storage.dir", "").is_err());
        assert!(validate_path("storage.dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_store_name() {
        assert!(validate_store_name("storage.name", "settings").is_ok());
        assert!(validate_store_name("storage.name", "  ").is_err());
        assert!(validate_store_name("storage.name", "../settings").is_err());
        assert!(validate_store_name("storage.name", "..").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("storage.name", "settings").is_ok());
        assert!(validate_non_empty_string("storage.name", "\t ").is_err());
    }
}
