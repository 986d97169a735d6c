use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::utils::parse_date;

pub fn validate_start_date(value: &str) -> Result<NaiveDate> {
    if value.trim().is_empty() {
        return Err(anyhow!("start date is empty"));
    }
    parse_date(value)
}

pub fn validate_week_count(count: u32) -> Result<()> {
    if count == 0 {
        return Err(anyhow!("week count must be a positive integer"));
    }
    Ok(())
}
