use crate::utils::error::{HelperError, Result};

/// Renders a millisecond duration as `"1h1m1.00s"`, `"1.50s"` or `"500ms"`.
pub fn format_duration(millis: f64) -> Result<String> {
    if !millis.is_finite() || millis < 0.0 {
        return Err(HelperError::NegativeValue {
            field: "duration".to_string(),
            value: millis.to_string(),
        });
    }
    if millis == 0.0 {
        return Ok("0s".to_string());
    }

    let mut value = millis / 1000.0;
    let mut hours = 0.0;
    let mut minutes = 0.0;
    if value > 3600.0 {
        hours = value / 3600.0;
        value %= 3600.0;
    }
    if value > 60.0 {
        minutes = value / 60.0;
        value %= 60.0;
    }
    let seconds = value;

    let mut output = String::new();
    if hours > 0.0 {
        output.push_str(&format!("{}h", hours.trunc()));
    }
    if minutes > 0.0 {
        output.push_str(&format!("{}m", minutes.trunc()));
    }
    if seconds >= 1.0 {
        output.push_str(&format!("{:.2}s", seconds));
    } else if seconds > 0.0 {
        // sub-millisecond precision is dropped
        output.push_str(&format!("{:.0}ms", seconds * 1000.0));
    }
    Ok(output)
}

pub fn format_duration_ms(millis: u64) -> Result<String> {
    format_duration(millis as f64)
}
