/// Get the current time in seconds since the UNIX epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn epoch_secs() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

/// Get the current time in seconds since the UNIX epoch
#[cfg(target_arch = "wasm32")]
pub fn epoch_secs() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|perf| (perf.timing().navigation_start() as f64 + perf.now()) / 1000.0)
        .unwrap_or(0.0)
}

/// Format the distance between a past timestamp and now, e.g. "12s ago"
pub fn format_relative(timestamp: f64) -> String {
    let elapsed = (epoch_secs() - timestamp).max(0.0);
    if elapsed < 60.0 {
        format!("{}s ago", elapsed as u64)
    } else if elapsed < 3600.0 {
        format!("{}m ago", (elapsed / 60.0) as u64)
    } else {
        format!("{}h ago", (elapsed / 3600.0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_format_buckets() {
        let now = epoch_secs();
        assert!(format_relative(now).ends_with("s ago"));
        assert!(format_relative(now - 120.0).ends_with("m ago"));
        assert!(format_relative(now - 7200.0).ends_with("h ago"));
    }
}
