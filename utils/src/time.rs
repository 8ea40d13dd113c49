//! Time formatting helpers.

/// Format a seconds count as a human-readable duration.
///
/// The time-left display wants the two most significant units, so
/// `3725` renders as `"1h 2m"`, not `"1h 2m 5s"`.
pub fn humanize_seconds(secs: u64) -> String {
    if secs == 0 {
        return "0s".to_string();
    }
    if secs < 60 {
        return format!("{}s", secs);
    }
    if secs < 3600 {
        let m = secs / 60;
        let s = secs % 60;
        return if s == 0 {
            format!("{}m", m)
        } else {
            format!("{}m {}s", m, s)
        };
    }
    if secs < 86400 {
        let h = secs / 3600;
        let m = (secs % 3600) / 60;
        return if m == 0 {
            format!("{}h", h)
        } else {
            format!("{}h {}m", h, m)
        };
    }
    let d = secs / 86400;
    let h = (secs % 86400) / 3600;
    if h == 0 {
        format!("{}d", d)
    } else {
        format!("{}d {}h", d, h)
    }
}
