//! Display formatting helpers

/// Format a duration in seconds as `m:ss`
///
/// ```rust
/// assert_eq!(sakura_core::format_duration(200), "3:20");
/// assert_eq!(sakura_core::format_duration(61), "1:01");
/// ```
pub fn format_duration(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Format a play or follower count with a B/M/K suffix and one decimal
pub fn format_play_count(count: u64) -> String {
    let count_f = count as f64;
    if count >= 1_000_000_000 {
        format!("{:.1}B", count_f / 1_000_000_000.0)
    } else if count >= 1_000_000 {
        format!("{:.1}M", count_f / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count_f / 1_000.0)
    } else {
        count.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(9), "0:09");
        assert_eq!(format_duration(361), "6:01");
        assert_eq!(format_duration(3600), "60:00");
    }

    #[test]
    fn play_count_formatting() {
        assert_eq!(format_play_count(999), "999");
        assert_eq!(format_play_count(1_500), "1.5K");
        assert_eq!(format_play_count(950_000_000), "950.0M");
        assert_eq!(format_play_count(2_500_000_000), "2.5B");
    }

    proptest! {
        #[test]
        fn formatted_duration_parses_back(seconds in 0u32..100_000) {
            let text = format_duration(seconds);
            let (minutes, secs) = text.split_once(':').unwrap();
            prop_assert_eq!(secs.len(), 2);
            let total = minutes.parse::<u32>().unwrap() * 60 + secs.parse::<u32>().unwrap();
            prop_assert_eq!(total, seconds);
        }
    }
}
