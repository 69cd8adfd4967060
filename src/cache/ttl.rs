//! Cache time-to-live parsing and formatting.

use anyhow::{bail, Context, Result};
use chrono::Duration;

/// Default cache lifetime in days.
pub const DEFAULT_TTL_DAYS: i64 = 30;

/// The cache TTL used when no `cache_ttl` setting is given.
pub fn default_ttl() -> Duration {
    Duration::days(DEFAULT_TTL_DAYS)
}

/// Parse a TTL such as `7d`, `24h`, `30m` or `45s`. A bare number is seconds.
pub fn parse_ttl(ttl: &str) -> Result<Duration> {
    let ttl = ttl.trim().to_ascii_lowercase();
    let (amount, unit) = match ttl.char_indices().last() {
        Some((i, c)) if c.is_ascii_alphabetic() => (&ttl[..i], c),
        _ => (ttl.as_str(), 's'),
    };
    let n: i64 = amount
        .parse()
        .with_context(|| format!("invalid TTL {:?}", ttl))?;

    match unit {
        'd' => Ok(Duration::days(n)),
        'h' => Ok(Duration::hours(n)),
        'm' => Ok(Duration::minutes(n)),
        's' => Ok(Duration::seconds(n)),
        other => bail!("unknown TTL unit {:?} in {:?}", other, ttl),
    }
}

/// Render a duration in its largest whole unit, e.g. `30d` or `90s`.
pub fn format_duration(duration: Duration) -> String {
    const UNITS: [(i64, &str); 3] = [(86_400, "d"), (3_600, "h"), (60, "m")];

    let secs = duration.num_seconds();
    UNITS
        .iter()
        .find(|(size, _)| secs >= *size)
        .map(|(size, suffix)| format!("{}{}", secs / size, suffix))
        .unwrap_or_else(|| format!("{}s", secs))
}
