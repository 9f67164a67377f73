//! Skill normalizer: canonical comparison form for free-text skill tokens.

/// Canonicalizes a raw skill string for comparison.
///
/// Steps, in order:
/// 1. lowercase
/// 2. trim surrounding whitespace
/// 3. strip one literal trailing `.js` (`"Node.js"` → `"node"`)
/// 4. remove every `.` (`"asp.net"` → `"aspnet"`)
/// 5. replace every `-` with a space
/// 6. trim again, so a leading/trailing `-` cannot leave edge whitespace
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let trimmed = lowered.trim();
    let stem = trimmed.strip_suffix(".js").unwrap_or(trimmed);

    stem.replace('.', "").replace('-', " ").trim().to_string()
}
