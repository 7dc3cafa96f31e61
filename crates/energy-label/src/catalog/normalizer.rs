/// Collapse a physical column header to its lookup form: strip BOM and
/// zero-width characters, fold every run of non-alphanumerics to a single
/// space, lowercase. `"CO2 g/KM"` and `"co2_g_km"` both become `"co2 g km"`.
pub(crate) fn normalize_header(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let mut out = String::with_capacity(cleaned.len());
    let mut pending_gap = false;
    for ch in cleaned.chars() {
        if ch.is_alphanumeric() {
            if pending_gap && !out.is_empty() {
                out.push(' ');
            }
            pending_gap = false;
            out.extend(ch.to_lowercase());
        } else {
            pending_gap = true;
        }
    }
    out
}

/// Parse a numeric cell that may carry currency formatting. Currency symbols,
/// group separators, and interior whitespace are stripped before the parse;
/// anything still unparseable is treated as missing rather than an error.
pub(crate) fn parse_numeric(raw: &str) -> Option<f64> {
    let stripped: String = raw
        .chars()
        .filter(|ch| !matches!(ch, '£' | '$' | '€' | ',') && !ch.is_whitespace())
        .collect();
    if stripped.is_empty() {
        return None;
    }
    stripped.parse::<f64>().ok()
}
