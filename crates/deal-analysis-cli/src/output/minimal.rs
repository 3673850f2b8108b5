use serde_json::Value;

use super::scalar_text;

/// Print just the key answer value from the output.
///
/// Looks for well-known headline fields in priority order, descending into
/// a nested `metrics` object when present, then falls back to the first
/// field in the result object.
pub fn print_minimal(value: &Value) {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = [
        "formatted",
        "deal_score",
        "monthly_piti",
        "monthly_payment",
        "monthly_cash_flow",
        "total_return",
    ];

    let candidates = [Some(result_obj), result_obj.get("metrics")];

    for key in &priority_keys {
        for obj in candidates.iter().flatten() {
            if let Some(val) = obj.get(*key) {
                if !val.is_null() {
                    println!("{}", scalar_text(val));
                    return;
                }
            }
        }
    }

    if let Value::Object(map) = result_obj {
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, scalar_text(val));
            return;
        }
    }

    println!("{}", scalar_text(result_obj));
}
