use serde_json::Value;
use std::io::{self, Write};

/// Pretty-print the result document to stdout.
pub fn print_json(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_json(&mut stdout.lock(), value) {
        eprintln!("Failed to write JSON output: {e}");
    }
}

fn write_json<W: Write>(out: &mut W, value: &Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_money_strings_kept_verbatim() {
        let mut buf = Vec::new();
        write_json(&mut buf, &json!({"monthly_pi": "1596.73", "deal_score": 47})).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("\"monthly_pi\": \"1596.73\""));
        assert!(text.ends_with("}\n"));
    }
}
