use std::io::{self, Read};

use deal_analysis_core::deal::inputs::PropertyInputs;

/// Property inputs piped on stdin, as JSON or YAML.
///
/// `None` when stdin is a terminal or the pipe is empty, so the caller can
/// fall back to flags.
pub fn read_piped_property() -> Result<Option<PropertyInputs>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_property(&buffer)
}

fn parse_property(raw: &str) -> Result<Option<PropertyInputs>, Box<dyn std::error::Error>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let inputs = if trimmed.starts_with('{') {
        serde_json::from_str(trimmed)
            .map_err(|e| format!("Failed to parse piped property JSON: {e}"))?
    } else {
        serde_yaml::from_str(trimmed)
            .map_err(|e| format!("Failed to parse piped property YAML: {e}"))?
    };
    Ok(Some(inputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_blank_pipe_is_none() {
        assert!(parse_property("  \n").unwrap().is_none());
    }

    #[test]
    fn test_json_and_yaml_agree() {
        let json = r#"{"purchase_price": "200000", "down_payment_percent": "20",
            "interest_rate": "6.5", "loan_term": 30, "monthly_rent": "1800"}"#;
        let yaml = "purchase_price: '200000'\ndown_payment_percent: '20'\n\
                    interest_rate: '6.5'\nloan_term: 30\nmonthly_rent: '1800'\n";
        let from_json = parse_property(json).unwrap().unwrap();
        let from_yaml = parse_property(yaml).unwrap().unwrap();
        assert_eq!(from_json, from_yaml);
        assert_eq!(from_json.monthly_rent, Decimal::from(1800));
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(parse_property("{not json").is_err());
    }
}
