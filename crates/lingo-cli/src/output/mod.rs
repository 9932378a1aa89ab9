use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// `{"detail": "<message>"}` error body.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Print an error body on stderr in the requested format.
pub fn output_error(detail: String, format: OutputFormat) {
    let body = ErrorDetail { detail };
    match render(&body, format) {
        Ok(rendered) => eprintln!("{rendered}"),
        Err(_) => eprintln!("{}", body.detail),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{ErrorDetail, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        id: &'static str,
        value: u32,
    }

    #[test]
    fn json_render_is_valid_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert_eq!(parsed["value"], 7);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let value = Example { id: "x", value: 7 };
        let out = render(&value, OutputFormat::Raw).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["id"], "x");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn error_detail_shape() {
        let body = ErrorDetail {
            detail: "Situation with id 3 not found.".to_string(),
        };
        let out = render(&body, OutputFormat::Raw).unwrap();
        assert_eq!(out, r#"{"detail":"Situation with id 3 not found."}"#);
    }
}
