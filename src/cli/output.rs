//! User-facing output for the CLI. Results go to stdout; diagnostics and logs
//! go to stderr.

use std::io::Write;

use serde_json::Value;

use crate::errors::Result;
use crate::ops::OpInfo;

/// Writes an operation result as a single line of JSON.
pub fn write_value(out: &mut impl Write, value: &Value) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the operation list, either as aligned text or as JSON.
pub fn write_op_list(out: &mut impl Write, infos: &[OpInfo], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, infos)?;
        writeln!(out)?;
        return Ok(());
    }
    let width = infos.iter().map(|i| i.name.len()).max().unwrap_or(0);
    for info in infos {
        writeln!(out, "{:<width$}  {}", info.name, info.summary, width = width)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn infos() -> Vec<OpInfo> {
        vec![
            OpInfo {
                name: "allRGB".to_string(),
                summary: "colours".to_string(),
            },
            OpInfo {
                name: "makeMath".to_string(),
                summary: "sums".to_string(),
            },
        ]
    }

    #[test]
    fn test_write_value_is_one_line() {
        let mut buf = Vec::new();
        write_value(&mut buf, &json!([1, 4])).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[1,4]\n");
    }

    #[test]
    fn test_write_op_list_aligns_names() {
        let mut buf = Vec::new();
        write_op_list(&mut buf, &infos(), false).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "allRGB    colours\nmakeMath  sums\n"
        );
    }

    #[test]
    fn test_write_op_list_json() {
        let mut buf = Vec::new();
        write_op_list(&mut buf, &infos(), true).unwrap();
        let parsed: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[1]["name"], json!("makeMath"));
        assert_eq!(parsed[0]["summary"], json!("colours"));
    }
}
