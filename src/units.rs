//! 文件大小解析
//!
//! 解析 `--file-size` 参数：`<int><B|KB|MB>`，例如 `10B`、`10KB`、`10MB`。
//! 不支持的单位（如 `10GB`）是致命错误，绝不静默截断。

use crate::err::ParseError;

/// 解析文件大小字符串为字节数。
pub fn parse_file_size(s: &str) -> Result<u64, ParseError> {
    let s = s.trim();
    let digits_end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    let (digits, unit) = s.split_at(digits_end);
    if digits.is_empty() {
        return Err(ParseError::Malformed(s.to_string()));
    }
    let n: u64 = digits
        .parse()
        .map_err(|_| ParseError::Malformed(s.to_string()))?;

    let multiplier = match unit {
        "B" => 1,
        "KB" => 1024,
        "MB" => 1024 * 1024,
        _ => return Err(ParseError::UnsupportedUnit(unit.to_string())),
    };
    Ok(n.saturating_mul(multiplier))
}
