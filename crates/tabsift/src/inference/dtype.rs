//! Cell parsing and column dtype inference.

use crate::schema::{Column, ColumnType, Value};

/// Tokens read as missing values in delimited text.
pub const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const TRUE_TOKENS: &[&str] = &["True", "TRUE", "true"];
const FALSE_TOKENS: &[&str] = &["False", "FALSE", "false"];

/// Check if a raw token represents a missing value.
pub fn is_na_token(token: &str) -> bool {
    NA_TOKENS.contains(&token)
}

/// Parse a raw text token into a typed cell.
pub fn parse_token(token: &str) -> Value {
    if is_na_token(token) {
        return Value::Missing;
    }

    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Value::Text(token.to_string());
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Int(i);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if !f.is_nan() {
            return Value::Float(f);
        }
    }
    if TRUE_TOKENS.contains(&trimmed) {
        return Value::Bool(true);
    }
    if FALSE_TOKENS.contains(&trimmed) {
        return Value::Bool(false);
    }

    Value::Text(token.to_string())
}

/// Infer a column's dtype from its cells.
///
/// `all_missing` is used when the column has no values at all.
pub fn infer_column_type(values: &[Value], all_missing: ColumnType) -> ColumnType {
    let mut has_missing = false;
    let mut present = 0usize;
    let mut ints = 0usize;
    let mut floats = 0usize;
    let mut bools = 0usize;

    for value in values {
        match value {
            v if v.is_missing() => has_missing = true,
            Value::Int(_) => {
                present += 1;
                ints += 1;
            }
            Value::Float(_) => {
                present += 1;
                floats += 1;
            }
            Value::Bool(_) => {
                present += 1;
                bools += 1;
            }
            _ => present += 1,
        }
    }

    if present == 0 {
        all_missing
    } else if ints == present {
        if has_missing {
            ColumnType::Float64
        } else {
            ColumnType::Int64
        }
    } else if ints + floats == present {
        ColumnType::Float64
    } else if bools == present && !has_missing {
        ColumnType::Bool
    } else {
        ColumnType::Object
    }
}

/// Build a column from typed cells, normalizing them to the inferred dtype.
pub fn column_from_values(
    name: impl Into<String>,
    values: Vec<Value>,
    all_missing: ColumnType,
) -> Column {
    let dtype = infer_column_type(&values, all_missing);
    let values = match dtype {
        ColumnType::Float64 => values
            .into_iter()
            .map(|v| match v {
                Value::Int(i) => Value::Float(i as f64),
                Value::Float(f) if f.is_nan() => Value::Missing,
                other => other,
            })
            .collect(),
        _ => values,
    };
    Column::new(name, dtype, values)
}

/// Build a column from raw text tokens.
///
/// Mixed text columns keep the original token text; only uniformly numeric or
/// boolean columns are converted.
pub fn column_from_tokens(name: impl Into<String>, tokens: Vec<String>) -> Column {
    let parsed: Vec<Value> = tokens.iter().map(|t| parse_token(t)).collect();
    let dtype = infer_column_type(&parsed, ColumnType::Float64);

    if dtype != ColumnType::Object {
        return column_from_values(name, parsed, ColumnType::Float64);
    }

    let all_bool = parsed
        .iter()
        .all(|v| v.is_missing() || matches!(v, Value::Bool(_)));
    let values = if all_bool {
        parsed
    } else {
        parsed
            .into_iter()
            .zip(tokens)
            .map(|(value, token)| {
                if value.is_missing() {
                    Value::Missing
                } else {
                    Value::Text(token)
                }
            })
            .collect()
    };

    Column::new(name, ColumnType::Object, values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_token() {
        assert_eq!(parse_token(""), Value::Missing);
        assert_eq!(parse_token("NA"), Value::Missing);
        assert_eq!(parse_token("42"), Value::Int(42));
        assert_eq!(parse_token(" 4.5 "), Value::Float(4.5));
        assert_eq!(parse_token("TRUE"), Value::Bool(true));
        assert_eq!(parse_token("   "), Value::Text("   ".to_string()));
        assert_eq!(parse_token("hello"), Value::Text("hello".to_string()));
    }

    #[test]
    fn test_int_column() {
        let col = column_from_tokens("n", tokens(&["1", "2", "3"]));
        assert_eq!(col.dtype, ColumnType::Int64);
        assert_eq!(col.values[2], Value::Int(3));
    }

    #[test]
    fn test_int_column_with_missing_becomes_float() {
        let col = column_from_tokens("n", tokens(&["1", "", "3"]));
        assert_eq!(col.dtype, ColumnType::Float64);
        assert_eq!(col.values[0], Value::Float(1.0));
        assert_eq!(col.values[1], Value::Missing);
    }

    #[test]
    fn test_mixed_column_keeps_raw_text() {
        let col = column_from_tokens("mixed", tokens(&["007", "abc", "NA"]));
        assert_eq!(col.dtype, ColumnType::Object);
        assert_eq!(col.values[0], Value::Text("007".to_string()));
        assert_eq!(col.values[2], Value::Missing);
    }

    #[test]
    fn test_bool_columns() {
        let col = column_from_tokens("flag", tokens(&["True", "false"]));
        assert_eq!(col.dtype, ColumnType::Bool);

        let col = column_from_tokens("flag", tokens(&["True", ""]));
        assert_eq!(col.dtype, ColumnType::Object);
        assert_eq!(col.values[0], Value::Bool(true));
    }

    #[test]
    fn test_all_missing_column() {
        let col = column_from_tokens("empty", tokens(&["", "NA"]));
        assert_eq!(col.dtype, ColumnType::Float64);

        let col = column_from_values("empty", vec![Value::Missing], ColumnType::Object);
        assert_eq!(col.dtype, ColumnType::Object);
    }
}
