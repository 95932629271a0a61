//
//  circleci-api
//  cli/output.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON output for command results.

use std::io::{self, Write};

use serde::Serialize;

/// Writes `value` to stdout as JSON, pretty-printed unless `compact`.
pub fn write_json<T: Serialize>(value: &T, compact: bool) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_json_to(&mut handle, value, compact)
}

/// Writes `value` to `writer` as JSON followed by a newline.
pub fn write_json_to<W: Write, T: Serialize>(
    writer: &mut W,
    value: &T,
    compact: bool,
) -> anyhow::Result<()> {
    if compact {
        serde_json::to_writer(&mut *writer, value)?;
    } else {
        serde_json::to_writer_pretty(&mut *writer, value)?;
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_json_compact() {
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &json!({"a": 1}), true).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "{\"a\":1}\n");
    }

    #[test]
    fn test_write_json_pretty() {
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &json!({"a": 1}), false).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "{\n  \"a\": 1\n}\n");
    }
}
