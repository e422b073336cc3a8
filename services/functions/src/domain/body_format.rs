/// JSON text format of the response body
///
/// Writes the same text as Python's `json.dumps` with default arguments:
/// `", "` and `": "` separators, and every character outside printable
/// ASCII escaped as `\uXXXX` (UTF-16 code units, lowercase hex).
use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

/// `serde_json` formatter producing `json.dumps` compatible text
#[derive(Debug, Clone, Copy, Default)]
struct DumpsFormatter;

impl Formatter for DumpsFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    // Quotes, backslashes and control characters never reach this point;
    // serde_json escapes them before handing over the fragment.
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Serializes `value` into `json.dumps` compatible text
pub fn to_dumps_string<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, DumpsFormatter);
    value.serialize(&mut serializer)?;

    // Every non-ASCII character was escaped, so the buffer is plain ASCII.
    Ok(buf.into_iter().map(char::from).collect())
}
