use std::fmt::Write;

use tracing::trace;

use crate::{error::SerializeError, status, types::Response};

pub struct ResponseSerializer;

impl ResponseSerializer {
    /// Serializes `response` into its textual wire form: status line, one
    /// line per header, a blank line, then the body verbatim.
    ///
    /// The reason phrase comes from the status table and is empty for
    /// unknown codes. Header lines follow the iteration order of the header
    /// map, which is unspecified; callers must not rely on it. Nothing is
    /// validated — the only failure is the output sink rejecting a write.
    pub fn serialize_response(response: &Response) -> Result<String, SerializeError> {
        trace!(
            status_code = response.status_code,
            "serializing response message"
        );

        let mut out = String::new();

        writeln!(
            out,
            "{} {} {}",
            response.protocol,
            response.status_code,
            status::reason_phrase(response.status_code)
        )?;

        for (name, value) in &response.headers {
            writeln!(out, "{name}: {value}")?;
        }

        writeln!(out)?;
        out.write_str(&response.body)?;

        Ok(out)
    }
}
