//! JSON-Lines-Writer.

use crate::core::XForm;
use anyhow::{Context, Result};
use std::io::Write;

/// Serialisiert Transformationen als JSON Lines (eine Zeile pro XForm, mit Zeilenumbruch).
pub fn write_xforms_jsonl(xforms: &[XForm]) -> Result<String> {
    let mut buf = Vec::new();
    write_xforms_jsonl_to(&mut buf, xforms)?;
    String::from_utf8(buf).context("JSON-Ausgabe ist kein gültiges UTF-8")
}

/// Schreibt Transformationen als JSON Lines in einen Writer.
pub fn write_xforms_jsonl_to(mut writer: impl Write, xforms: &[XForm]) -> Result<()> {
    for xform in xforms {
        serde_json::to_writer(&mut writer, xform)
            .with_context(|| format!("XForm {} konnte nicht serialisiert werden", xform.id))?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    log::debug!("{} Transformationen als JSON Lines geschrieben", xforms.len());
    Ok(())
}
