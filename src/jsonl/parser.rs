//! JSON-Lines-Parser.

use crate::core::XForm;
use anyhow::{Context, Result};
use std::io::BufRead;

/// Parst einen JSON-Lines-String in eine Liste von Transformationen.
///
/// Fehlermeldungen enthalten die (1-basierte) Zeilennummer.
pub fn parse_xforms_jsonl(content: &str) -> Result<Vec<XForm>> {
    let xforms = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_line(line, index + 1))
        .collect::<Result<Vec<_>>>()?;

    log::debug!("{} Transformationen aus JSON Lines gelesen", xforms.len());
    Ok(xforms)
}

/// Liest JSON Lines zeilenweise aus einem Reader.
pub fn read_xforms_jsonl(reader: impl BufRead) -> Result<Vec<XForm>> {
    let mut xforms = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("Zeile {} konnte nicht gelesen werden", line_no))?;
        if line.trim().is_empty() {
            continue;
        }
        xforms.push(parse_line(&line, line_no)?);
    }
    log::debug!("{} Transformationen aus JSON Lines gelesen", xforms.len());
    Ok(xforms)
}

fn parse_line(line: &str, line_no: usize) -> Result<XForm> {
    serde_json::from_str(line.trim()).with_context(|| {
        format!(
            "Zeile {}: ungültiger XForm-Eintrag '{}'",
            line_no,
            truncate_for_error(line.trim())
        )
    })
}

/// Kürzt einen String für Fehlermeldungen auf max. 40 Zeichen.
fn truncate_for_error(s: &str) -> &str {
    match s.char_indices().nth(40) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xform_path_engine::InterpolationMode;

    const LINE: &str = r#"{"id":7,"name":"Bogen","startRect":{"x":0,"y":0,"width":20,"height":10},"endRect":{"x":200,"y":0,"width":20,"height":10},"waypoints":[{"x":110,"y":-80}],"mode":"gravity"}"#;

    #[test]
    fn test_parse_single_line_with_defaults() {
        let xforms = parse_xforms_jsonl(LINE).unwrap();
        assert_eq!(xforms.len(), 1);
        let xf = &xforms[0];
        assert_eq!(xf.id, 7);
        assert_eq!(xf.mode, Some(InterpolationMode::Gravity));
        assert_eq!(xf.duration_ms, 500);
        assert_eq!(xf.waypoints.len(), 1);
        assert_eq!(xf.timestamp, None);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let content = format!("\n{LINE}\n   \n{LINE}\n");
        assert_eq!(parse_xforms_jsonl(&content).unwrap().len(), 2);
    }

    #[test]
    fn test_error_names_line_number() {
        let content = format!("{LINE}\n{{\"id\": \"kaputt\"}}\n");
        let err = parse_xforms_jsonl(&content).unwrap_err();
        assert!(format!("{err}").contains("Zeile 2"), "Fehler: {err}");
    }

    #[test]
    fn test_non_numeric_waypoint_is_rejected() {
        let bad = LINE.replace(r#"{"x":110,"y":-80}"#, r#"{"x":"links","y":-80}"#);
        assert!(parse_xforms_jsonl(&bad).is_err());
    }

    #[test]
    fn test_unknown_mode_falls_back_to_passthrough() {
        let line = LINE.replace("gravity", "spirale");
        let xforms = parse_xforms_jsonl(&line).unwrap();
        assert_eq!(xforms[0].mode, Some(InterpolationMode::PassThrough));
    }

    #[test]
    fn test_read_from_buffered_reader() {
        let content = format!("{LINE}\n\n{LINE}");
        let xforms = read_xforms_jsonl(std::io::Cursor::new(content)).unwrap();
        assert_eq!(xforms.len(), 2);
    }

    #[test]
    fn test_truncate_for_error_respects_char_boundaries() {
        let s = "ä".repeat(50);
        assert_eq!(truncate_for_error(&s).chars().count(), 40);
        assert_eq!(truncate_for_error("kurz"), "kurz");
    }
}
