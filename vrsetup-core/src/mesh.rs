//! OBJ axis flipper: negates the first two components of `v` and `vn` records
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Suffix appended to an existing destination before it is overwritten
pub const BACKUP_SUFFIX: &str = ".backup";

/// Outcome of a flip run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipSummary {
    pub lines: usize,
    pub flipped: usize,
    pub backup: Option<PathBuf>,
}

/// `<destination>.backup`, next to the destination
pub fn backup_path(destination: &Path) -> PathBuf {
    let mut name = OsString::from(destination.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Rewrite one line. Returns `None` when the line is copied verbatim.
///
/// `number` is the 1-based line number used in error messages.
pub fn flip_line(line: &str, number: usize) -> Result<Option<String>> {
    let body = line.strip_suffix('\n').unwrap_or(line);
    let body = body.strip_suffix('\r').unwrap_or(body);

    let tokens: Vec<&str> = body.split(' ').collect();
    let kind = tokens[0];
    if kind != "v" && kind != "vn" {
        return Ok(None);
    }
    if tokens.len() < 4 {
        return Err(Error::MalformedRecord {
            line: number,
            reason: format!(
                "`{kind}` record needs at least 3 components, found {}",
                tokens.len() - 1
            ),
        });
    }

    let first = negate_component(tokens[1], number)?;
    let second = negate_component(tokens[2], number)?;
    Ok(Some(format!(
        "{kind} {first} {second} {}\n",
        tokens[3..].join(" ")
    )))
}

/// Toggle the sign of a numeric token without reformatting its digits
fn negate_component(token: &str, number: usize) -> Result<String> {
    if token.parse::<f64>().is_err() {
        return Err(Error::MalformedRecord {
            line: number,
            reason: format!("component {token:?} is not a number"),
        });
    }
    Ok(match token.strip_prefix('-') {
        Some(magnitude) => magnitude.to_string(),
        None => format!("-{}", token.strip_prefix('+').unwrap_or(token)),
    })
}

/// Rewritten mesh text and line counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlippedText {
    pub text: String,
    pub lines: usize,
    pub flipped: usize,
}

/// Rewrite `text`, calling `progress(done, total)` after every line.
pub fn flip_text<F>(text: &str, mut progress: F) -> Result<FlippedText>
where
    F: FnMut(usize, usize),
{
    let total = text.split_inclusive('\n').count();
    let mut out = String::with_capacity(text.len() + total);
    let mut flipped = 0;

    for (index, line) in text.split_inclusive('\n').enumerate() {
        match flip_line(line, index + 1)? {
            Some(rewritten) => {
                out.push_str(&rewritten);
                flipped += 1;
            }
            None => out.push_str(line),
        }
        progress(index + 1, total);
    }

    Ok(FlippedText {
        text: out,
        lines: total,
        flipped,
    })
}

/// Flip `source` into `destination`, backing up an existing destination.
///
/// The whole output is rendered before the destination is touched, so a
/// missing source or a malformed record leaves any previous output in place
/// and creates no backup.
pub fn flip_file<F>(source: &Path, destination: &Path, progress: F) -> Result<FlipSummary>
where
    F: FnMut(usize, usize),
{
    let text = fs::read_to_string(source).map_err(|e| Error::from_io(source, e))?;
    let flipped = flip_text(&text, progress)?;

    let backup = if destination.is_file() {
        let backup = backup_path(destination);
        if backup.is_file() {
            fs::remove_file(&backup).map_err(|e| Error::from_io(&backup, e))?;
        }
        fs::rename(destination, &backup).map_err(|e| Error::from_io(destination, e))?;
        tracing::warn!(
            destination = %destination.display(),
            backup = %backup.display(),
            "Backed up existing destination"
        );
        Some(backup)
    } else {
        None
    };

    write_output(destination, &flipped.text).map_err(|e| Error::from_io(destination, e))?;

    tracing::info!(
        source = %source.display(),
        destination = %destination.display(),
        lines = flipped.lines,
        flipped = flipped.flipped,
        "Flipped mesh axes"
    );

    Ok(FlipSummary {
        lines: flipped.lines,
        flipped: flipped.flipped,
        backup,
    })
}

fn write_output(destination: &Path, text: &str) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(destination)?);
    out.write_all(text.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scratch_dir;

    fn flip(text: &str) -> String {
        flip_text(text, |_, _| {}).unwrap().text
    }

    #[test]
    fn test_vertex_line() {
        assert_eq!(
            flip_line("v 1.0 2.0 3.0\n", 1).unwrap().as_deref(),
            Some("v -1.0 -2.0 3.0\n")
        );
    }

    #[test]
    fn test_normal_line_with_negative_components() {
        assert_eq!(
            flip_line("vn -0.5 0.25 -1", 1).unwrap().as_deref(),
            Some("vn 0.5 -0.25 -1\n")
        );
    }

    #[test]
    fn test_fourth_component_kept() {
        assert_eq!(
            flip_line("v 1 2 3 0.5\r\n", 1).unwrap().as_deref(),
            Some("v -1 -2 3 0.5\n")
        );
    }

    #[test]
    fn test_other_records_untouched() {
        for line in ["f 1 2 3\n", "vt 0.5 0.5\n", "# v 1 2 3\n", "\n", "o cube"] {
            assert_eq!(flip_line(line, 1).unwrap(), None);
        }
        assert_eq!(flip("f 1 2 3\n"), "f 1 2 3\n");
    }

    #[test]
    fn test_short_record_is_malformed() {
        let err = flip_line("v 1.0 2.0\n", 12).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 12, .. }));
        assert!(flip_line("vn\n", 1).is_err());
    }

    #[test]
    fn test_non_numeric_component_is_malformed() {
        let err = flip_line("v 1.0 x 3.0\n", 4).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 4, .. }));
    }

    #[test]
    fn test_flip_is_an_involution() {
        let original = "# cube\nv 1.0 2.0 3.0\nv -4 +5 6 1\nvn 0 -1 0\nvt 0 1\nf 1 2 3\n";
        let once = flip(original);
        assert_eq!(
            once,
            "# cube\nv -1.0 -2.0 3.0\nv 4 -5 6 1\nvn -0 1 0\nvt 0 1\nf 1 2 3\n"
        );
        let twice = flip(&once);
        assert_eq!(
            twice,
            "# cube\nv 1.0 2.0 3.0\nv -4 5 6 1\nvn 0 -1 0\nvt 0 1\nf 1 2 3\n"
        );
    }

    #[test]
    fn test_last_vertex_gains_newline() {
        assert_eq!(flip("f 1 2 3\nv 1 2 3"), "f 1 2 3\nv -1 -2 3\n");
        assert_eq!(flip("v 1 2 3\nf 1 2 3"), "v -1 -2 3\nf 1 2 3");
    }

    #[test]
    fn test_progress_reports_every_line() {
        let mut seen = Vec::new();
        let result = flip_text("v 1 2 3\nf 1 2 3\nvn 0 0 1\n", |done, total| {
            seen.push((done, total))
        })
        .unwrap();
        assert_eq!(seen, vec![(1, 3), (2, 3), (3, 3)]);
        assert_eq!(result.lines, 3);
        assert_eq!(result.flipped, 2);
    }

    #[test]
    fn test_backup_path() {
        assert_eq!(
            backup_path(Path::new("/data/model.obj")),
            PathBuf::from("/data/model.obj.backup")
        );
    }

    #[test]
    fn test_flip_file_backs_up_destination() {
        let dir = scratch_dir("mesh_backup");
        let source = dir.join("in.obj");
        let destination = dir.join("out.obj");
        fs::write(&source, "v 1 2 3\nf 1 1 1\n").unwrap();
        fs::write(&destination, "old output\n").unwrap();

        let summary = flip_file(&source, &destination, |_, _| {}).unwrap();
        assert_eq!(summary.lines, 2);
        assert_eq!(summary.flipped, 1);
        assert_eq!(summary.backup, Some(dir.join("out.obj.backup")));
        assert_eq!(fs::read_to_string(&destination).unwrap(), "v -1 -2 3\nf 1 1 1\n");
        assert_eq!(
            fs::read_to_string(dir.join("out.obj.backup")).unwrap(),
            "old output\n"
        );

        // A second run replaces the previous backup
        flip_file(&source, &destination, |_, _| {}).unwrap();
        assert_eq!(
            fs::read_to_string(dir.join("out.obj.backup")).unwrap(),
            "v -1 -2 3\nf 1 1 1\n"
        );
    }

    #[test]
    fn test_missing_source_leaves_destination() {
        let dir = scratch_dir("mesh_missing");
        let destination = dir.join("out.obj");
        fs::write(&destination, "keep me\n").unwrap();

        let err = flip_file(&dir.join("absent.obj"), &destination, |_, _| {}).unwrap_err();
        assert!(matches!(err, Error::MissingFile { .. }));
        assert_eq!(fs::read_to_string(&destination).unwrap(), "keep me\n");
        assert!(!backup_path(&destination).exists());
    }

    #[test]
    fn test_malformed_record_leaves_destination_untouched() {
        let dir = scratch_dir("mesh_malformed");
        let source = dir.join("in.obj");
        let destination = dir.join("out.obj");
        fs::write(&source, "v 1 2 3\nv 4 5 6\nv 7 8\n").unwrap();
        fs::write(&destination, "previous good output\n").unwrap();

        let err = flip_file(&source, &destination, |_, _| {}).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 3, .. }));
        assert_eq!(
            fs::read_to_string(&destination).unwrap(),
            "previous good output\n"
        );
        assert!(!backup_path(&destination).exists());
    }
}
