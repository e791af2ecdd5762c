//! Single-line terminal progress display for long mesh rewrites
use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use vrsetup_core::FlipSummary;

/// Redraws one status line in place; only repaints when the percentage changes
pub struct ProgressLine<W: Write> {
    out: W,
    last_percent: Option<u8>,
}

impl<W: Write> ProgressLine<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_percent: None,
        }
    }

    pub fn update(&mut self, done: usize, total: usize) -> io::Result<()> {
        let percent = percent(done, total);
        if self.last_percent == Some(percent) {
            return Ok(());
        }
        self.last_percent = Some(percent);

        queue!(
            self.out,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Cyan),
            Print(format!("{percent:>3}%")),
            ResetColor,
            Print(format!(" {done}/{total} lines"))
        )?;
        self.out.flush()
    }

    pub fn finish(&mut self, summary: &FlipSummary) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            SetForegroundColor(Color::Green),
            Print("Done!"),
            ResetColor,
            Print(format!(
                " {} lines, {} records flipped\n",
                summary.lines, summary.flipped
            ))
        )?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Plain summary line for output that is not a terminal
pub fn write_summary<W: Write>(mut out: W, summary: &FlipSummary) -> io::Result<()> {
    writeln!(
        out,
        "Done! {} lines, {} records flipped",
        summary.lines, summary.flipped
    )
}

/// Whole percent of `done` over `total`; an empty input counts as complete
pub fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 100;
    }
    (done.min(total) * 100 / total) as u8
}
