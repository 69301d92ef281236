use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

/// A block of lines redrawn in place, used for inline intro playback.
#[derive(Debug, Default)]
pub struct LiveRegion {
    last_lines: u16,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> u16 {
        self.last_lines
    }

    pub fn clear(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.update(out, "")
    }

    /// Replace the previous content with `content`.
    pub fn update(&mut self, out: &mut impl Write, content: &str) -> io::Result<()> {
        if self.last_lines > 0 {
            out.queue(cursor::MoveUp(self.last_lines))?;
            out.queue(cursor::MoveToColumn(0))?;
            out.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        }

        out.write_all(content.as_bytes())?;
        if !content.is_empty() && !content.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        out.flush()?;

        self.last_lines = line_count(content);
        Ok(())
    }
}

fn line_count(content: &str) -> u16 {
    let lines = content.lines().count();
    lines.min(u16::MAX as usize) as u16
}
