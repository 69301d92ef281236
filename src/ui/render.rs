//! Page frames drawn onto a character grid
//!
//! One cell covers `CELL_WIDTH` x `CELL_HEIGHT` px of the viewport, so a
//! 144x45 terminal shows the 1440x900 reference viewport.

use std::io::{self, Write};

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, QueueableCommand};
use folio::page::IntroFrame;
use folio::layout::MAX_VIEWPORT;
use folio::particles::{Particle, ParticleCanvas, ParticleField};
use folio::{ElementFrame, PageFrame, Role, Viewport};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::ui::primitives::icon::Icon;
use crate::ui::theme::{borders, borders_ascii, Palette};
use crate::ui::widgets::progress::ProgressBar;

pub const CELL_WIDTH: f64 = 10.0;
pub const CELL_HEIGHT: f64 = 20.0;

/// Elements fainter than this are drawn muted
const FAINT: f64 = 0.5;

/// Viewport a terminal of `cols` x `rows` stands for
pub fn viewport_for(cols: u16, rows: u16) -> Viewport {
    Viewport::new(cols as f64 * CELL_WIDTH, rows as f64 * CELL_HEIGHT)
}

/// Cells covering `px`, at least one and never more than the largest viewport needs
fn cells_along(px: f64, cell: f64) -> u16 {
    let max = (MAX_VIEWPORT / cell).ceil();
    let n = (px / cell).round();
    if n.is_finite() {
        n.clamp(1.0, max) as u16
    } else {
        1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Text,
    Accent,
    Muted,
}

impl Tone {
    fn color(self, palette: &Palette) -> Color {
        match self {
            Tone::Text => palette.text,
            Tone::Accent => palette.accent,
            Tone::Muted => palette.muted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cell {
    ch: char,
    tone: Tone,
    /// Right half of a double-width character
    tail: bool,
}

const BLANK: Cell = Cell {
    ch: ' ',
    tone: Tone::Text,
    tail: false,
};

#[derive(Debug, Clone)]
pub struct Grid {
    cols: u16,
    rows: u16,
    cell_w: f64,
    cell_h: f64,
    cells: Vec<Cell>,
    unicode: bool,
}

impl Grid {
    pub fn new(cols: u16, rows: u16, viewport: Viewport, unicode: bool) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cell_w: viewport.width / cols as f64,
            cell_h: viewport.height / rows as f64,
            cells: vec![BLANK; cols as usize * rows as usize],
            unicode,
        }
    }

    /// Grid sized so that one cell is the reference cell size
    pub fn for_viewport(viewport: Viewport, unicode: bool) -> Self {
        let cols = cells_along(viewport.width, CELL_WIDTH);
        let rows = cells_along(viewport.height, CELL_HEIGHT);
        Self::new(cols, rows, viewport, unicode)
    }

    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    fn col_of(&self, x: f64) -> i32 {
        (x / self.cell_w).round() as i32
    }

    fn row_of(&self, y: f64) -> i32 {
        (y / self.cell_h).round() as i32
    }

    fn span_cols(&self, width: f64) -> usize {
        ((width / self.cell_w).floor() as usize).max(1)
    }

    fn span_rows(&self, height: f64) -> usize {
        ((height / self.cell_h).floor() as usize).max(1)
    }

    /// Write `text` starting at (`col`, `row`), clipped to the grid.
    pub fn put(&mut self, col: i32, row: i32, text: &str, tone: Tone) {
        let mut c = col;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0) as i32;
            if w == 0 {
                continue;
            }
            if c >= self.cols as i32 {
                break;
            }
            if w == 2 && c + 1 >= self.cols as i32 {
                break;
            }
            if let Some(i) = self.index(c, row) {
                self.cells[i] = Cell {
                    ch,
                    tone,
                    tail: false,
                };
                if w == 2 {
                    if let Some(j) = self.index(c + 1, row) {
                        self.cells[j] = Cell {
                            ch: ' ',
                            tone,
                            tail: true,
                        };
                    }
                }
            }
            c += w;
        }
    }

    fn fill_rows(&mut self, from: i32, to: i32) {
        for row in from.max(0)..to.min(self.rows as i32) {
            let start = row as usize * self.cols as usize;
            self.cells[start..start + self.cols as usize].fill(BLANK);
        }
    }

    fn row_text(&self, row: u16) -> String {
        let start = row as usize * self.cols as usize;
        self.cells[start..start + self.cols as usize]
            .iter()
            .filter(|c| !c.tail)
            .map(|c| c.ch)
            .collect()
    }

    /// Draw the grid at the top-left of the screen.
    pub fn draw(&self, out: &mut impl Write, palette: Option<Palette>) -> io::Result<()> {
        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            self.write_row(out, row, palette.as_ref())?;
        }
        out.queue(ResetColor)?;
        out.flush()
    }

    /// Print the grid as lines.
    pub fn print(&self, out: &mut impl Write, palette: Option<Palette>) -> io::Result<()> {
        let last = (0..self.rows)
            .rev()
            .find(|&row| !self.row_text(row).trim().is_empty())
            .map_or(0, |row| row + 1);
        for row in 0..last {
            self.write_row(out, row, palette.as_ref())?;
            out.queue(ResetColor)?;
            out.write_all(b"\n")?;
        }
        out.flush()
    }

    fn write_row(&self, out: &mut impl Write, row: u16, palette: Option<&Palette>) -> io::Result<()> {
        let start = row as usize * self.cols as usize;
        let cells = &self.cells[start..start + self.cols as usize];
        let Some(palette) = palette else {
            out.queue(Print(self.row_text(row)))?;
            return Ok(());
        };

        let mut run = String::new();
        let mut tone = None;
        for cell in cells.iter().filter(|c| !c.tail) {
            if tone != Some(cell.tone) && cell.ch != ' ' {
                if !run.is_empty() {
                    out.queue(Print(std::mem::take(&mut run)))?;
                }
                out.queue(SetForegroundColor(cell.tone.color(palette)))?;
                tone = Some(cell.tone);
            }
            run.push(cell.ch);
        }
        out.queue(Print(run))?;
        Ok(())
    }
}

impl ParticleCanvas for Grid {
    fn size(&self) -> (f64, f64) {
        (
            self.cols as f64 * self.cell_w,
            self.rows as f64 * self.cell_h,
        )
    }

    fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    fn dot(&mut self, particle: &Particle) {
        let col = (particle.x / self.cell_w).floor() as i32;
        let row = (particle.y / self.cell_h).floor() as i32;
        let Some(i) = self.index(col, row) else {
            return;
        };
        if self.cells[i] != BLANK {
            return;
        }
        let icon = if particle.size > 2.0 && particle.opacity > FAINT {
            Icon::ParticleBright
        } else {
            Icon::Particle
        };
        self.put(col, row, icon.render(self.unicode), Tone::Muted);
    }
}

/// Greedy word wrap by display width. Explicit newlines are kept.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let needed = if line.is_empty() {
                word.width()
            } else {
                line.width() + 1 + word.width()
            };
            if needed > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
        }
        lines.push(line);
    }
    lines
}

pub struct Renderer {
    unicode: bool,
}

impl Renderer {
    pub fn new(unicode: bool) -> Self {
        Self { unicode }
    }

    /// Draw `frame` onto a fresh grid, particles underneath everything.
    pub fn render(&self, frame: &PageFrame, particles: Option<&ParticleField>, grid: &mut Grid) {
        match particles {
            Some(field) => field.draw(Some(&mut *grid as &mut dyn ParticleCanvas)),
            None => grid.clear(),
        }

        for section in &frame.sections {
            for element in &section.elements {
                self.element(grid, element);
            }
        }
        self.nav(grid, frame);
        for element in &frame.chat {
            self.element(grid, element);
        }
        if let Some(intro) = &frame.intro {
            self.intro(grid, intro);
        }
    }

    fn element(&self, grid: &mut Grid, element: &ElementFrame) {
        if !element.visible() {
            return;
        }
        let (x, y) = element.screen_position();
        let col = grid.col_of(x);
        let row = grid.row_of(y);
        let cols = grid.span_cols(element.width);
        let rows = grid.span_rows(element.height);
        let faint = element.state.opacity < FAINT;

        match element.role {
            Role::Line => {
                let mut rule = ProgressBar::line(cols.min(u16::MAX as usize) as u16);
                rule.set(element.state.scale_x);
                grid.put(col, row, &rule.render(self.unicode), tone_of(faint, Tone::Accent));
            }
            Role::Card => {
                self.card(grid, col, row, cols, rows, &element.text, tone_of(faint, Tone::Text));
            }
            Role::Button => {
                let label = format!("[ {} ]", element.text);
                let base = if element.active { Tone::Text } else { Tone::Accent };
                grid.put(col, row, &label, tone_of(faint, base));
            }
            Role::Question => {
                let icon = if element.active {
                    Icon::FaqOpen
                } else {
                    Icon::FaqClosed
                };
                if element.focused {
                    grid.put(col - 2, row, Icon::Focus.render(self.unicode), Tone::Accent);
                }
                let text = format!("{}  {}", element.text, icon.render(self.unicode));
                let base = if element.active { Tone::Accent } else { Tone::Text };
                self.text(grid, col, row, cols, rows, &text, tone_of(faint, base));
            }
            Role::Field => {
                if element.focused {
                    grid.put(col - 2, row, Icon::Focus.render(self.unicode), Tone::Accent);
                }
                let lines = rows.saturating_sub(1).max(1);
                let base = if element.active { Tone::Text } else { Tone::Muted };
                self.text(grid, col, row, cols, lines, &element.text, tone_of(faint, base));
                let rule = if self.unicode {
                    borders::HORIZONTAL
                } else {
                    borders_ascii::HORIZONTAL
                };
                grid.put(col, row + lines as i32, &rule.repeat(cols), Tone::Muted);
            }
            Role::Label | Role::Accent | Role::Display => {
                self.text(grid, col, row, cols, rows, &element.text, tone_of(faint, Tone::Accent));
            }
            Role::Heading | Role::Body => {
                self.text(grid, col, row, cols, rows, &element.text, tone_of(faint, Tone::Text));
            }
            Role::Muted | Role::Backdrop => {
                self.text(grid, col, row, cols, rows, &element.text, Tone::Muted);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn text(
        &self,
        grid: &mut Grid,
        col: i32,
        row: i32,
        cols: usize,
        rows: usize,
        text: &str,
        tone: Tone,
    ) {
        for (i, line) in wrap_text(text, cols).into_iter().take(rows).enumerate() {
            grid.put(col, row + i as i32, &line, tone);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn card(
        &self,
        grid: &mut Grid,
        col: i32,
        row: i32,
        cols: usize,
        rows: usize,
        text: &str,
        tone: Tone,
    ) {
        if cols < 4 || rows < 3 {
            self.text(grid, col, row, cols, rows, text, tone);
            return;
        }
        let (tl, tr, bl, br, h, v) = if self.unicode {
            (
                borders::TOP_LEFT,
                borders::TOP_RIGHT,
                borders::BOTTOM_LEFT,
                borders::BOTTOM_RIGHT,
                borders::HORIZONTAL,
                borders::VERTICAL,
            )
        } else {
            (
                borders_ascii::TOP_LEFT,
                borders_ascii::TOP_RIGHT,
                borders_ascii::BOTTOM_LEFT,
                borders_ascii::BOTTOM_RIGHT,
                borders_ascii::HORIZONTAL,
                borders_ascii::VERTICAL,
            )
        };
        let inner = cols - 2;
        grid.put(col, row, &format!("{tl}{}{tr}", h.repeat(inner)), Tone::Muted);
        for r in 1..rows - 1 {
            grid.put(col, row + r as i32, v, Tone::Muted);
            grid.put(col + 1, row + r as i32, &" ".repeat(inner), tone);
            grid.put(col + cols as i32 - 1, row + r as i32, v, Tone::Muted);
        }
        grid.put(
            col,
            row + rows as i32 - 1,
            &format!("{bl}{}{br}", h.repeat(inner)),
            Tone::Muted,
        );
        self.text(grid, col + 2, row + 1, inner.saturating_sub(2), rows - 2, text, tone);
    }

    fn nav(&self, grid: &mut Grid, frame: &PageFrame) {
        grid.fill_rows(0, 1);
        grid.put(2, 0, frame.nav.brand, Tone::Accent);

        let mut parts = Vec::new();
        for link in &frame.nav.links {
            parts.push((link.label, link.active));
        }
        let total: usize = parts.iter().map(|(label, _)| label.width() + 4).sum();
        let mut col = grid.cols as i32 - total as i32 - 1;
        for (label, active) in parts {
            if active {
                grid.put(col, 0, Icon::ActiveLink.render(self.unicode), Tone::Accent);
            }
            grid.put(col + 2, 0, label, if active { Tone::Accent } else { Tone::Text });
            col += label.width() as i32 + 4;
        }

        if frame.nav.scrolled {
            let rule = if self.unicode {
                borders::HORIZONTAL
            } else {
                borders_ascii::HORIZONTAL
            };
            grid.fill_rows(1, 2);
            grid.put(0, 1, &rule.repeat(grid.cols as usize), Tone::Muted);
        }
    }

    /// The intro overlay slides up over the page once the logotype is gone.
    fn intro(&self, grid: &mut Grid, intro: &IntroFrame) {
        let rows = grid.rows as i32;
        let offset = (rows as f64 * intro.overlay.y_percent / 100.0).round() as i32;
        grid.fill_rows(offset, offset + rows);

        let center = offset + rows / 2;
        if intro.logotype.visible() {
            let brand = folio::content::BRAND;
            let col = (grid.cols as i32 - brand.width() as i32) / 2;
            let row = center - 1 + grid.row_of(intro.logotype.y);
            let tone = tone_of(intro.logotype.opacity < FAINT, Tone::Accent);
            grid.put(col, row, brand, tone);
        }

        let width = (grid.cols / 4).max(8);
        let mut line = ProgressBar::line(width);
        line.set(intro.line.scale_x);
        let col = (grid.cols as i32 - width as i32) / 2;
        grid.put(col, center + 1, &line.render(self.unicode), Tone::Accent);
    }
}

fn tone_of(faint: bool, tone: Tone) -> Tone {
    if faint {
        Tone::Muted
    } else {
        tone
    }
}
