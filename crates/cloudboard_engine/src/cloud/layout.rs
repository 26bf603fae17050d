//! Deterministic word placement.
//!
//! Canvas space is tracked on a coarse occupancy grid. A summed-area table
//! over the grid answers "is this rectangle free" in constant time, and
//! candidate positions are tried in order of elliptical distance from the
//! canvas center, so the heaviest words settle in the middle.

use cloudboard_core::CloudWord;
use cloudboard_logging::board_trace;

use super::palette::viridis;
use super::CloudSettings;

/// Pixels per occupancy cell.
const CELL: u32 = 4;

/// Glyphs are square bitmaps, so a glyph is as wide as the font is tall.
/// Saturates at `u32::MAX` for absurdly long words.
pub(crate) fn text_width(text: &str, font_size: u32) -> u32 {
    u32::try_from(text.chars().count())
        .unwrap_or(u32::MAX)
        .saturating_mul(font_size)
}

/// A word with its final position and size, in canvas pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub text: String,
    pub x: u32,
    pub y: u32,
    pub font_size: u32,
    pub color: [u8; 3],
}

impl Placement {
    pub fn width(&self) -> u32 {
        text_width(&self.text, self.font_size)
    }

    pub fn height(&self) -> u32 {
        self.font_size
    }
}

struct OccupancyGrid {
    cols: usize,
    rows: usize,
    cells: Vec<bool>,
    /// `(cols + 1) * (rows + 1)` prefix sums of occupied cells.
    sums: Vec<u32>,
    /// Cell coordinates ordered by distance from the center.
    candidates: Vec<(usize, usize)>,
}

impl OccupancyGrid {
    fn new(width: u32, height: u32) -> Self {
        let cols = width.div_ceil(CELL) as usize;
        let rows = height.div_ceil(CELL) as usize;

        let (cx, cy) = (cols as f32 / 2.0, rows as f32 / 2.0);
        let mut candidates: Vec<(usize, usize)> = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (col, row)))
            .collect();
        let distance = |&(col, row): &(usize, usize)| {
            let dx = (col as f32 + 0.5 - cx) / cols as f32;
            let dy = (row as f32 + 0.5 - cy) / rows as f32;
            dx * dx + dy * dy
        };
        candidates.sort_by(|a, b| distance(a).total_cmp(&distance(b)));

        Self {
            cols,
            rows,
            cells: vec![false; cols * rows],
            sums: vec![0; (cols + 1) * (rows + 1)],
            candidates,
        }
    }

    fn occupied_in(&self, col: usize, row: usize, w: usize, h: usize) -> u32 {
        let stride = self.cols + 1;
        let at = |c: usize, r: usize| self.sums[r * stride + c];
        at(col + w, row + h) + at(col, row) - at(col + w, row) - at(col, row + h)
    }

    /// First free top-left cell for a `w` x `h` box, nearest the center first.
    fn find_free(&self, w: usize, h: usize) -> Option<(usize, usize)> {
        if w == 0 || h == 0 || w > self.cols || h > self.rows {
            return None;
        }
        self.candidates.iter().find_map(|&(center_col, center_row)| {
            let col = center_col.checked_sub(w / 2)?;
            let row = center_row.checked_sub(h / 2)?;
            if col + w > self.cols || row + h > self.rows {
                return None;
            }
            (self.occupied_in(col, row, w, h) == 0).then_some((col, row))
        })
    }

    fn occupy(&mut self, col: usize, row: usize, w: usize, h: usize) {
        for r in row..row + h {
            for c in col..col + w {
                self.cells[r * self.cols + c] = true;
            }
        }
        self.rebuild_sums();
    }

    fn rebuild_sums(&mut self) {
        let stride = self.cols + 1;
        for r in 0..self.rows {
            let mut row_total = 0;
            for c in 0..self.cols {
                row_total += u32::from(self.cells[r * self.cols + c]);
                self.sums[(r + 1) * stride + c + 1] = self.sums[r * stride + c + 1] + row_total;
            }
        }
    }
}

fn cells_for(pixels: u32) -> usize {
    pixels.div_ceil(CELL) as usize
}

/// Width in pixels of `text` at `size`, padded by the margin on both sides.
fn padded_width(text: &str, size: u32, margin: u32) -> u32 {
    text_width(text, size).saturating_add(margin.saturating_mul(2))
}

/// Place words in the given order (heaviest first).
///
/// Font sizes follow the relative-scaling rule: each word starts from the
/// previous word's final size scaled by
/// `relative_scaling * weight / prev_weight + (1 - relative_scaling)`, then
/// shrinks until a free spot is found. A word that does not fit even at the
/// minimum size is dropped.
pub fn layout(words: &[CloudWord], settings: &CloudSettings) -> Vec<Placement> {
    let mut grid = OccupancyGrid::new(settings.width, settings.height);
    let mut placements = Vec::with_capacity(words.len().min(settings.max_words));
    let rs = settings.relative_scaling.clamp(0.0, 1.0);

    let mut font_size = settings.max_font_size as f32;
    let mut last_weight = 1.0_f32;
    let total = words.len().min(settings.max_words);

    for (rank, word) in words.iter().take(settings.max_words).enumerate() {
        if word.text.is_empty() || word.weight <= 0.0 {
            continue;
        }
        let narrowest = padded_width(&word.text, settings.min_font_size.max(1), settings.margin);
        if narrowest > settings.width {
            board_trace!("Dropped word of {} bytes: wider than the canvas", word.text.len());
            continue;
        }
        if rs > 0.0 {
            font_size = ((rs * (word.weight / last_weight) + (1.0 - rs)) * font_size).round();
        }
        let mut size = (font_size as u32).min(settings.max_font_size);

        let spot = loop {
            if size == 0 || size < settings.min_font_size {
                break None;
            }
            let w = cells_for(padded_width(&word.text, size, settings.margin));
            let h = cells_for(size.saturating_add(settings.margin.saturating_mul(2)));
            if let Some((col, row)) = grid.find_free(w, h) {
                break Some((col, row, w, h));
            }
            size -= (size / 8).max(1);
        };

        let Some((col, row, w, h)) = spot else {
            board_trace!("Dropped {:?}: no room at minimum size", word.text);
            continue;
        };
        grid.occupy(col, row, w, h);

        let t = if total > 1 {
            rank as f32 / (total - 1) as f32
        } else {
            0.0
        };
        placements.push(Placement {
            text: word.text.clone(),
            x: col as u32 * CELL + settings.margin,
            y: row as u32 * CELL + settings.margin,
            font_size: size,
            color: viridis(t * settings.palette_span),
        });
        font_size = size as f32;
        last_weight = word.weight;
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summed_area_counts_occupied_cells() {
        let mut grid = OccupancyGrid::new(40, 40);
        assert_eq!(grid.occupied_in(0, 0, 10, 10), 0);
        grid.occupy(2, 3, 4, 2);
        assert_eq!(grid.occupied_in(0, 0, 10, 10), 8);
        assert_eq!(grid.occupied_in(2, 3, 1, 1), 1);
        assert_eq!(grid.occupied_in(6, 0, 4, 10), 0);
    }

    #[test]
    fn first_candidate_is_central() {
        let grid = OccupancyGrid::new(400, 200);
        let (col, row) = grid.find_free(2, 2).unwrap();
        assert_eq!((col, row), (48, 23));
    }

    #[test]
    fn text_width_saturates() {
        assert_eq!(text_width("abc", 10), 30);
        assert_eq!(text_width("abc", u32::MAX), u32::MAX);
    }

    #[test]
    fn oversized_boxes_never_fit() {
        let grid = OccupancyGrid::new(40, 40);
        assert_eq!(grid.find_free(11, 1), None);
        assert_eq!(grid.find_free(0, 1), None);
    }
}
