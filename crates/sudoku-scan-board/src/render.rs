use sudoku_scan_core::{Board, GrayImage, BOARD_SIDE, BOX_SIDE};

const GLYPH_W: usize = 5;
const GLYPH_H: usize = 7;

// 5x7 bitmaps for digits 1..=9, one row per byte, MSB = leftmost column.
const GLYPHS: [[u8; GLYPH_H]; 9] = [
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

const CLUE_LUMA: u8 = 0;
const SOLVED_LUMA: u8 = 120;
const LINE_LUMA: u8 = 0;
const BACKGROUND_LUMA: u8 = 255;

/// Render an original/solved comparison grid.
///
/// Original clues are drawn black, digits filled in by the solver mid-gray,
/// so a presentation layer can show the two apart without touching pixels
/// itself. Pure function over the two board snapshots.
pub fn render_comparison(original: &Board, solved: &Board, side: usize) -> GrayImage {
    let mut img = GrayImage::filled(side, side, BACKGROUND_LUMA);
    if side < BOARD_SIDE {
        return img;
    }
    let cell = side / BOARD_SIDE;

    draw_grid_lines(&mut img, cell);

    for row in 0..BOARD_SIDE {
        for col in 0..BOARD_SIDE {
            let clue = original.get(row, col);
            let (digit, luma) = if clue != 0 {
                (clue, CLUE_LUMA)
            } else {
                (solved.get(row, col), SOLVED_LUMA)
            };
            if digit != 0 {
                draw_digit(&mut img, row, col, cell, digit, luma);
            }
        }
    }

    img
}

fn draw_grid_lines(img: &mut GrayImage, cell: usize) {
    let extent = cell * BOARD_SIDE;
    for i in 0..=BOARD_SIDE {
        let thickness = if i % BOX_SIDE == 0 { 2 } else { 1 };
        let base = (i * cell).min(extent - 1);
        for t in 0..thickness {
            let pos = base.saturating_sub(t);
            for j in 0..extent {
                img.set(j, pos, LINE_LUMA);
                img.set(pos, j, LINE_LUMA);
            }
        }
    }
}

fn draw_digit(img: &mut GrayImage, row: usize, col: usize, cell: usize, digit: u8, luma: u8) {
    let glyph = &GLYPHS[(digit - 1) as usize];
    let scale = ((cell * 6 / 10) / GLYPH_H).max(1);
    let gw = GLYPH_W * scale;
    let gh = GLYPH_H * scale;
    if gw >= cell || gh >= cell {
        return; // cell too small to carry a glyph
    }

    let x0 = col * cell + (cell - gw) / 2;
    let y0 = row * cell + (cell - gh) / 2;

    for (gy, &bits) in glyph.iter().enumerate() {
        for gx in 0..GLYPH_W {
            if bits & (1 << (GLYPH_W - 1 - gx)) == 0 {
                continue;
            }
            for sy in 0..scale {
                for sx in 0..scale {
                    img.set(x0 + gx * scale + sx, y0 + gy * scale + sy, luma);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solve;

    fn luma_counts(img: &GrayImage) -> (usize, usize) {
        let clue = img.data.iter().filter(|&&v| v == CLUE_LUMA).count();
        let solved = img.data.iter().filter(|&&v| v == SOLVED_LUMA).count();
        (clue, solved)
    }

    #[test]
    fn clues_and_solutions_render_distinctly() {
        let puzzle: Board =
            "53__7____6__195____98____6_8___6___34__8_3__17___2___6_6____28____419__5____8__79"
                .parse()
                .expect("puzzle string");
        let solved = solve(&puzzle).expect("solvable");

        let img = render_comparison(&puzzle, &solved, 360);
        assert_eq!((img.width, img.height), (360, 360));

        let (clue_px, solved_px) = luma_counts(&img);
        // grid lines share the clue luma, so clue pixels dominate; the
        // solver-only gray must come exclusively from the 51 filled-in digits
        assert!(clue_px > 0);
        assert!(solved_px > 0);
    }

    #[test]
    fn empty_boards_render_only_grid_lines() {
        let img = render_comparison(&Board::empty(), &Board::empty(), 180);
        let (_, solved_px) = luma_counts(&img);
        assert_eq!(solved_px, 0);
        // background still dominates
        let white = img.data.iter().filter(|&&v| v == BACKGROUND_LUMA).count();
        assert!(white > img.data.len() / 2);
    }

    #[test]
    fn degenerate_side_stays_blank() {
        let img = render_comparison(&Board::empty(), &Board::empty(), 4);
        assert_eq!((img.width, img.height), (4, 4));
        assert!(img.data.iter().all(|&v| v == BACKGROUND_LUMA));
    }
}
