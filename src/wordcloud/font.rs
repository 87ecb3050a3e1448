//! A 5x7 bitmap font. Letters are drawn as capitals.

use std::convert::TryFrom;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal distance between the starts of two glyphs.
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Drawn for characters without a glyph.
const REPLACEMENT: [u8; 7] = [0x1F, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1F];

/// Rows of the glyph, top to bottom. Bit 4 is the leftmost pixel.
pub fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        '\'' | '’' => [0x04, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '_' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1F],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        _ => REPLACEMENT,
    }
}

/// Width and height in pixels of `text` drawn at the given integer scale. Saturates at `u32::MAX`.
pub fn text_size(text: &str, scale: u32) -> (u32, u32) {
    let n = text.chars().count();
    if n == 0 {
        return (0, 0);
    }

    let n = u32::try_from(n).unwrap_or(u32::MAX);
    let width = n.saturating_mul(ADVANCE).saturating_sub(1).saturating_mul(scale);
    (width, GLYPH_HEIGHT.saturating_mul(scale))
}

/// Calls `pixel(x, y)` for every set pixel of `text` drawn at `scale`, relative to the top left corner.
pub fn for_each_pixel<F>(text: &str, scale: u32, mut pixel: F)
where
    F: FnMut(u32, u32),
{
    for (i, c) in text.chars().enumerate() {
        let offset = i as u32 * ADVANCE * scale;

        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if (*bits >> (GLYPH_WIDTH - 1 - col)) & 1 == 0 {
                    continue;
                }

                for dy in 0..scale {
                    for dx in 0..scale {
                        pixel(offset + col * scale + dx, row as u32 * scale + dy);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes() {
        assert_eq!(text_size("a", 1), (5, 7));
        assert_eq!(text_size("ab", 1), (11, 7));
        assert_eq!(text_size("ab", 3), (33, 21));
        assert_eq!(text_size("", 3), (0, 0));
    }

    #[test]
    fn huge_sizes_saturate() {
        assert_eq!(text_size("ab", u32::MAX), (u32::MAX, u32::MAX));
        assert_eq!(text_size(&"a".repeat(100_000), 1_000_000).0, u32::MAX);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('é'), REPLACEMENT);
    }

    #[test]
    fn pixels_stay_inside_text_size() {
        let (width, height) = text_size("wordcloud", 2);
        let mut n_pixels = 0;

        for_each_pixel("wordcloud", 2, |x, y| {
            assert!(x < width && y < height);
            n_pixels += 1;
        });

        assert!(n_pixels > 0);
        assert_eq!(n_pixels % 4, 0);
    }

    #[test]
    fn letter_l_pixels() {
        let mut pixels = Vec::new();
        for_each_pixel("l", 1, |x, y| pixels.push((x, y)));

        // vertical bar plus the bottom row
        assert_eq!(pixels.len(), 7 + 4);
        assert!(pixels.contains(&(0, 0)));
        assert!(pixels.contains(&(4, 6)));
        assert!(!pixels.contains(&(4, 0)));
    }
}
