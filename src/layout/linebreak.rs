use log::warn;

use crate::font::GlyphProvider;
use crate::units::Px;

use super::Direction;

/// Jumps over a line of text and finds the index where the next line starts.
///
/// Scans forward from `start`, accumulating glyph advances along the row
/// axis. The returned index is one past the last character that belongs to
/// the line, which is also where the next line begins:
///
/// * An explicit `\n` always ends the line and is consumed (the index after
///   the newline is returned), no matter how much room remains.
/// * When the text overflows `max_extent`, the line ends at the most recent
///   space or hyphen if one was seen since `start` (break-after, so the
///   break character stays on this line), otherwise right before the
///   overflowing character. Breaking mid-word is a best effort when a word
///   is wider than the whole row.
/// * A scan that reaches the end of the buffer returns `buf.len()`.
///
/// Each character contributes `letter_spacing` plus its advance, and the sum
/// is compared against `max_extent` *after* adding, so a line whose glyphs
/// total exactly `max_extent` still fits.
///
/// Characters the font has no glyph for contribute nothing and are skipped;
/// see [`GlyphProvider`]. Returns `start` itself only when the very first
/// measured character cannot fit, which is the caller's cue that there is no
/// horizontal space for any text at all.
pub fn find_next_line_end(
    buf: &[u8],
    font: &impl GlyphProvider,
    direction: Direction,
    start: usize,
    letter_spacing: Px,
    max_extent: Px,
) -> usize {
    debug_assert!(start <= buf.len());
    if buf.is_empty() {
        // Special case -- nothing to do here.
        return 0;
    }

    let mut cut_off = start;
    let mut found_cut_off = false;
    let mut pos = Px::ZERO;
    for (i, &ch) in buf.iter().enumerate().skip(start) {
        // Linebreak encountered, we are done here.
        if ch == b'\n' {
            return i + 1;
        }

        // Check if this is a potential cut-off point. Cut-off is used if we
        // run out of space before we reach an actual linebreak.
        if ch == b' ' || ch == b'-' {
            cut_off = i + 1;
            found_cut_off = true;
        }

        let Some(metrics) = font.metrics(ch) else {
            // Character has no glyph, just skip it since we can't do
            // anything with it.
            warn!("no glyph for character {ch:#04x}, skipping");
            continue;
        };

        pos += letter_spacing + metrics.advance(direction);
        if pos > max_extent {
            // No more room on the row! If we found a cut-off point, we use
            // it (space, hyphen). Otherwise print what we can and bail,
            // even if that splits a word.
            return if found_cut_off { cut_off } else { i };
        }
    }
    buf.len()
}

/// Measures a finished row over `[start, end)`: width is the summed advance
/// along the row axis, height the tallest cross-axis extent. Letter spacing
/// is not part of the row width. Unprintable characters contribute nothing
/// and do not raise the height.
pub(super) fn row_metrics(
    buf: &[u8],
    font: &impl GlyphProvider,
    direction: Direction,
    start: usize,
    end: usize,
) -> (Px, Px) {
    let mut width = Px::ZERO;
    let mut height = Px::ZERO;
    for &ch in &buf[start..end] {
        // Unprintables were already reported when the line was broken.
        let Some(metrics) = font.metrics(ch) else {
            continue;
        };
        width += metrics.advance(direction);
        height = height.max(metrics.cross(direction));
    }
    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FakeFont;

    fn next_line_end(buf: &[u8], start: usize, max_extent: u16) -> usize {
        find_next_line_end(
            buf,
            &FakeFont,
            Direction::Horizontal,
            start,
            Px::ZERO,
            Px(max_extent),
        )
    }

    #[test]
    fn empty_buffer_returns_zero() {
        assert_eq!(next_line_end(b"", 0, 16), 0);
    }

    #[test]
    fn breaks_mid_word_when_no_cut_off_exists() {
        // First three letters fit exactly (8 + 4 + 4 = 16); there is no
        // natural break point, so the word is cut.
        assert_eq!(next_line_end(b"ABBABB", 0, 16), 3);
    }

    #[test]
    fn returns_start_when_nothing_fits() {
        assert_eq!(next_line_end(b"A", 0, 7), 0);
    }

    #[test]
    fn explicit_newline_always_wins() {
        // More would fit, but the linebreak ends the line.
        assert_eq!(next_line_end(b"A\nB", 0, 16), 2);
    }

    #[test]
    fn exact_fit_needs_no_cut_off() {
        // A cut-off exists at the space, but the whole line fits exactly
        // (4 + 8 + 4 = 16) so it is not used.
        assert_eq!(next_line_end(b"B B", 0, 16), 3);
    }

    #[test]
    fn wraps_after_last_space() {
        // "AB " measures 8 + 4 + 8 = 20 > 16, so the line breaks after the
        // space recorded as cut-off.
        assert_eq!(next_line_end(b"AB AB", 0, 16), 3);
    }

    #[test]
    fn hyphen_is_a_cut_off() {
        // "AB-" fits in 24 (8 + 4 + 8 = 20); the next letter overflows and
        // the line breaks after the hyphen, which stays on the line.
        assert_eq!(next_line_end(b"AB-AB", 0, 24), 3);
    }

    #[test]
    fn unprintable_characters_consume_no_space() {
        let _ = env_logger::builder().is_test(true).try_init();
        // 0x01 has no glyph; the remaining 'A' fits 8px exactly.
        assert_eq!(next_line_end(&[0x01, b'A'], 0, 8), 2);
    }

    #[test]
    fn breaks_are_greedy() {
        // Every non-EOF break either sits right after a break character or
        // had no earlier break character to use since the line started.
        let buf = b"AB A-BA BBB\nA ABBABBABB";
        let mut start = 0;
        while start < buf.len() {
            let end = next_line_end(buf, start, 16);
            assert!(end > start);
            if end < buf.len() {
                let is_break = |ch: u8| matches!(ch, b' ' | b'-' | b'\n');
                assert!(
                    is_break(buf[end - 1]) || !buf[start..end].iter().copied().any(is_break)
                );
            }
            start = end;
        }
    }

    #[test]
    fn scan_starts_mid_buffer() {
        let buf = b"ABBABB";
        let first = next_line_end(buf, 0, 16);
        assert_eq!(first, 3);
        // Second row: "ABB" = 8 + 4 + 4 = 16, fits exactly to the end.
        assert_eq!(next_line_end(buf, first, 16), buf.len());
    }

    #[test]
    fn end_is_never_before_start() {
        let buf = b"A-BB A\nBBA";
        for start in 0..=buf.len() {
            assert!(next_line_end(buf, start, 16) >= start);
        }
    }

    #[test]
    fn letter_spacing_counts_toward_overflow() {
        // With 2px between letters: (2+8) + (2+4) = 16 fits, third letter
        // would reach 22.
        assert_eq!(
            find_next_line_end(b"ABB", &FakeFont, Direction::Horizontal, 0, Px(2), Px(16)),
            2
        );
    }

    #[test]
    fn vertical_direction_measures_heights() {
        // Vertically every FakeFont glyph advances by its 8px height, so
        // only two fit in 16.
        assert_eq!(
            find_next_line_end(b"BBB", &FakeFont, Direction::Vertical, 0, Px::ZERO, Px(16)),
            2
        );
    }

    #[test]
    fn row_metrics_sums_advances_and_takes_tallest_cross() {
        let (w, h) = row_metrics(b"AB", &FakeFont, Direction::Horizontal, 0, 2);
        assert_eq!((w, h), (Px(12), Px(8)));

        // Transposed: width is the summed heights, height the widest glyph.
        let (w, h) = row_metrics(b"AB", &FakeFont, Direction::Vertical, 0, 2);
        assert_eq!((w, h), (Px(16), Px(8)));

        // Unprintables contribute nothing.
        let (w, h) = row_metrics(&[0x01, b'B'], &FakeFont, Direction::Horizontal, 0, 2);
        assert_eq!((w, h), (Px(4), Px(8)));
    }
}
