/// Telegram's per-message text limit, counted in UTF-16 code units
pub const MAX_MESSAGE_LENGTH: usize = 4096;

/// Length of `text` the way Telegram measures it
pub fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Split long text at newlines so each chunk holds at most `max_units` UTF-16
/// code units. A boundary between lines consumes exactly one `'\n'`, so
/// joining the chunks with `"\n"` restores the text. Lines longer than the
/// limit are hard-split on char boundaries.
pub fn split_message(text: &str, max_units: usize) -> Vec<String> {
    if max_units == 0 || utf16_len(text) <= max_units {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current: Option<String> = None;
    let mut current_len = 0;

    for line in text.split('\n') {
        let line_len = utf16_len(line);

        if let Some(mut chunk) = current.take() {
            if current_len + 1 + line_len <= max_units {
                chunk.push('\n');
                chunk.push_str(line);
                current_len += 1 + line_len;
                current = Some(chunk);
                continue;
            }
            chunks.push(chunk);
        }

        if line_len > max_units {
            let mut pieces = hard_split(line, max_units);
            // The tail of an oversized line can still share a chunk with what follows
            let tail = pieces.pop().unwrap_or_default();
            chunks.extend(pieces);
            current_len = utf16_len(&tail);
            current = Some(tail);
        } else {
            current_len = line_len;
            current = Some(line.to_string());
        }
    }

    if let Some(chunk) = current {
        chunks.push(chunk);
    }

    chunks
}

/// Cut `text` to at most `max_units` UTF-16 code units, marking the cut with `…`
pub fn truncate_utf16(text: &str, max_units: usize) -> String {
    if utf16_len(text) <= max_units {
        return text.to_string();
    }

    let budget = max_units.saturating_sub(1);
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        if used + c.len_utf16() > budget {
            break;
        }
        used += c.len_utf16();
        out.push(c);
    }
    if max_units > 0 {
        out.push('…');
    }
    out
}

fn hard_split(line: &str, max_units: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_len = 0;

    for c in line.chars() {
        if piece_len + c.len_utf16() > max_units && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_len = 0;
        }
        piece.push(c);
        piece_len += c.len_utf16();
    }
    pieces.push(piece);

    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_message_short() {
        assert_eq!(split_message("Hello world", 100), vec!["Hello world"]);
    }

    #[test]
    fn test_split_message_empty() {
        assert_eq!(split_message("", 100), vec![""]);
    }

    #[test]
    fn test_split_message_multiline() {
        let chunks = split_message("Line 1\nLine 2\nLine 3\nLine 4", 15);
        assert_eq!(chunks, vec!["Line 1\nLine 2", "Line 3\nLine 4"]);
        assert!(chunks.iter().all(|c| utf16_len(c) <= 15));
    }

    #[test]
    fn test_split_message_keeps_blank_lines() {
        let text = format!("\n\n{}\n\n{}", "a".repeat(8), "b".repeat(8));
        let chunks = split_message(&text, 10);
        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| utf16_len(c) <= 10));
        assert_eq!(chunks.join("\n"), text);
    }

    #[test]
    fn test_split_message_rejoins_to_input() {
        // Longest line is 16 units, so no line needs a hard split
        let text = "first\n\n\nsecond line here\n\nthird\n\n";
        for max in [16, 20, 25] {
            let chunks = split_message(text, max);
            assert!(chunks.len() > 1, "max {}", max);
            assert!(chunks.iter().all(|c| utf16_len(c) <= max), "max {}", max);
            assert_eq!(chunks.join("\n"), text, "max {}", max);
        }
    }

    #[test]
    fn test_split_message_long_line() {
        let line = "a".repeat(25);
        let chunks = split_message(&line, 10);
        assert_eq!(chunks, vec!["a".repeat(10), "a".repeat(10), "a".repeat(5)]);
    }

    #[test]
    fn test_split_message_multibyte() {
        let line = "é".repeat(7);
        let chunks = split_message(&line, 3);
        assert_eq!(chunks, vec!["ééé", "ééé", "é"]);
    }

    #[test]
    fn test_split_message_counts_utf16_units() {
        // Each emoji is two UTF-16 code units
        let line = "😀".repeat(3);
        assert_eq!(utf16_len(&line), 6);

        let chunks = split_message(&line, 4);
        assert_eq!(chunks, vec!["😀😀", "😀"]);
        assert!(chunks.iter().all(|c| utf16_len(c) <= 4));
    }

    #[test]
    fn test_truncate_utf16() {
        assert_eq!(truncate_utf16("short", 10), "short");

        let cut = truncate_utf16(&"x".repeat(20), 10);
        assert_eq!(utf16_len(&cut), 10);
        assert!(cut.ends_with('…'));

        let cut = truncate_utf16(&"😀".repeat(10), 6);
        assert!(utf16_len(&cut) <= 6);
        assert!(cut.ends_with('…'));
    }
}
