/// Hard-splits `text` into chunks of at most `width` characters.
///
/// Counts Unicode scalar values, not bytes, so accented notes split on the same
/// boundaries a fixed-column renderer sees. Empty text yields no lines.
pub fn wrap_note(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let width = width.max(1);
    let chars = text.chars().collect::<Vec<char>>();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::wrap_note;

    #[test]
    fn wrap_note_splits_on_fixed_width() {
        let note = "A".repeat(250);
        let lines = wrap_note(&note, 110);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 110);
        assert_eq!(lines[1].len(), 110);
        assert_eq!(lines[2].len(), 30);
        assert_eq!(lines.concat(), note);
    }

    #[test]
    fn wrap_note_counts_characters_not_bytes() {
        let note = "ñ".repeat(5);
        let lines = wrap_note(&note, 2);
        assert_eq!(lines, vec!["ññ", "ññ", "ñ"]);
    }

    #[test]
    fn wrap_note_handles_empty_and_degenerate_width() {
        assert!(wrap_note("", 110).is_empty());
        assert_eq!(wrap_note("abc", 0), vec!["a", "b", "c"]);
        assert_eq!(wrap_note("short", 110), vec!["short"]);
    }
}
