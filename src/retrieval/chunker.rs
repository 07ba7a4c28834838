//! Document chunking ahead of indexing.
//!
//! Long articles are split into overlapping windows so ranking sees focused
//! passages instead of whole documents. Splits land on whitespace when any
//! is available inside the window.

pub const DEFAULT_CHUNK_SIZE: usize = 800;
pub const DEFAULT_CHUNK_OVERLAP: usize = 100;

pub fn split_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    assert!(chunk_size > 0, "chunk_size must be positive");
    assert!(overlap < chunk_size, "overlap must be smaller than chunk_size");

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    if chars.is_empty() {
        return Vec::new();
    }
    if chars.len() <= chunk_size {
        let trimmed = text.trim();
        return if trimmed.is_empty() {
            Vec::new()
        } else {
            vec![trimmed.to_string()]
        };
    }

    let mut chunks = Vec::new();
    let mut start = 0usize; // index into `chars`

    loop {
        let end = (start + chunk_size).min(chars.len());

        // Break on the last whitespace inside the window so words stay whole,
        // unless the window has none.
        let cut = if end < chars.len() {
            chars[start..end]
                .iter()
                .rposition(|&(_, c)| c.is_whitespace())
                .map(|offset| start + offset)
                .filter(|&cut| cut > start)
                .unwrap_or(end)
        } else {
            end
        };

        let byte_start = chars[start].0;
        let byte_end = if cut < chars.len() {
            chars[cut].0
        } else {
            text.len()
        };

        let chunk = text[byte_start..byte_end].trim();
        if !chunk.is_empty() {
            chunks.push(chunk.to_string());
        }

        if cut >= chars.len() {
            break;
        }
        // Step back for overlap, but always advance.
        start = cut.saturating_sub(overlap).max(start + 1);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_a_single_chunk() {
        let chunks = split_text("short text", 800, 100);
        assert_eq!(chunks, vec!["short text".to_string()]);
    }

    #[test]
    fn empty_text_yields_no_chunks() {
        assert!(split_text("", 800, 100).is_empty());
        assert!(split_text("   ", 800, 100).is_empty());
    }

    #[test]
    fn long_text_is_split_with_overlap() {
        let text = "word ".repeat(400); // 2000 chars
        let chunks = split_text(&text, 800, 100);

        assert!(chunks.len() >= 2);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 800);
        }
        // Overlap means consecutive chunks share trailing/leading words.
        let first_tail: Vec<&str> = chunks[0].split_whitespace().rev().take(5).collect();
        assert!(first_tail.iter().all(|w| chunks[1].contains(w)));
    }

    #[test]
    fn splits_on_whitespace_boundaries() {
        let text = "alpha beta gamma delta epsilon zeta eta theta".repeat(30);
        for chunk in split_text(&text, 100, 20) {
            assert!(!chunk.starts_with(char::is_whitespace));
            assert!(!chunk.ends_with(char::is_whitespace));
        }
    }

    #[test]
    fn unbroken_text_still_terminates() {
        let text = "x".repeat(3000);
        let chunks = split_text(&text, 800, 100);
        assert!(!chunks.is_empty());
        let total: usize = chunks.iter().map(|c| c.chars().count()).sum();
        assert!(total >= 3000);
    }
}
