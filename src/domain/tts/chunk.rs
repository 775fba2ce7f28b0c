use once_cell::sync::Lazy;
use regex::Regex;

/// Matches runs of sentence-ending punctuation followed by whitespace.
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+\s+").unwrap());

/// Split text into chunks of at most `max_chars` characters, preferring
/// sentence boundaries, then word boundaries.
///
/// A single word longer than `max_chars` is hard-truncated to exactly
/// `max_chars` characters and the rest of the word is dropped. This is the
/// one lossy case; everything else preserves input order and content.
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    if char_len(text) <= max_chars {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for sentence in split_sentences(text) {
        let sentence_len = char_len(sentence);

        if !current.is_empty() && char_len(&current) + 1 + sentence_len > max_chars {
            chunks.push(std::mem::take(&mut current));
        }

        if sentence_len > max_chars {
            // Sentence alone exceeds the ceiling, fall back to packing words
            for word in sentence.split_whitespace() {
                let word_len = char_len(word);

                if !current.is_empty() && char_len(&current) + 1 + word_len > max_chars {
                    chunks.push(std::mem::take(&mut current));
                }

                if word_len > max_chars {
                    chunks.push(word.chars().take(max_chars).collect());
                } else {
                    if !current.is_empty() {
                        current.push(' ');
                    }
                    current.push_str(word);
                }
            }
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(sentence);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Split text into sentences, keeping the terminating punctuation with each
/// sentence. Text after the last boundary is returned as a final sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut last_end = 0;

    for mat in SENTENCE_BOUNDARY.find_iter(text) {
        let sentence = text[last_end..mat.end()].trim_end();
        if !sentence.is_empty() {
            sentences.push(sentence);
        }
        last_end = mat.end();
    }

    if last_end < text.len() {
        let remaining = text[last_end..].trim();
        if !remaining.is_empty() {
            sentences.push(remaining);
        }
    }

    sentences
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_a_single_chunk() {
        let text = "This is a short text.";
        assert_eq!(chunk_text(text, 4000), vec![text.to_string()]);
    }

    #[test]
    fn every_chunk_respects_the_ceiling() {
        let text = "This is a sentence. ".repeat(300);
        let chunks = chunk_text(&text, 4000);

        assert!(chunks.len() > 1, "text should split into multiple chunks");
        for chunk in &chunks {
            assert!(
                chunk.chars().count() <= 4000,
                "chunk of {} chars exceeds ceiling",
                chunk.chars().count()
            );
        }
    }

    #[test]
    fn sentence_boundaries_are_preferred() {
        let chunks = chunk_text("Sentence one. Sentence two. Sentence three.", 15);

        assert_eq!(
            chunks,
            vec!["Sentence one.", "Sentence two.", "Sentence three."]
        );
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 15);
        }
    }

    #[test]
    fn word_order_is_preserved() {
        let text = "One two three four. Five six seven eight. Nine ten eleven twelve.";
        let chunks = chunk_text(text, 20);

        let original: Vec<&str> = text.split_whitespace().collect();
        let joined = chunks.join(" ");
        let reassembled: Vec<&str> = joined.split_whitespace().collect();
        assert_eq!(original, reassembled);
    }

    #[test]
    fn long_sentence_falls_back_to_words() {
        let text = "word ".repeat(50) + "end";
        let chunks = chunk_text(&text, 12);

        for chunk in &chunks {
            assert!(chunk.chars().count() <= 12);
        }
        assert!(chunks.len() > 1);
    }

    #[test]
    fn oversize_word_is_truncated_to_exactly_max_chars() {
        let word = "a".repeat(30);
        let text = format!("short. {} tail.", word);
        let chunks = chunk_text(&text, 10);

        assert!(chunks.iter().any(|c| c == &"a".repeat(10)));
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 10);
        }
    }

    #[test]
    fn text_exactly_at_ceiling_is_one_chunk() {
        let text = "a".repeat(4000);
        let chunks = chunk_text(&text, 4000);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].chars().count(), 4000);
    }

    #[test]
    fn text_just_over_ceiling_splits() {
        let text = "word ".repeat(810);
        let chunks = chunk_text(text.trim(), 4000);
        assert!(chunks.len() >= 2);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 4000);
        }
    }

    #[test]
    fn multibyte_text_is_counted_in_chars() {
        let text = "é".repeat(10);
        let chunks = chunk_text(&text, 4);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 4);
        }
    }
}
