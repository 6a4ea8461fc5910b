//! Sentence-boundary chunking for large text bodies

/// Splits text into bounded-size chunks along sentence boundaries
///
/// Sentences are accumulated greedily until the size limit; a single
/// sentence longer than the limit is emitted as its own oversized chunk
/// rather than split mid-sentence.
pub struct SentenceChunker {
    max_chunk_size: usize,
}

impl SentenceChunker {
    /// Create a chunker with the given size limit
    pub fn new(max_chunk_size: usize) -> Self {
        Self { max_chunk_size }
    }

    /// Chunk the given text
    ///
    /// Output order equals input order; emitted chunks are trimmed and
    /// never empty. Deterministic, no side effects.
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut current = String::new();

        for sentence in split_sentences(text) {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }

            if current.is_empty() {
                if sentence.len() > self.max_chunk_size {
                    // A lone sentence over the limit is emitted whole.
                    chunks.push(sentence.to_string());
                } else {
                    current.push_str(sentence);
                }
            } else if current.len() + 1 + sentence.len() > self.max_chunk_size {
                chunks.push(std::mem::take(&mut current));
                current.push_str(sentence);
            } else {
                current.push(' ');
                current.push_str(sentence);
            }
        }

        if !current.is_empty() {
            chunks.push(current);
        }

        chunks
    }
}

/// Split at end-of-sentence punctuation followed by whitespace
///
/// The boundary whitespace stays attached to the following segment and is
/// trimmed away during accumulation.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            if let Some(&(next_start, next)) = chars.peek() {
                if next.is_whitespace() {
                    sentences.push(&text[start..next_start]);
                    start = next_start;
                }
            }
        }
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn normalize(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn test_small_text_is_one_chunk() {
        let chunker = SentenceChunker::new(100);
        let chunks = chunker.chunk("Short text here.");
        assert_eq!(chunks, vec!["Short text here."]);
    }

    #[test]
    fn test_splits_at_sentence_boundaries() {
        let chunker = SentenceChunker::new(45);
        let chunks = chunker.chunk("First sentence here. Second sentence here. Third one.");

        assert_eq!(
            chunks,
            vec!["First sentence here. Second sentence here.", "Third one."]
        );
    }

    #[test]
    fn test_accumulates_until_limit() {
        let chunker = SentenceChunker::new(50);
        let chunks = chunker.chunk("One. Two. Three. Four.");
        assert_eq!(chunks, vec!["One. Two. Three. Four."]);
    }

    #[test]
    fn test_oversized_sentence_emitted_whole() {
        let chunker = SentenceChunker::new(10);
        let long = "this single sentence is far beyond the limit.";
        let chunks = chunker.chunk(&format!("Hi. {} Bye.", long));

        assert_eq!(chunks, vec!["Hi.", long, "Bye."]);
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        let chunker = SentenceChunker::new(100);
        assert!(chunker.chunk("").is_empty());
        assert!(chunker.chunk("   \n\t ").is_empty());
    }

    #[test]
    fn test_no_terminator_is_one_segment() {
        let chunker = SentenceChunker::new(100);
        let chunks = chunker.chunk("no terminator at all");
        assert_eq!(chunks, vec!["no terminator at all"]);
    }

    #[test]
    fn test_punctuation_without_whitespace_does_not_split() {
        let chunker = SentenceChunker::new(15);
        // The decimal point is not followed by whitespace.
        let chunks = chunker.chunk("Pi is 3.14159 ok. Next.");
        assert_eq!(chunks, vec!["Pi is 3.14159 ok.", "Next."]);
    }

    #[test]
    fn test_question_and_exclamation_boundaries() {
        let chunker = SentenceChunker::new(12);
        let chunks = chunker.chunk("Really? Yes! Fine.");
        assert_eq!(chunks, vec!["Really? Yes!", "Fine."]);
    }

    #[test]
    fn test_whitespace_normalized_at_boundaries() {
        let chunker = SentenceChunker::new(100);
        let chunks = chunker.chunk("First.\n\nSecond.   Third.");
        assert_eq!(chunks, vec!["First. Second. Third."]);
    }

    proptest! {
        #[test]
        fn prop_reconstructs_input_modulo_whitespace(
            sentences in proptest::collection::vec("[a-z]{1,10}( [a-z]{1,10}){0,6}[.!?]", 0..16)
        ) {
            let text = sentences.join(" ");
            let chunks = SentenceChunker::new(40).chunk(&text);
            prop_assert_eq!(normalize(&chunks.join(" ")), normalize(&text));
        }

        #[test]
        fn prop_chunks_respect_limit_unless_single_sentence(
            sentences in proptest::collection::vec("[a-z]{1,10}( [a-z]{1,10}){0,6}[.!?]", 0..16),
            max in 10usize..120,
        ) {
            let text = sentences.join(" ");
            for chunk in SentenceChunker::new(max).chunk(&text) {
                prop_assert!(chunk.len() <= max || split_sentences(&chunk).len() == 1);
            }
        }

        #[test]
        fn prop_no_empty_chunks(text in "[a-z .!?\n]{0,200}") {
            for chunk in SentenceChunker::new(25).chunk(&text) {
                prop_assert!(!chunk.trim().is_empty());
                prop_assert_eq!(chunk.trim(), chunk.as_str());
            }
        }
    }
}
