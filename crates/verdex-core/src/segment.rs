//! Word-segmentation seam.
//!
//! Chinese text has no word boundaries, so downstream analysis that needs
//! tokens plugs a segmenter in here. The extraction rules themselves work
//! on raw character patterns and do not require one.

/// One segmented token with an optional part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub word: String,
    pub tag: Option<String>,
}

impl Token {
    pub fn new(word: impl Into<String>, tag: Option<&str>) -> Self {
        Self {
            word: word.into(),
            tag: tag.map(str::to_string),
        }
    }
}

/// A pluggable word segmenter.
pub trait Segmenter {
    fn cut(&self, text: &str) -> Vec<Token>;

    /// Tokens carrying one of the wanted part-of-speech tags.
    fn cut_with_tags(&self, text: &str, tags: &[&str]) -> Vec<Token> {
        self.cut(text)
            .into_iter()
            .filter(|t| t.tag.as_deref().is_some_and(|tag| tags.contains(&tag)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Splits on ASCII whitespace and tags everything as a noun; enough to
    /// exercise the trait surface.
    struct WhitespaceSegmenter;

    impl Segmenter for WhitespaceSegmenter {
        fn cut(&self, text: &str) -> Vec<Token> {
            text.split_whitespace()
                .map(|w| Token::new(w, Some("n")))
                .collect()
        }
    }

    #[test]
    fn test_cut_with_tags_filters() {
        let seg = WhitespaceSegmenter;
        let tokens = seg.cut("法院 判决");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], Token::new("法院", Some("n")));

        assert_eq!(seg.cut_with_tags("法院 判决", &["v"]), vec![]);
        assert_eq!(seg.cut_with_tags("法院 判决", &["n"]).len(), 2);
    }
}
