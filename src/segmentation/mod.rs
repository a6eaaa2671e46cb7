/*!
 * Chinese word segmentation behind an injectable trait.
 *
 * The aligner never talks to a segmentation library directly; it receives a
 * `Segmenter` so the tokenization backend can be swapped (or faked in tests)
 * without touching the alignment logic.
 */

use jieba_rs::Jieba;

/// Word segmentation capability consumed by the aligner.
///
/// Implementations must return non-empty tokens in sentence order.
pub trait Segmenter: Send + Sync {
    /// Segment a sentence into word-like tokens.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Jieba-backed segmenter using the bundled default dictionary.
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl JiebaSegmenter {
    /// Create a segmenter with the default jieba dictionary.
    ///
    /// Dictionary construction is comparatively expensive, so callers should
    /// build one segmenter per run and share it.
    pub fn new() -> Self {
        Self { jieba: Jieba::new() }
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, false)
            .into_iter()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }
}
