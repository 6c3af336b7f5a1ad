//! # Text Preview Service
//!
//! コンソール表示用に長い文字列を切り詰める

/// 先頭 `max_chars` 文字を取り出し `...` を付ける
///
/// 文字列が短くても `...` は常に付く。文字境界で切るのでマルチバイト文字でも安全。
///
/// # 例
///
/// ```
/// use upload_smoke::domain::services::text_preview::preview;
///
/// assert_eq!(preview("abcdef", 3), "abc...");
/// assert_eq!(preview("ab", 3), "ab...");
/// assert_eq!(preview("所見なし", 2), "所見...");
/// ```
pub fn preview(text: &str, max_chars: usize) -> String {
    let end = text
        .char_indices()
        .nth(max_chars)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    format!("{}...", &text[..end])
}
