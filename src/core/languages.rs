/// 支持的语言，顺序即 `/languages` 的返回顺序
pub const SUPPORTED_LANGUAGES: [&str; 8] = [
    "hindi", "english", "punjabi", "bengali", "marathi", "gujarati", "tamil", "telugu",
];

pub fn supported_languages() -> Vec<String> {
    SUPPORTED_LANGUAGES.iter().map(|l| l.to_string()).collect()
}

pub fn is_supported(language: &str) -> bool {
    let lang = language.to_lowercase();
    SUPPORTED_LANGUAGES.contains(&lang.as_str())
}
