use crate::config::LanguageConfig;

const INDEX_TEMPLATE: &str = include_str!("../../assets/index.html");

/// Render the single page with the configured language labels and
/// placeholders interpolated.
pub fn render_index(lang: &LanguageConfig) -> String {
    INDEX_TEMPLATE
        .replace("{{TARGET1_NAME}}", &lang.target1_name)
        .replace("{{TARGET2_NAME}}", &lang.target2_name)
        .replace("{{TARGET1_PLACEHOLDER}}", &lang.target1_placeholder)
        .replace("{{TARGET2_PLACEHOLDER}}", &lang.target2_placeholder)
}
