use once_cell::sync::Lazy;
use regex::Regex;

use super::types::ModelBlock;

/// `model <Name> {` at the start of a line, so commented-out headers never match.
static MODEL_HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*model\s+([A-Za-z_][A-Za-z0-9_]*)\s*\{")
        .expect("model header regex should be valid")
});

/// Find every model block in source order.
///
/// The body of a block runs from its opening brace to the first closing
/// brace. A header with no closing brace after it is not a block.
#[must_use]
pub fn scan_models(source: &str) -> Vec<ModelBlock<'_>> {
    let mut blocks = Vec::new();
    let mut offset = 0;
    // captures_at keeps `^` anchored to real line starts after the offset
    while let Some(caps) = MODEL_HEADER_REGEX.captures_at(source, offset) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let body_start = whole.end();
        let Some(close) = source[body_start..].find('}') else {
            break;
        };
        blocks.push(ModelBlock {
            name: name.as_str(),
            body: &source[body_start..body_start + close],
        });
        offset = body_start + close + 1;
    }
    blocks
}

/// Model names in source order.
#[must_use]
pub fn model_names(source: &str) -> Vec<String> {
    scan_models(source)
        .into_iter()
        .map(|b| b.name.to_string())
        .collect()
}

/// First block whose name matches `name` exactly.
#[must_use]
pub fn find_model<'a>(source: &'a str, name: &str) -> Option<ModelBlock<'a>> {
    scan_models(source).into_iter().find(|b| b.name == name)
}
