use crate::element::Element;
use crate::error::EditorError;

/// Serialize the current element collection into the payload handed to the
/// export surface. The editor core treats the output as opaque; turning it
/// into HTML or framework code is the (external) exporter's business.
pub fn export_payload(elements: &[Element]) -> Result<String, EditorError> {
    Ok(serde_json::to_string_pretty(elements)?)
}

/// Fabricated deployment URL for the simulated publish flow
pub fn fabricated_publish_url(design_name: &str) -> String {
    let slug: String = design_name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    format!("https://{}.pagecraft.site", slug.trim_matches('-'))
}
