//! Instruction composition for outfit generation

use crate::outfit::StyleProfile;

/// Compose the instruction text for one style.
///
/// A fixed template names the style; profile-derived clauses are appended
/// only when their field is non-empty; a fixed closing clause pins the
/// rendering constraints (flat-lay, no text, no human models, neutral
/// background).
pub fn compose_instruction(style: &str, profile: &StyleProfile) -> String {
    let mut prompt = format!(
        "Analyze this clothing item. Based on its style and color palette, \
         create a complete and distinct '{}' outfit that includes it.",
        style
    );

    if !profile.preferred_styles.is_empty() {
        prompt.push_str(&format!(
            " The outfit should align with these preferred styles: {}.",
            profile.preferred_styles.join(", ")
        ));
    }
    if !profile.favorite_colors.trim().is_empty() {
        prompt.push_str(&format!(
            " Try to incorporate these favorite colors: {}.",
            profile.favorite_colors
        ));
    }
    if !profile.disliked.trim().is_empty() {
        prompt.push_str(&format!(
            " Please strictly avoid these colors, patterns, or items: {}.",
            profile.disliked
        ));
    }

    prompt.push_str(
        " Visualize the entire outfit as a clean, minimalist 'flat-lay' style image \
         on a neutral, solid-color background. Do not include any text, logos, or \
         human models on the image. The item provided should be the central piece \
         of the outfit.",
    );

    prompt
}
