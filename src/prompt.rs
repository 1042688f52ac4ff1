//! Instruction text sent alongside the image.

use crate::style::Style;

/// Builds the instruction for `style`.
///
/// The two worked examples are fixed and steer the output format; only the
/// requested keyword changes between calls.
pub fn instruction(style: Style) -> String {
    format!(
        "You are an AI assistant that creates detailed image generation prompts. \
Based on the image provided, generate a creative prompt that captures the essence, style, and mood. \
The prompt should be suitable for use with an AI image generator like Midjourney or DALL-E.

Crucially, the generated prompt must incorporate the style or keyword: '{style}'. \
Make the prompt concise but descriptive.

For example, if the style is 'Ultra HD', a good prompt would be: \
'Ultra HD, a cute, smiling banana character holding a sparkling magic wand, surrounded by colorful stars and hearts, cinematic lighting, detailed texture.'
If the style is 'Realistic', a good prompt would be: \
'Realistic photo of a cheerful banana with a magic wand, soft lighting, detailed skin texture, surrounded by dreamy, bokeh stars and hearts.'",
        style = style.label(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embeds_style_label() {
        let text = instruction(Style::SmoothFace);
        assert!(text.contains("incorporate the style or keyword: 'Smooth face'"));
    }

    #[test]
    fn test_examples_are_fixed() {
        for style in Style::ALL {
            let text = instruction(style);
            assert!(text.contains("if the style is 'Ultra HD'"));
            assert!(text.contains("If the style is 'Realistic'"));
        }
    }

    #[test]
    fn test_only_keyword_varies() {
        let a = instruction(Style::Cinematic).replace("'Cinematic'", "'X'");
        let b = instruction(Style::SmoothFace).replace("'Smooth face'", "'X'");
        assert_eq!(a, b);
    }
}
