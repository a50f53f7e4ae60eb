//! Per-category style templates and prompt assembly.

/// Placeholder replaced by the item's subject description.
pub const SUBJECT_SLOT: &str = "{subject}";

const ANIMALS_STYLE: &str = "A beautiful, high-quality photograph of {subject}. \
Photorealistic with vivid natural colors, soft studio-like lighting, \
and a clean, slightly blurred pastel background. Centered and clearly visible. \
Captured as if by a professional wildlife photographer. \
Sharp focus on the subject, shallow depth of field. \
No text, no labels, no watermarks. Square 1:1 composition.";

const BIRDS_STYLE: &str = "A beautiful, high-quality photograph of {subject}. \
Photorealistic with vivid natural colors, soft natural lighting, \
and a clean, slightly blurred natural background. Centered and clearly visible. \
Captured as if by a professional wildlife photographer. \
Sharp focus on the subject, shallow depth of field. \
No text, no labels, no watermarks. Square 1:1 composition.";

const FOOD_STYLE: &str = "A beautiful, high-quality food photograph of {subject}. \
Photorealistic with vivid appetizing colors, warm studio lighting, \
and a clean, slightly blurred background. Centered and clearly visible. \
Professional food photography style, appetizing presentation. \
Sharp focus on the food, shallow depth of field. \
No text, no labels, no watermarks. Square 1:1 composition.";

const TRANSPORTATION_STYLE: &str = "A beautiful, high-quality photograph of {subject}. \
Photorealistic with vivid colors, natural outdoor lighting, \
and a clean, slightly blurred background. Centered and clearly visible. \
Captured as if by a professional product photographer. \
Sharp focus on the subject, shallow depth of field. \
No text, no labels, no watermarks. Square 1:1 composition.";

const PROFESSION_STYLE: &str = "A beautiful, high-quality photograph of {subject}. \
Photorealistic with natural colors, professional cinematic lighting. \
The scene should clearly convey the profession with appropriate setting and props. \
Sharp focus, cinematic quality, warm and inviting mood. \
No text, no labels, no watermarks. Square 1:1 composition.";

/// Style used by the single-shot test image.
pub const TEST_STYLE: &str = "A beautiful, high-quality photograph of a {subject}. \
The image should be photorealistic with vivid natural colors, soft studio-like lighting, \
and a clean, slightly blurred pastel background. The subject should be centered and clearly visible, \
captured as if by a professional wildlife/product photographer. \
Sharp focus on the subject, shallow depth of field. \
No text, no labels, no watermarks. Square 1:1 composition.";

/// Returns the style template for a category.
///
/// Anything unrecognised gets the animals style.
pub fn style_for(category: &str) -> &'static str {
    match category {
        "birds" => BIRDS_STYLE,
        "food" => FOOD_STYLE,
        "transportation" => TRANSPORTATION_STYLE,
        "profession" => PROFESSION_STYLE,
        _ => ANIMALS_STYLE,
    }
}

/// Fills the template's subject slot with `subject`.
pub fn build_prompt(template: &str, subject: &str) -> String {
    template.replace(SUBJECT_SLOT, subject)
}

/// Builds the full prompt for an item in a category.
pub fn prompt_for(category: &str, subject: &str) -> String {
    build_prompt(style_for(category), subject)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG;

    #[test]
    fn every_template_has_one_slot() {
        for template in [
            ANIMALS_STYLE,
            BIRDS_STYLE,
            FOOD_STYLE,
            TRANSPORTATION_STYLE,
            PROFESSION_STYLE,
            TEST_STYLE,
        ] {
            assert_eq!(template.matches(SUBJECT_SLOT).count(), 1);
        }
    }

    #[test]
    fn subject_is_substituted() {
        let prompt = prompt_for("food", "a bowl of soup");
        assert!(
            prompt.starts_with("A beautiful, high-quality food photograph of a bowl of soup. ")
        );
        assert!(!prompt.contains(SUBJECT_SLOT));
        assert!(prompt.ends_with("Square 1:1 composition."));
    }

    #[test]
    fn unknown_category_falls_back_to_animals() {
        assert_eq!(style_for("dinosaurs"), style_for("animals"));
        assert_ne!(style_for("birds"), style_for("animals"));
    }

    #[test]
    fn each_catalog_category_has_its_own_style() {
        for category in CATALOG.iter().filter(|c| c.name != "animals") {
            assert_ne!(style_for(category.name), ANIMALS_STYLE, "{}", category.name);
        }
    }

    #[test]
    fn descriptions_are_taken_verbatim() {
        let odd = "a {weird} \"quoted\" subject";
        assert!(build_prompt(ANIMALS_STYLE, odd).contains(odd));
    }
}
