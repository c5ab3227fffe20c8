//! Contact-form mode derivation.
//!
//! The form's service field has two mutually exclusive states: a dropdown
//! bound to the page-wide selection relay, or a required free-text input
//! for requirements outside the catalog. Which one renders is derived from
//! the relay value and the set of known options; the derivation lives here
//! so it can be tested without a DOM.

use crate::types::{Package, Service};

/// Dropdown sentinel that forces free-text mode.
pub const OTHER_OPTION: &str = "Other";

/// All values the dropdown knows: every service title, then every package
/// name, in catalog order.
pub fn known_options(services: &[Service], packages: &[Package]) -> Vec<String> {
    services
        .iter()
        .map(|service| service.title.clone())
        .chain(packages.iter().map(|package| package.name.clone()))
        .collect()
}

/// The service field's rendered state. The two variants are mutually
/// exclusive and together exhaustive: the form is always in exactly one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    /// Dropdown bound to the relay; `selected` may be empty (nothing chosen)
    Dropdown { selected: String },
    /// Free-text capture, seeded with `value`
    FreeText { value: String },
}

impl FormMode {
    /// Derive the mode from the current relay value. A non-empty selection
    /// that isn't a known option means the visitor picked something outside
    /// the catalog, which is an expected state, not an error.
    pub fn from_selection(selection: &str, options: &[String]) -> Self {
        if !selection.is_empty() && !options.iter().any(|option| option == selection) {
            FormMode::FreeText { value: selection.to_owned() }
        } else {
            FormMode::Dropdown { selected: selection.to_owned() }
        }
    }

    pub fn is_free_text(&self) -> bool {
        matches!(self, FormMode::FreeText { .. })
    }
}

/// Resolve a dropdown change into the next mode plus the value to publish
/// to the selection relay. Choosing [`OTHER_OPTION`] enters free-text mode
/// with an empty seed and clears the relay; anything else stays in dropdown
/// mode and publishes the choice.
pub fn apply_dropdown_choice(choice: &str) -> (FormMode, String) {
    if choice == OTHER_OPTION {
        (FormMode::FreeText { value: String::new() }, String::new())
    } else {
        (
            FormMode::Dropdown { selected: choice.to_owned() },
            choice.to_owned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{PACKAGES, SERVICES};
    use pretty_assertions::assert_eq;

    fn options() -> Vec<String> {
        known_options(&SERVICES, &PACKAGES)
    }

    #[test]
    fn known_options_are_titles_then_names() {
        let options = options();
        assert_eq!(options.len(), SERVICES.len() + PACKAGES.len());
        assert_eq!(options[0], "Luxury Interior Design");
        assert!(options.contains(&"Classic Package".to_owned()));
        assert!(options.contains(&"Pride Package".to_owned()));
        assert!(options.contains(&"Elite Package".to_owned()));
    }

    #[test]
    fn unknown_selection_enters_free_text_seeded() {
        let mode = FormMode::from_selection("Home Office Setup", &options());
        assert_eq!(mode, FormMode::FreeText { value: "Home Office Setup".into() });
    }

    #[test]
    fn known_selection_stays_in_dropdown() {
        let mode = FormMode::from_selection("Pride Package", &options());
        assert_eq!(mode, FormMode::Dropdown { selected: "Pride Package".into() });
    }

    #[test]
    fn empty_selection_is_dropdown_with_nothing_chosen() {
        // Relay sequence select("Classic Package") then select("") ends on
        // "", so only the final value matters here (last write wins).
        let mode = FormMode::from_selection("", &options());
        assert_eq!(mode, FormMode::Dropdown { selected: String::new() });
    }

    #[test]
    fn other_choice_forces_empty_free_text_and_clears_relay() {
        let (mode, relay) = apply_dropdown_choice(OTHER_OPTION);
        assert_eq!(mode, FormMode::FreeText { value: String::new() });
        assert_eq!(relay, "");
    }

    #[test]
    fn ordinary_choice_publishes_to_relay() {
        let (mode, relay) = apply_dropdown_choice("Modular Kitchens");
        assert_eq!(mode, FormMode::Dropdown { selected: "Modular Kitchens".into() });
        assert_eq!(relay, "Modular Kitchens");
    }

    #[test]
    fn free_text_edit_reaching_known_option_returns_to_dropdown() {
        // Each free-text edit republishes to the relay and re-derives the
        // mode; the moment the typed value equals a catalog entry the form
        // must drop back into dropdown mode.
        let options = options();
        let keystrokes = ["Pride", "Pride Pack", "Pride Package"];
        let modes: Vec<_> = keystrokes
            .iter()
            .map(|typed| FormMode::from_selection(typed, &options))
            .collect();
        assert_eq!(modes[0], FormMode::FreeText { value: "Pride".into() });
        assert_eq!(modes[1], FormMode::FreeText { value: "Pride Pack".into() });
        assert_eq!(modes[2], FormMode::Dropdown { selected: "Pride Package".into() });
    }

    #[test]
    fn modes_are_mutually_exclusive() {
        assert!(FormMode::from_selection("Garden Gazebo", &options()).is_free_text());
        assert!(!FormMode::from_selection("Elite Package", &options()).is_free_text());
        assert!(!FormMode::from_selection("", &options()).is_free_text());
    }
}
