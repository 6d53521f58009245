//! Per-render style collection.
//!
//! Page components compute their styles at render time rather than loading a
//! static stylesheet. Every styled element registers its rules into a
//! [`StyleRegistry`] scoped to the render pass, and the registry is
//! serialized into a single tagged `<style>` block for the document head, so
//! the first response the browser sees is already styled.

/// Attribute key marking the server-emitted style block.
pub const STYLE_KEY: &str = "css";

/// One styled element: a class name plus the CSS rules behind it.
pub struct StyledClass {
    pub name: &'static str,
    pub rules: &'static str,
}

impl StyledClass {
    /// Registers the rules with the current render pass and returns the
    /// class name for the markup.
    pub fn class(&self, styles: &mut StyleRegistry) -> &'static str {
        styles.insert(self.name, self.rules);
        self.name
    }
}

/// Accumulates the CSS rules emitted while rendering one page.
///
/// A registry is allocated per render pass and passed down by `&mut`
/// reference, never stored process-wide, so concurrent renders of different
/// requests cannot observe each other's rules.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    inserted: Vec<(&'static str, &'static str)>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent per class: a component rendered many times contributes its
    /// rules once, at first-insert position.
    pub fn insert(&mut self, class: &'static str, rules: &'static str) {
        if self.inserted.iter().any(|(name, _)| *name == class) {
            return;
        }
        self.inserted.push((class, rules));
    }

    pub fn is_empty(&self) -> bool {
        self.inserted.is_empty()
    }

    /// Serializes every collected rule into the single style block for the
    /// document head. Taking `self` by value keeps this a once-per-render
    /// operation that can never emit a partial set.
    pub fn into_style_tag(self) -> String {
        let classes = self
            .inserted
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(" ");
        let rules = self
            .inserted
            .iter()
            .map(|(_, rules)| *rules)
            .collect::<Vec<_>>()
            .join(" ");
        format!(r#"<style data-{STYLE_KEY}="{STYLE_KEY} {classes}">{rules}</style>"#)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: StyledClass = StyledClass {
        name: "card",
        rules: ".card{padding:1rem}",
    };
    const PANEL: StyledClass = StyledClass {
        name: "panel",
        rules: ".panel{margin:0}",
    };

    #[test]
    fn repeated_components_register_once_in_first_insert_order() {
        let mut styles = StyleRegistry::new();
        assert_eq!(CARD.class(&mut styles), "card");
        assert_eq!(PANEL.class(&mut styles), "panel");
        assert_eq!(CARD.class(&mut styles), "card");

        let tag = styles.into_style_tag();
        assert_eq!(
            tag,
            r#"<style data-css="css card panel">.card{padding:1rem} .panel{margin:0}</style>"#
        );
    }

    #[test]
    fn empty_registry_still_renders_a_style_tag() {
        let tag = StyleRegistry::new().into_style_tag();
        assert_eq!(tag, r#"<style data-css="css "></style>"#);
    }

    #[test]
    fn registries_are_isolated_per_render_pass() {
        let mut first = StyleRegistry::new();
        let mut second = StyleRegistry::new();
        CARD.class(&mut first);

        assert!(second.is_empty());
        PANEL.class(&mut second);
        assert!(!second.into_style_tag().contains("card"));
    }
}
