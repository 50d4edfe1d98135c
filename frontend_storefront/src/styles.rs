// frontend_storefront/src/styles.rs
use std::collections::HashMap;
use std::rc::Rc;
use yew::prelude::*;

/// Maps logical class names to the concrete CSS classes shipped with the
/// site theme. Installed at the app root through a `ContextProvider` so
/// components never hard-code styling.
#[derive(Clone, PartialEq)]
pub struct StyleMap {
    classes: Rc<HashMap<&'static str, &'static str>>,
}

impl StyleMap {
    pub fn new(classes: HashMap<&'static str, &'static str>) -> Self {
        Self {
            classes: Rc::new(classes),
        }
    }

    /// Resolve a logical name to CSS classes. Unknown names resolve to no
    /// classes rather than failing the render.
    pub fn resolve(&self, name: &str) -> Classes {
        match self.classes.get(name) {
            Some(class) => classes!(*class),
            None => classes!(),
        }
    }
}

impl Default for StyleMap {
    fn default() -> Self {
        Self::new(HashMap::from([
            ("profilePage", "profile-page container mx-auto p-6"),
            ("profileHeader", "profile-header mb-4"),
            ("aboutContainer", "about-section card p-4 mb-4"),
            ("contactContainer", "contact-section card p-4"),
        ]))
    }
}

/// Resolve a logical class name against the [`StyleMap`] in context,
/// falling back to the built-in map when no provider is installed.
#[hook]
pub fn use_style(name: &'static str) -> Classes {
    let map = use_context::<StyleMap>().unwrap_or_default();
    map.resolve(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_logical_names() {
        let map = StyleMap::default();
        assert_eq!(
            map.resolve("aboutContainer"),
            classes!("about-section", "card", "p-4", "mb-4")
        );
    }

    #[test]
    fn unknown_names_resolve_to_no_classes() {
        let map = StyleMap::default();
        assert!(map.resolve("noSuchSection").is_empty());
    }

    #[test]
    fn custom_maps_override_the_default() {
        let map = StyleMap::new(HashMap::from([("aboutContainer", "bio")]));
        assert_eq!(map.resolve("aboutContainer"), classes!("bio"));
    }
}
