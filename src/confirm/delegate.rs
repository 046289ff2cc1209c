/// Marker class carried by clickable elements that trigger the delete flow.
pub const DELETE_LINK_CLASS: &str = "delete-link";

/// Snapshot of a clicked element, as seen by the delegated handler.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ClickTarget {
    classes: Vec<String>,
    href: Option<String>,
}

impl ClickTarget {
    /// Builds a target from a space-separated class attribute and an
    /// optional destination URL.
    pub fn from_element(class_attr: &str, href: Option<String>) -> Self {
        Self {
            classes: class_attr.split_whitespace().map(str::to_string).collect(),
            href,
        }
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }
}

/// Dispatch-time matcher for delete links.
///
/// One delegate serves the whole page: targets are matched against the
/// marker class when a click arrives, so links added or removed after
/// startup need no re-registration.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DeleteLinkDelegate {
    marker: String,
}

impl Default for DeleteLinkDelegate {
    fn default() -> Self {
        Self::new(DELETE_LINK_CLASS)
    }
}

impl DeleteLinkDelegate {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    pub fn matches(&self, target: &ClickTarget) -> bool {
        target.has_class(&self.marker)
    }

    /// Returns the destination URL when the target is a delete link with a
    /// `href` attribute. The URL is not validated here; an empty or
    /// malformed value is passed through for the server to reject.
    pub fn dispatch(&self, target: &ClickTarget) -> Option<String> {
        if !self.matches(target) {
            return None;
        }
        target.href().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_marker_class() {
        let delegate = DeleteLinkDelegate::default();
        let target = ClickTarget::from_element(
            "btn delete-link",
            Some("/records/42/delete".to_string()),
        );
        assert!(delegate.matches(&target));
        assert_eq!(
            delegate.dispatch(&target).as_deref(),
            Some("/records/42/delete")
        );
    }

    #[test]
    fn test_ignores_unmarked_elements() {
        let delegate = DeleteLinkDelegate::default();
        let target = ClickTarget::from_element("btn primary", Some("/records/42/delete".to_string()));
        assert!(!delegate.matches(&target));
        assert_eq!(delegate.dispatch(&target), None);
    }

    #[test]
    fn test_partial_class_name_does_not_match() {
        let delegate = DeleteLinkDelegate::default();
        let target = ClickTarget::from_element("delete-links", Some("/x".to_string()));
        assert!(!delegate.matches(&target));
    }

    #[test]
    fn test_empty_href_is_passed_through() {
        let delegate = DeleteLinkDelegate::default();
        let target = ClickTarget::from_element("delete-link", Some(String::new()));
        assert_eq!(delegate.dispatch(&target).as_deref(), Some(""));
    }

    #[test]
    fn test_missing_href_yields_nothing() {
        let delegate = DeleteLinkDelegate::default();
        let target = ClickTarget::from_element("delete-link", None);
        assert!(delegate.matches(&target));
        assert_eq!(delegate.dispatch(&target), None);
    }

    #[test]
    fn test_custom_marker() {
        let delegate = DeleteLinkDelegate::new("remove-row");
        let target = ClickTarget::from_element("remove-row", Some("/rows/3".to_string()));
        assert_eq!(delegate.dispatch(&target).as_deref(), Some("/rows/3"));
    }
}
