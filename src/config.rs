/// Output constants for a Linear import.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Prepended to the Deque summary, separated by a space.
    pub title_prefix: String,
    pub status: String,
    /// First label token, and the namespace of the other six.
    pub label_namespace: String,
    /// The encoded checkpoint is appended to this to build the WCAG search link.
    pub search_url: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            title_prefix: "[A11Y]".into(),
            status: "Backlog".into(),
            label_namespace: "wcag".into(),
            search_url: "https://www.google.com/search?q=WCAG+".into(),
        }
    }
}
