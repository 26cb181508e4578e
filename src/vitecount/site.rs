pub const HEADING: &str = "Vite + React";
pub const LOGO_CLASS: &str = "logo";
pub const LINK_TARGET: &str = "_blank";

/// Static page content. The defaults reproduce the starter template.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct SiteConfig {
    pub site_name: String,
    pub logo_src: String,
    pub logo_alt: String,
    pub source_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_name: "vitejs.dev".to_string(),
            logo_src: "/vite.svg".to_string(),
            logo_alt: "Vite logo".to_string(),
            source_path: "src/App.tsx".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn href(&self) -> String {
        format!("https://{}", self.site_name)
    }

    /// Caption text around the `<code>` element: `(before, code, after)`.
    pub fn caption(&self) -> (&str, &str, &str) {
        ("Edit ", self.source_path.as_str(), " and save to test HMR")
    }
}
