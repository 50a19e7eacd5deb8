/// A file shipped inside the bundle: source path on disk plus the
/// bundle-relative destination PyInstaller should place it at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSpec {
    pub source: String,
    pub dest: String,
}

impl AssetSpec {
    pub fn new(source: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            dest: dest.into(),
        }
    }
}

/// Bundle configuration, fixed at invocation time
#[derive(Debug, Clone)]
pub struct BundleConfig {
    pub output_name: String,
    pub onefile: bool,
    pub windowed: bool,
    pub assets: Vec<AssetSpec>,
    pub hidden_imports: Vec<String>,
    pub entry_point: String,
}

impl BundleConfig {
    /// The one build this tool performs: the DOIO Layout Viewer app.
    pub fn layout_viewer() -> Self {
        Self {
            output_name: "DOIO_Layout_Viewer".to_string(),
            onefile: true,
            windowed: true,
            assets: vec![
                AssetSpec::new("DOIO.png", "."),
                AssetSpec::new("my.kv", "."),
                AssetSpec::new("layout.json", "."),
            ],
            hidden_imports: [
                "kivy",
                "japanize_kivy",
                "PIL",
                "PIL.Image",
                "PIL.PngImagePlugin",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            entry_point: "main.pyw".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_viewer_config() {
        let config = BundleConfig::layout_viewer();
        assert_eq!(config.output_name, "DOIO_Layout_Viewer");
        assert!(config.onefile);
        assert!(config.windowed);
        assert_eq!(config.assets.len(), 3);
        assert_eq!(config.hidden_imports.len(), 5);
        assert_eq!(config.entry_point, "main.pyw");
    }

    #[test]
    fn test_assets_keep_declaration_order() {
        let config = BundleConfig::layout_viewer();
        let sources: Vec<&str> = config.assets.iter().map(|a| a.source.as_str()).collect();
        assert_eq!(sources, ["DOIO.png", "my.kv", "layout.json"]);
        assert!(config.assets.iter().all(|a| a.dest == "."));
    }
}
