//! Configuration display formatting

use crate::config::{ReportPaths, Settings, SidecarFormat};

fn sidecar_label(format: SidecarFormat) -> &'static str {
    match format {
        SidecarFormat::None => "none",
        SidecarFormat::Json => "json",
        SidecarFormat::Yaml => "yaml",
    }
}

/// Format paths and settings for `crime-report config`
pub fn format_config(paths: &ReportPaths, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str("Crime Report Configuration\n");
    output.push_str("==========================\n");
    output.push_str(&format!("Data directory:   {}\n", paths.base_dir().display()));
    output.push_str(&format!(
        "Settings file:    {}\n",
        paths.settings_file().display()
    ));
    output.push_str(&format!(
        "Export directory: {}\n",
        settings.resolve_export_dir(paths).display()
    ));
    output.push('\n');
    output.push_str("Settings:\n");
    output.push_str(&format!("  Time zone:        {}\n", settings.timezone));
    output.push_str(&format!("  Default category: {}\n", settings.default_category));
    output.push_str(&format!(
        "  Snapshot format:  {}\n",
        sidecar_label(settings.sidecar_format)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_config() {
        let paths = ReportPaths::with_base_dir(PathBuf::from("/tmp/crime-report"));
        let settings = Settings::default();

        let output = format_config(&paths, &settings);
        assert!(output.contains("Data directory:   /tmp/crime-report"));
        assert!(output.contains("config.json"));
        assert!(output.contains("Time zone:        Europe/London"));
        assert!(output.contains("Default category: Gang"));
        assert!(output.contains("Snapshot format:  json"));
    }
}
