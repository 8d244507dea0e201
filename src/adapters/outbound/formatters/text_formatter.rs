use crate::application::read_models::ReportReadModel;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// Fixed header comment block at the top of every report.
const REPORT_HEADER: &str = "\
# Explicitly Installed Packages That Are Also Dependencies
# =========================================================
# This file lists packages that you explicitly installed but are also
# required as dependencies by other installed packages.
# Packages are grouped by category, then by the dependency package.
# Under each dependency, all packages that require it are listed.
#
# Note: These packages can be safely removed if you remove the packages
# that depend on them, but they will be reinstalled as dependencies.
";

/// Section banner line.
const SECTION_RULE: &str =
    "# ============================================================================\n";

/// PlainTextFormatter adapter for the categorized plain-text report
///
/// Output is a pure function of the read model: no timestamps, hostnames, or
/// serial numbers, so identical inputs always render byte-identical reports.
pub struct PlainTextFormatter;

impl PlainTextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for PlainTextFormatter {
    fn format(&self, model: &ReportReadModel) -> Result<String> {
        let mut output = String::new();
        output.push_str(REPORT_HEADER);
        output.push('\n');

        for section in &model.sections {
            output.push('\n');
            output.push_str(SECTION_RULE);
            output.push_str(&format!(
                "# {} ({} packages)\n",
                section.title,
                section.dependencies.len()
            ));
            output.push_str(SECTION_RULE);

            for dependency in &section.dependencies {
                output.push_str(&format!(
                    "\n{}                    # Required by {} package(s) (explicitly installed)\n",
                    dependency.name,
                    dependency.dependers.len()
                ));
                for depender in &dependency.dependers {
                    output.push_str(&format!("  → {} (explicit)\n", depender));
                }
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{CategorySectionView, DependencyView};

    fn sample_model() -> ReportReadModel {
        ReportReadModel {
            sections: vec![CategorySectionView {
                title: "PYTHON".to_string(),
                dependencies: vec![DependencyView {
                    name: "python".to_string(),
                    dependers: vec!["inkscape".to_string(), "libreoffice-fresh".to_string()],
                }],
            }],
        }
    }

    #[test]
    fn test_empty_model_renders_header_only() {
        let formatter = PlainTextFormatter::new();
        let output = formatter
            .format(&ReportReadModel { sections: vec![] })
            .unwrap();

        let expected = format!("{}\n", REPORT_HEADER);
        assert_eq!(output, expected);
    }

    #[test]
    fn test_section_rendering() {
        let formatter = PlainTextFormatter::new();
        let output = formatter.format(&sample_model()).unwrap();

        assert!(output.starts_with(REPORT_HEADER));
        assert!(output.contains("# PYTHON (1 packages)\n"));
        assert!(output.contains(
            "\npython                    # Required by 2 package(s) (explicitly installed)\n"
        ));
        assert!(output.contains("  → inkscape (explicit)\n"));
        assert!(output.contains("  → libreoffice-fresh (explicit)\n"));
    }

    #[test]
    fn test_dependers_render_in_model_order() {
        let formatter = PlainTextFormatter::new();
        let output = formatter.format(&sample_model()).unwrap();

        let inkscape_pos = output.find("→ inkscape").unwrap();
        let libreoffice_pos = output.find("→ libreoffice-fresh").unwrap();
        assert!(inkscape_pos < libreoffice_pos);
    }

    #[test]
    fn test_output_is_byte_identical_across_runs() {
        let formatter = PlainTextFormatter::new();
        let first = formatter.format(&sample_model()).unwrap();
        let second = formatter.format(&sample_model()).unwrap();
        assert_eq!(first, second);
    }
}
