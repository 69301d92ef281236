use std::path::Path;

use folio::ConfigWarning;

use crate::ui::primitives::icon::Icon;

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], unicode: bool) {
    for line in config_warning_lines(path, warnings, unicode) {
        eprintln!("{line}");
    }
}

fn config_warning_lines(path: &Path, warnings: &[ConfigWarning], unicode: bool) -> Vec<String> {
    let icon = Icon::Warning.render(unicode);
    let mut lines = Vec::new();
    for w in warnings {
        match w.line {
            Some(line) => lines.push(format!(
                "{icon} Unknown config key '{}' in {}:{}",
                w.key,
                path.display(),
                line
            )),
            None => lines.push(format!(
                "{icon} Unknown config key '{}' in {}",
                w.key,
                path.display()
            )),
        }
        if let Some(suggestion) = &w.suggestion {
            lines.push(format!("   Did you mean '{suggestion}'?"));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn warning_lines_include_location_and_suggestion() {
        let warnings = vec![ConfigWarning {
            key: "smoothng".to_string(),
            file: PathBuf::from("folio.toml"),
            line: Some(4),
            suggestion: Some("smoothing".to_string()),
        }];
        let lines = config_warning_lines(Path::new("folio.toml"), &warnings, false);
        insta::assert_snapshot!(lines.join("\n"), @r"
        ! Unknown config key 'smoothng' in folio.toml:4
           Did you mean 'smoothing'?
        ");
    }

    #[test]
    fn warning_without_line_or_suggestion() {
        let warnings = vec![ConfigWarning {
            key: "extra".to_string(),
            file: PathBuf::from("folio.toml"),
            line: None,
            suggestion: None,
        }];
        let lines = config_warning_lines(Path::new("folio.toml"), &warnings, false);
        assert_eq!(lines, vec!["! Unknown config key 'extra' in folio.toml".to_string()]);
    }
}
