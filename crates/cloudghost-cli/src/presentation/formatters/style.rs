use crate::presentation::ViewStyle;
use owo_colors::OwoColorize;

/// Status markers used by the impersonation and storage-key output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Info,
    Success,
    Failure,
    Warning,
}

impl Marker {
    fn text(&self) -> &'static str {
        match self {
            Marker::Info => "[*]",
            Marker::Success => "[+]",
            Marker::Failure => "[-]",
            Marker::Warning => "[!]",
        }
    }

    pub fn paint(&self, style: ViewStyle) -> String {
        if !style.color {
            return self.text().to_string();
        }
        match self {
            Marker::Info => self.text().cyan().to_string(),
            Marker::Success => self.text().green().bold().to_string(),
            Marker::Failure => self.text().red().to_string(),
            Marker::Warning => self.text().yellow().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_markers_have_no_escapes() {
        let style = ViewStyle { color: false };
        assert_eq!(Marker::Success.paint(style), "[+]");
        assert_eq!(Marker::Warning.paint(style), "[!]");
    }

    #[test]
    fn test_colored_marker_keeps_text() {
        let painted = Marker::Failure.paint(ViewStyle { color: true });
        assert!(painted.contains("[-]"));
        assert_ne!(painted, "[-]");
    }
}
