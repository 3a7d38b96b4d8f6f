//! Table of contents and heading anchors.

/// Anchor slug for a file section heading.
///
/// Leading whitespace is trimmed, periods removed, spaces turned into
/// hyphens and the result lowercased. Other punctuation passes through
/// unchanged, so summaries containing it may not match the anchor a
/// markdown renderer generates.
pub fn anchor_slug(heading: &str) -> String {
    heading
        .trim_start()
        .replace('.', "")
        .replace(' ', "-")
        .to_lowercase()
}

/// Numbered table of contents entry linking to a section heading
pub fn render_toc_item(number: usize, heading: &str) -> String {
    format!("{}. [{}](#{})", number, heading, anchor_slug(heading))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_simple() {
        assert_eq!(anchor_slug("Utility helpers."), "utility-helpers");
    }

    #[test]
    fn slug_trims_leading_only() {
        assert_eq!(anchor_slug("  Network Layer "), "network-layer-");
    }

    #[test]
    fn slug_path_summary() {
        assert_eq!(anchor_slug("src/Util.py"), "src/utilpy");
    }

    #[test]
    fn slug_keeps_other_punctuation() {
        assert_eq!(anchor_slug("I/O: helpers"), "i/o:-helpers");
    }

    #[test]
    fn toc_item() {
        assert_eq!(
            render_toc_item(2, "Storage helpers."),
            "2. [Storage helpers.](#storage-helpers)"
        );
    }
}
