// crates/coldnote-core/src/metadata.rs - Front-matter formatting
//
// Pure string processing, no I/O. Templates may carry the literal markers
// {{title}}, {{tags}} and {{aliases}} anywhere in their body, conventionally
// inside a YAML front-matter block; rendering substitutes the markers and
// touches nothing else. A template without any marker gets a generated
// front-matter block prepended instead, so plain skeletons still work.
//
// EXAMPLE TEMPLATE:
// ```markdown
// ---
// title: {{title}}
// tags: {{tags}}
// aliases: {{aliases}}
// ---
//
// ## Notes
// ```
//
// Sequences render as YAML flow lists: tags ["go", "notes"] becomes
// `[go, notes]`.

/// Metadata for a single note-creation run
///
/// Built once from the committed form values and consumed by
/// [`format_metadata`]; never persisted on its own, only embedded in the
/// rendered note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    /// Selected tag values, in selection order.
    pub tags: Vec<String>,
    pub aliases: Vec<String>,
}

const TITLE_MARKER: &str = "{{title}}";
const TAGS_MARKER: &str = "{{tags}}";
const ALIASES_MARKER: &str = "{{aliases}}";

/// Render a template with the given metadata.
///
/// With markers present, substitution happens in place and the rest of the
/// template is byte-for-byte unchanged. Without markers, a front-matter
/// block is prepended above the untouched template body.
pub fn format_metadata(template: &str, meta: &Metadata) -> String {
    let tags = render_list(&meta.tags);
    let aliases = render_list(&meta.aliases);

    if has_markers(template) {
        template
            .replace(TITLE_MARKER, &meta.title)
            .replace(TAGS_MARKER, &tags)
            .replace(ALIASES_MARKER, &aliases)
    } else {
        format!(
            "---\ntitle: {}\ntags: {}\naliases: {}\n---\n\n{}",
            meta.title, tags, aliases, template
        )
    }
}

/// Split comma-separated alias input, trimming whitespace and dropping
/// empty segments.
pub fn parse_aliases(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn has_markers(template: &str) -> bool {
    template.contains(TITLE_MARKER)
        || template.contains(TAGS_MARKER)
        || template.contains(ALIASES_MARKER)
}

fn render_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(title: &str, tags: &[&str], aliases: &[&str]) -> Metadata {
        Metadata {
            title: title.to_string(),
            tags: tags.iter().map(|s| s.to_string()).collect(),
            aliases: aliases.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn substitutes_markers_in_place() {
        let template = "---\ntitle: {{title}}\ntags: {{tags}}\naliases: {{aliases}}\n---\n\n## Notes\n";
        let rendered = format_metadata(
            template,
            &meta("brand-new-note", &["programming"], &["go notes", "programming"]),
        );

        assert_eq!(
            rendered,
            "---\ntitle: brand-new-note\ntags: [programming]\naliases: [go notes, programming]\n---\n\n## Notes\n"
        );
    }

    #[test]
    fn only_marker_text_differs_between_renders() {
        let template = "# heading\n{{title}}\ntail";

        let a = format_metadata(template, &meta("a", &[], &[]));
        let b = format_metadata(template, &meta("b", &[], &[]));

        assert_eq!(a, "# heading\na\ntail");
        assert_eq!(b, "# heading\nb\ntail");
    }

    #[test]
    fn marker_free_template_gets_front_matter_prepended() {
        let rendered = format_metadata("## Notes\n", &meta("t", &["x"], &["y", "z"]));

        assert_eq!(
            rendered,
            "---\ntitle: t\ntags: [x]\naliases: [y, z]\n---\n\n## Notes\n"
        );
    }

    #[test]
    fn empty_sequences_render_as_empty_lists() {
        let rendered = format_metadata("tags: {{tags}}", &meta("t", &[], &[]));
        assert_eq!(rendered, "tags: []");
    }

    #[test]
    fn repeated_markers_are_all_substituted() {
        let rendered = format_metadata("{{title}} / {{title}}", &meta("x", &[], &[]));
        assert_eq!(rendered, "x / x");
    }

    #[test]
    fn parse_aliases_trims_and_drops_empty_segments() {
        assert_eq!(
            parse_aliases("go notes, programming, ,  "),
            vec!["go notes".to_string(), "programming".to_string()]
        );
    }

    #[test]
    fn parse_aliases_empty_input_yields_no_aliases() {
        assert!(parse_aliases("").is_empty());
        assert!(parse_aliases("  ").is_empty());
    }
}
