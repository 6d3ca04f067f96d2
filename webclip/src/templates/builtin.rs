//! Reference template table

use super::{PropertyDescriptor, TemplateRecord};

/// Full page with site chrome and ads stripped
const CLEAN_PAGE: &str =
    r#"{{fullHtml|remove_html:("header,footer,nav,aside,.ad,.advertisement")|markdown}}"#;

/// `<article>` element with site chrome and ads stripped
const CLEAN_ARTICLE: &str =
    r#"{{selectorHtml:article|remove_html:("header,footer,nav,aside,.ad,.advertisement")|markdown}}"#;

const CAPTURED_ON: &str = "\n\n---\n**Captured on:** {{time}}";

fn title() -> PropertyDescriptor {
    PropertyDescriptor::text("title", "{{title}}")
}

fn source() -> PropertyDescriptor {
    PropertyDescriptor::text("source", "{{url}}")
}

fn author() -> PropertyDescriptor {
    PropertyDescriptor::multitext("author", r#"{{author|split:", "|wikilink|join}}"#)
}

fn published() -> PropertyDescriptor {
    PropertyDescriptor::date("published", "{{published}}")
}

fn created() -> PropertyDescriptor {
    PropertyDescriptor::date("created", "{{date}}")
}

fn description() -> PropertyDescriptor {
    PropertyDescriptor::text("description", "{{description}}")
}

fn tags(value: &str) -> PropertyDescriptor {
    PropertyDescriptor::multitext("tags", value)
}

/// Ask the extension's interpreter for a block-quoted answer to `prompt`
fn interpreted(prompt: &str) -> String {
    format!(r#"{{{{"{prompt}"|blockquote}}}}"#)
}

pub(super) fn records() -> Vec<TemplateRecord> {
    vec![
        TemplateRecord::builder("Custom Default - Verbatim Clone (Clean)", &["Clippings"])
            .note_content(format!("{CLEAN_PAGE}{CAPTURED_ON}"))
            .property(title())
            .property(source())
            .property(author())
            .property(published())
            .property(created())
            .property(description())
            .property(tags("web-clip, verbatim"))
            .build(),
        TemplateRecord::builder("Custom Summary", &["Clippings", "Summaries"])
            .note_content(format!(
                "## Summary\n{}{CAPTURED_ON}",
                interpreted("Summarize the main points of this page in three bullet points.")
            ))
            .property(title())
            .property(source())
            .property(tags("web-clip, summary"))
            .build(),
        TemplateRecord::builder("Custom Research & AI Insights", &["Clippings", "Research"])
            .note_content(format!(
                "## Research Insights\n{}{CAPTURED_ON}\n\n## Full Content\n{CLEAN_PAGE}",
                interpreted("Extract key research and AI insights from this page concisely.")
            ))
            .property(title())
            .property(source())
            .property(author())
            .property(published())
            .property(created())
            .property(tags("web-clip, research, AI"))
            .build(),
        TemplateRecord::builder("Custom Translation", &["Clippings", "Translations"])
            .note_content(format!(
                "## Original Content\n{CLEAN_PAGE}\n\n---\n## Translated Content\n{}{CAPTURED_ON}",
                interpreted(
                    "Translate the above content into [Target Language] in clear, concise Markdown."
                )
            ))
            .property(title())
            .property(source())
            .property(tags("web-clip, translation"))
            .build(),
        TemplateRecord::builder("Custom News/Blog Article", &["Clippings", "Articles"])
            .note_content(format!("## Article Content\n{CLEAN_ARTICLE}{CAPTURED_ON}"))
            .property(title())
            .property(source())
            .property(author())
            .property(published())
            .property(tags("web-clip, news, blog"))
            .build(),
        TemplateRecord::builder("Custom Highlights Only", &["Clippings", "Highlights"])
            .note_content(format!(
                r#"{{{{highlights|map: item => item.text|join:"\n\n"}}}}{CAPTURED_ON}"#
            ))
            .property(title())
            .property(source())
            .property(tags("web-clip, highlights"))
            .build(),
        TemplateRecord::builder("GitHub Page", &["Clippings", "GitHub"])
            .note_content(format!("{CLEAN_PAGE}{CAPTURED_ON}"))
            .property(title())
            .property(source())
            .property(author())
            .property(published())
            .property(created())
            .property(description())
            .property(tags("web-clip, github"))
            .trigger("startsWith:https://github.com/")
            .build(),
        TemplateRecord::builder("Medium Article", &["Clippings", "Medium"])
            .note_content(format!("{CLEAN_ARTICLE}{CAPTURED_ON}"))
            .property(title())
            .property(source())
            .property(tags("web-clip, medium"))
            .trigger("startsWith:https://medium.com/")
            .build(),
        TemplateRecord::builder("Research / Academic", &["Clippings", "Research"])
            .note_content(format!(
                "## Abstract\n{}\n\n---\n## Full Content\n{CLEAN_PAGE}{CAPTURED_ON}",
                r#"{{selectorHtml:#abstract|remove_html:("header,footer,nav")|markdown}}"#
            ))
            .property(title())
            .property(source())
            .property(author())
            .property(published())
            .property(created())
            .property(tags("web-clip, research, academic"))
            .trigger("startsWith:https://arxiv.org/")
            .trigger("startsWith:https://www.researchgate.net/")
            .trigger("regex:/.*(research|journal|paper).*/i")
            .build(),
        TemplateRecord::builder("Article / Blog", &["Clippings", "Articles"])
            .note_content(format!("{CLEAN_ARTICLE}{CAPTURED_ON}"))
            .property(title())
            .property(source())
            .property(author())
            .property(published())
            .property(tags("web-clip, article, blog"))
            .trigger(r"regex:/^https:\/\/(www\.)?(nytimes|techcrunch|theverge|blogspot|medium)\./i")
            .build(),
        TemplateRecord::builder("Generic Web Clip", &["Clippings", "Generic"])
            .note_content(format!("{CLEAN_PAGE}{CAPTURED_ON}"))
            .property(title())
            .property(source())
            .property(author())
            .property(published())
            .property(created())
            .property(description())
            .property(tags("web-clip, generic"))
            .trigger("default")
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::super::{PropertyType, TemplateRegistry};

    #[test]
    fn test_builtin_registry_size_and_order() {
        let registry = TemplateRegistry::builtin().unwrap();
        let filenames: Vec<&str> = registry.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(
            filenames,
            [
                "Custom_Default_Verbatim_Clone_Clean.json",
                "Custom_Summary.json",
                "Custom_Research_AI_Insights.json",
                "Custom_Translation.json",
                "Custom_News_Blog_Article.json",
                "Custom_Highlights_Only.json",
                "GitHub_Page.json",
                "Medium_Article.json",
                "Research_Academic.json",
                "Article_Blog.json",
                "Generic_Web_Clip.json",
            ]
        );
    }

    #[test]
    fn test_topic_folders() {
        let registry = TemplateRegistry::builtin().unwrap();
        let mut folders: Vec<String> = registry
            .iter()
            .filter_map(|r| r.target_subpath.get(1).cloned())
            .collect();
        folders.sort();
        folders.dedup();
        assert_eq!(
            folders,
            [
                "Articles",
                "Generic",
                "GitHub",
                "Highlights",
                "Medium",
                "Research",
                "Summaries",
                "Translations"
            ]
        );
        assert!(registry.iter().all(|r| r.target_subpath[0] == "Clippings"));
    }

    #[test]
    fn test_note_formats() {
        let registry = TemplateRegistry::builtin().unwrap();

        let summary = registry.get("Custom Summary").unwrap();
        assert_eq!(
            summary.content.note_content_format,
            "## Summary\n{{\"Summarize the main points of this page in three bullet points.\"|blockquote}}\n\n---\n**Captured on:** {{time}}"
        );

        let highlights = registry.get("Custom Highlights Only").unwrap();
        assert_eq!(
            highlights.content.note_content_format,
            "{{highlights|map: item => item.text|join:\"\\n\\n\"}}\n\n---\n**Captured on:** {{time}}"
        );

        let research = registry.get("Custom Research & AI Insights").unwrap();
        assert!(research
            .content
            .note_content_format
            .ends_with("{{time}}\n\n## Full Content\n{{fullHtml|remove_html:(\"header,footer,nav,aside,.ad,.advertisement\")|markdown}}"));
    }

    #[test]
    fn test_triggers() {
        let registry = TemplateRegistry::builtin().unwrap();
        assert!(registry.get("Custom Summary").unwrap().content.triggers.is_empty());
        assert_eq!(registry.get("Generic Web Clip").unwrap().content.triggers, ["default"]);
        assert_eq!(registry.get("Research / Academic").unwrap().content.triggers.len(), 3);
        assert_eq!(
            registry.get("Article / Blog").unwrap().content.triggers[0],
            "regex:/^https:\\/\\/(www\\.)?(nytimes|techcrunch|theverge|blogspot|medium)\\./i"
        );
    }

    #[test]
    fn test_every_template_tags_web_clip() {
        let registry = TemplateRegistry::builtin().unwrap();
        for record in &registry {
            let tags = record.content.properties.last().unwrap();
            assert_eq!(tags.name, "tags");
            assert_eq!(tags.kind, PropertyType::Multitext);
            assert!(tags.value.starts_with("web-clip, "), "{}", record.name);
            assert_eq!(record.content.properties[0].name, "title");
        }
    }

    #[test]
    fn test_rendered_author_property_escapes_quotes() {
        let registry = TemplateRegistry::builtin().unwrap();
        let body = registry.get("GitHub Page").unwrap().render().unwrap();
        assert!(body.contains(r#""value": "{{author|split:\", \"|wikilink|join}}","#));
    }
}
