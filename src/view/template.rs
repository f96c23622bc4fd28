use std::fmt::Write;

use super::OpinionView;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const LIST_TEMPLATE: &str = include_str!("../../templates/list.html");

pub fn render_index() -> &'static str {
    INDEX_TEMPLATE
}

/// Fills the list template. Fields of `opinions` must already be escaped.
pub fn render_list(opinions: &[OpinionView]) -> String {
    let mut items = String::new();
    for opinion in opinions {
        // writing to a String cannot fail
        let _ = writeln!(
            items,
            "    <li id=\"opinion-{}\"><time>{}</time><h2>{}</h2><p>{}</p></li>",
            opinion.id, opinion.create_at, opinion.topic, opinion.content
        );
    }

    LIST_TEMPLATE.replace("{{items}}", items.trim_end())
}
