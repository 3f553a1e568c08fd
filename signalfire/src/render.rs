//! Markup for the director list.

use crate::models::Director;

/// Render directors as an ordered list, one item per name, in input order.
///
/// Names are escaped for an HTML text context.
pub fn render_directors(directors: &[Director]) -> String {
    let mut content = String::from("<ol>");
    for director in directors {
        content.push_str("<li>");
        content.push_str(&html_escape::encode_text(&director.name));
        content.push_str("</li>");
    }
    content.push_str("</ol>");
    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_in_order() {
        let directors = vec![Director::new("A", "1"), Director::new("B", "2")];
        assert_eq!(render_directors(&directors), "<ol><li>A</li><li>B</li></ol>");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_directors(&[]), "<ol></ol>");
    }

    #[test]
    fn test_render_escapes_names() {
        let directors = vec![Director::new("<b>lab</b> & co", "1")];
        assert_eq!(
            render_directors(&directors),
            "<ol><li>&lt;b&gt;lab&lt;/b&gt; &amp; co</li></ol>"
        );
    }
}
