//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use crate::common::render;
    use marksafe::builders::{render_to_json, render_to_string};
    use marksafe::core::{render_fragment, MarksafeOptions};
    use marksafe::renderer::node::RenderNode;

    #[test]
    fn writes_class_not_framework_name() {
        let html = render_to_string(&render("<span class=\"x\">y</span>"));

        assert!(html.contains("<span class=\"x\">y</span>"));
        assert!(!html.contains("className"));
    }

    #[test]
    fn hyphenates_style_properties() {
        let html = render_to_string(&render(
            "<img src=\"https://example.com/i.png\" alt=\"a\" style=\"max-width: 100%\" />",
        ));

        assert!(html.contains("style=\"max-width: 100%\""));
    }

    #[test]
    fn escapes_text_content() {
        let html = render_to_string(&render("<p>a &amp; b &lt; c</p>"));

        assert!(html.contains("a &amp; b &lt; c"));
    }

    #[test]
    fn escapes_attribute_values() {
        let html = render_to_string(&render("<p title='He said \"hi\"'>x</p>"));

        assert!(html.contains("title=\"He said &quot;hi&quot;\""));
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let html = render_to_string(&render("<p>a<br />b</p>"));

        assert!(html.contains("<br>"));
        assert!(!html.contains("</br>"));
    }

    #[test]
    fn json_encodes_render_tree() {
        let json = render_to_json(&render("<p>Hello</p>")).unwrap();

        assert!(json.contains("\"kind\": \"element\""));
        assert!(json.contains("\"tag\": \"p\""));
        assert!(json.contains("\"content\": \"Hello\""));
    }

    #[test]
    fn repeated_pipeline_is_idempotent() {
        // 重新渲染自身输出必须得到完全相同的决策：所有拒绝已经生效
        let input = concat!(
            "<h2 id=\"s\" class=\"heading\">Title</h2>",
            "<p>Body <a href=\"https://example.com\" target=\"_blank\">out</a>",
            " <a href=\"javascript:alert(1)\">bad</a></p>",
            "<img src=\"https://example.com/i.png\" alt=\"a\" style=\"max-width: 100%; width: expression(evil)\" />",
            "<table>  <thead>  <tr>  <th>H</th>  </tr>  </thead>  </table>",
        );
        let options = MarksafeOptions::default();

        let first = render_fragment(input, &options);
        let second = render_fragment(&render_to_string(&first), &options);

        match &second {
            RenderNode::Element(container) => {
                assert_eq!(container.children.len(), 1);
                assert_eq!(container.children[0], first);
            }
            RenderNode::Text { .. } => panic!("container must be an element"),
        }
    }
}
