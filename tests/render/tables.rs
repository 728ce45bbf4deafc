//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use crate::common::{find_element, render};
    use marksafe::renderer::node::RenderNode;
    use marksafe::renderer::tables::is_table_structural_tag;

    fn has_text_children(children: &[RenderNode]) -> bool {
        children
            .iter()
            .any(|child| matches!(child, RenderNode::Text { .. }))
    }

    #[test]
    fn strips_whitespace_in_table_scaffolding() {
        let tree = render(
            "<table>  <thead>  <tr>  <th>Header</th>  </tr>  </thead>  <tbody>  <tr>  <td>Cell</td>  </tr>  </tbody>  </table>",
        );

        let table = find_element(&tree, "table").unwrap();
        assert!(!has_text_children(&table.children));

        let thead = find_element(&tree, "thead").unwrap();
        assert!(!has_text_children(&thead.children));

        let tr = find_element(&tree, "tr").unwrap();
        assert!(!has_text_children(&tr.children));

        assert_eq!(find_element(&tree, "th").unwrap().text_content(), "Header");
        assert_eq!(find_element(&tree, "td").unwrap().text_content(), "Cell");
    }

    #[test]
    fn handles_tfoot_and_colgroup() {
        let tree = render(
            "<table><colgroup>  <col />  </colgroup><tbody><tr><td>Data</td></tr></tbody><tfoot>  <tr>  <td>Footer</td>  </tr>  </tfoot></table>",
        );

        let colgroup = find_element(&tree, "colgroup").unwrap();
        assert!(!has_text_children(&colgroup.children));

        let tfoot = find_element(&tree, "tfoot").unwrap();
        assert!(!has_text_children(&tfoot.children));
        assert_eq!(tfoot.text_content(), "Footer");
    }

    #[test]
    fn preserves_whitespace_between_inline_elements() {
        let tree = render("<p><strong>Bold</strong> and <em>italic</em></p>");

        let p = find_element(&tree, "p").unwrap();
        assert_eq!(p.text_content(), "Bold and italic");
        assert!(p
            .children
            .iter()
            .any(|child| matches!(child, RenderNode::Text { content } if content == " and ")));
    }

    #[test]
    fn preserves_cell_text_exactly() {
        let tree = render("<table><tbody><tr><td>  padded  </td></tr></tbody></table>");

        // 单元格不是骨架标签，其文本原样保留
        assert_eq!(find_element(&tree, "td").unwrap().text_content(), "  padded  ");
    }

    #[test]
    fn classifies_structural_tags() {
        for tag in ["table", "thead", "tbody", "tfoot", "tr", "colgroup"] {
            assert!(is_table_structural_tag(tag));
        }
        for tag in ["td", "th", "caption", "p", "div"] {
            assert!(!is_table_structural_tag(tag));
        }
    }
}
