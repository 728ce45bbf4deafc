//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use crate::common::{find_element, render};
    use marksafe::renderer::node::RenderElement;
    use marksafe::renderer::rel::enforce_anchor_rel;

    #[test]
    fn adds_rel_tokens_for_blank_target() {
        let tree = render("<a href=\"https://example.com\" target=\"_blank\">External</a>");

        let anchor = find_element(&tree, "a").unwrap();
        let rel = anchor.attr("rel").unwrap();
        assert!(rel.contains("noopener"));
        assert!(rel.contains("noreferrer"));
    }

    #[test]
    fn preserves_existing_rel_tokens() {
        let tree = render(
            "<a href=\"https://example.com\" target=\"_blank\" rel=\"external\">External</a>",
        );

        let anchor = find_element(&tree, "a").unwrap();
        assert_eq!(anchor.attr("rel"), Some("external noopener noreferrer"));
    }

    #[test]
    fn does_not_duplicate_existing_tokens() {
        let mut element = RenderElement::new("a");
        element.set_attr("target", "_blank");
        element.set_attr("rel", "noopener noreferrer");

        enforce_anchor_rel(&mut element);

        assert_eq!(element.attr("rel"), Some("noopener noreferrer"));
    }

    #[test]
    fn token_match_is_case_insensitive() {
        let mut element = RenderElement::new("a");
        element.set_attr("target", "_blank");
        element.set_attr("rel", "NoOpener");

        enforce_anchor_rel(&mut element);

        assert_eq!(element.attr("rel"), Some("NoOpener noreferrer"));
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use crate::common::{find_element, render};

    #[test]
    fn no_rel_without_blank_target() {
        let tree = render("<a href=\"https://example.com\">Internal</a>");

        let anchor = find_element(&tree, "a").unwrap();
        assert!(anchor.attr("rel").is_none());
    }

    #[test]
    fn no_rel_for_self_target() {
        let tree = render("<a href=\"https://example.com\" target=\"_self\">Link</a>");

        let anchor = find_element(&tree, "a").unwrap();
        assert!(anchor.attr("rel").is_none());
        assert_eq!(anchor.attr("target"), Some("_self"));
    }
}
