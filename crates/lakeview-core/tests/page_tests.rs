use lakeview_core::{page_type_buttons, PageButtonOptions, PageType};

fn options() -> PageButtonOptions {
    PageButtonOptions {
        show_wiki: true,
        is_new_query: false,
    }
}

#[test]
fn test_should_render_wiki_button_if_show_wiki() {
    let buttons = page_type_buttons(&options());
    let wiki = buttons.iter().filter(|b| b.page_type == PageType::Wiki).count();
    assert_eq!(wiki, 1);
}

#[test]
fn test_should_not_render_wiki_button_if_not_show_wiki() {
    let buttons = page_type_buttons(&PageButtonOptions {
        show_wiki: false,
        ..options()
    });
    let wiki = buttons.iter().filter(|b| b.page_type.tag() == "wiki").count();
    assert_eq!(wiki, 0);
}

#[test]
fn test_button_order() {
    let tags: Vec<_> = page_type_buttons(&options())
        .iter()
        .map(|b| b.page_type.tag())
        .collect();
    assert_eq!(tags, vec!["default", "wiki", "graph", "reflections", "history"]);
}
