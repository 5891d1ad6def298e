//! Page-type buttons shown above a dataset.

use serde::{Deserialize, Serialize};

/// A page of the dataset view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    /// The data preview.
    #[default]
    Default,
    Wiki,
    Graph,
    Reflections,
    History,
}

impl PageType {
    /// Stable tag used to look buttons up.
    pub fn tag(self) -> &'static str {
        match self {
            PageType::Default => "default",
            PageType::Wiki => "wiki",
            PageType::Graph => "graph",
            PageType::Reflections => "reflections",
            PageType::History => "history",
        }
    }

    /// Message key of the button label.
    pub fn label_key(self) -> &'static str {
        match self {
            PageType::Default => "Dataset.Data",
            PageType::Wiki => "Dataset.Wiki",
            PageType::Graph => "Dataset.Graph",
            PageType::Reflections => "Dataset.Reflections",
            PageType::History => "Dataset.History",
        }
    }
}

/// What the dataset page knows about its dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageButtonOptions {
    pub show_wiki: bool,
    /// An unsaved query has no lineage, reflections or history yet.
    pub is_new_query: bool,
}

impl Default for PageButtonOptions {
    fn default() -> Self {
        Self {
            show_wiki: true,
            is_new_query: false,
        }
    }
}

/// A rendered page-type button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTypeButton {
    pub page_type: PageType,
    pub label_key: &'static str,
}

impl PageTypeButton {
    fn new(page_type: PageType) -> Self {
        Self {
            page_type,
            label_key: page_type.label_key(),
        }
    }
}

/// Buttons for a dataset page, in display order.
pub fn page_type_buttons(options: &PageButtonOptions) -> Vec<PageTypeButton> {
    let mut buttons = vec![PageTypeButton::new(PageType::Default)];
    if options.show_wiki {
        buttons.push(PageTypeButton::new(PageType::Wiki));
    }
    if !options.is_new_query {
        buttons.extend(
            [PageType::Graph, PageType::Reflections, PageType::History]
                .into_iter()
                .map(PageTypeButton::new),
        );
    }
    buttons
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(buttons: &[PageTypeButton], page_type: PageType) -> usize {
        buttons.iter().filter(|b| b.page_type == page_type).count()
    }

    #[test]
    fn test_wiki_button_rendered_when_enabled() {
        let buttons = page_type_buttons(&PageButtonOptions::default());
        assert_eq!(count(&buttons, PageType::Wiki), 1);
    }

    #[test]
    fn test_wiki_button_hidden_when_disabled() {
        let options = PageButtonOptions {
            show_wiki: false,
            ..PageButtonOptions::default()
        };
        let buttons = page_type_buttons(&options);
        assert_eq!(count(&buttons, PageType::Wiki), 0);
        assert_eq!(buttons[0].page_type, PageType::Default);
    }

    #[test]
    fn test_new_query_has_no_history() {
        let options = PageButtonOptions {
            show_wiki: false,
            is_new_query: true,
        };
        let buttons = page_type_buttons(&options);
        assert_eq!(buttons.len(), 1);
    }
}
