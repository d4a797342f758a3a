use leptos::prelude::*;

/// Class names for every styled slot of the booking pages. Views only ever
/// reference these slots, so a different preset restyles the whole app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub page: &'static str,
    pub panel: &'static str,
    pub heading: &'static str,
    pub form: &'static str,
    pub field: &'static str,
    pub label: &'static str,
    pub input: &'static str,
    pub submit: &'static str,
    pub list: &'static str,
    pub list_item: &'static str,
    pub link: &'static str,
    pub item_title: &'static str,
    pub item_meta: &'static str,
    pub empty: &'static str,
    pub detail_page: &'static str,
    pub detail_card: &'static str,
    pub back_link: &'static str,
}

impl Theme {
    pub const ROSE: Theme = Theme {
        name: "rose",
        page: "rose-page",
        panel: "rose-panel",
        heading: "rose-heading",
        form: "rose-form",
        field: "rose-field",
        label: "rose-label",
        input: "rose-input",
        submit: "rose-submit",
        list: "rose-list",
        list_item: "rose-list-item",
        link: "rose-link",
        item_title: "rose-item-title",
        item_meta: "rose-item-meta",
        empty: "rose-empty",
        detail_page: "rose-detail-page",
        detail_card: "rose-detail-card",
        back_link: "rose-back-link",
    };

    pub const SLATE: Theme = Theme {
        name: "slate",
        page: "slate-page",
        panel: "slate-panel",
        heading: "slate-heading",
        form: "slate-form",
        field: "slate-field",
        label: "slate-label",
        input: "slate-input",
        submit: "slate-submit",
        list: "slate-list",
        list_item: "slate-list-item",
        link: "slate-link",
        item_title: "slate-item-title",
        item_meta: "slate-item-meta",
        empty: "slate-empty",
        detail_page: "slate-detail-page",
        detail_card: "slate-detail-card",
        back_link: "slate-back-link",
    };
}

impl Default for Theme {
    fn default() -> Self {
        Theme::ROSE
    }
}

pub fn provide_theme(theme: Theme) {
    provide_context(theme);
}

pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_rose_without_context() {
        let theme = Owner::new().with(use_theme);
        assert_eq!(theme, Theme::ROSE);
    }

    #[test]
    fn provided_theme_replaces_default() {
        let theme = Owner::new().with(|| {
            provide_theme(Theme::SLATE);
            use_theme()
        });
        assert_eq!(theme.name, "slate");
        assert_ne!(theme.page, Theme::ROSE.page);
    }
}
