//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, ErrorTexts, FormTexts, HelpTexts, HintTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "GrindMap",
        loading: "Loading...",
    },

    form: FormTexts {
        heading: "Enter Your Usernames",
        fetch_button: "Refresh All",
        recent_searches: "Recent searches",
    },

    errors: ErrorTexts {
        not_platform_url: "Not a valid {platform} URL",
        invalid_url_format: "Invalid URL format",
        invalid_username_format: "Invalid username format",
    },

    hints: HintTexts {
        switch_field: "Switch field",
        select: "Select",
        remove: "Remove",
        fetch: "Fetch",
        help: "Help",
        quit: "Quit",
    },

    status: StatusTexts {
        fetch_started: "Fetching {count} username(s)...",
        fetch_succeeded: "Fetched {count} platform(s)",
        fetch_failed: "Fetch failed: {platforms}",
        rejected_loading: "A fetch is already running",
        rejected_errors: "Fix the highlighted fields first",
        rejected_empty: "Enter at least one username",
        entry_removed: "Removed from recent searches",
        language_switched: "Language: English",
    },

    help: HelpTexts {
        title: "Keyboard & Mouse",
        close_hint: "Press Esc or F1 to close",
        entries: &[
            ("Tab / Shift+Tab", "Next / previous field"),
            ("↑ ↓", "Move through recent searches"),
            ("Enter", "Pick highlighted entry, otherwise fetch"),
            ("Esc", "Close recent searches"),
            ("Ctrl+D", "Remove highlighted entry"),
            ("Ctrl+U", "Clear field"),
            ("Ctrl+R", "Fetch all"),
            ("Ctrl+L", "Switch language"),
            ("Click / hover", "Pick entry, × removes it"),
            ("Alt+Q / Ctrl+C", "Quit"),
        ],
    },
};
