//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, ErrorTexts, FormTexts, HelpTexts, HintTexts, StatusTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "GrindMap",
        loading: "加载中...",
    },

    form: FormTexts {
        heading: "输入你的用户名",
        fetch_button: "全部刷新",
        recent_searches: "最近搜索",
    },

    errors: ErrorTexts {
        not_platform_url: "不是有效的 {platform} 链接",
        invalid_url_format: "链接格式无效",
        invalid_username_format: "用户名格式无效",
    },

    hints: HintTexts {
        switch_field: "切换输入框",
        select: "选择",
        remove: "删除",
        fetch: "获取",
        help: "帮助",
        quit: "退出",
    },

    status: StatusTexts {
        fetch_started: "正在获取 {count} 个用户名...",
        fetch_succeeded: "已获取 {count} 个平台",
        fetch_failed: "获取失败：{platforms}",
        rejected_loading: "已有请求正在进行",
        rejected_errors: "请先修正标红的输入框",
        rejected_empty: "请至少输入一个用户名",
        entry_removed: "已从最近搜索中删除",
        language_switched: "语言：简体中文",
    },

    help: HelpTexts {
        title: "键盘与鼠标",
        close_hint: "按 Esc 或 F1 关闭",
        entries: &[
            ("Tab / Shift+Tab", "下一个 / 上一个输入框"),
            ("↑ ↓", "在最近搜索中移动"),
            ("Enter", "选中高亮项，否则获取"),
            ("Esc", "关闭最近搜索"),
            ("Ctrl+D", "删除高亮项"),
            ("Ctrl+U", "清空输入框"),
            ("Ctrl+R", "全部获取"),
            ("Ctrl+L", "切换语言"),
            ("点击 / 悬停", "选择历史项，× 删除"),
            ("Alt+Q / Ctrl+C", "退出"),
        ],
    },
};
