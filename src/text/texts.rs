use once_cell::sync::Lazy;

use super::{build_catalog, CatalogData, Language, TextCatalog};

/*
 * All text here uses telegram html syntax.
 * Placeholders ({name}, {full_name}, ...) are filled in with `render`.
 */

const EN: &[(&str, &str)] = &[
    (
        "select_language",
        "👋 <b>Hello</b>, <b>{full_name}</b>!\n\nSelect language:",
    ),
    ("change_language", "<b>Select language:</b>"),
    (
        "main_menu",
        "<b>Write your question</b>, and we will answer you as soon as possible:",
    ),
    ("message_sent", "<b>Message sent!</b> Expect a response."),
    (
        "message_edited",
        concat!(
            "<b>The message was edited only in your chat.</b> ",
            "To send an edited message, send it as a new message."
        ),
    ),
    (
        "user_started_bot",
        concat!(
            "User <b>{name}</b> started the bot!\n\n",
            "List of available commands:\n\n",
            "• /ban\n",
            "Block/Unblock user",
            "<blockquote>Block the user if you do not want to receive messages from him.",
            "</blockquote>\n\n",
            "• /silent\n",
            "Activate/Deactivate silent mode",
            "<blockquote>When silent mode is enabled, messages are not sent to the user.",
            "</blockquote>\n\n",
            "• /information\n",
            "User information",
            "<blockquote>Receive a message with basic information about the user.</blockquote>"
        ),
    ),
    ("user_restarted_bot", "User <b>{name}</b> restarted the bot!"),
    ("user_stopped_bot", "User <b>{name}</b> stopped the bot!"),
    (
        "user_blocked",
        "<b>User blocked!</b> Messages from the user are not accepted.",
    ),
    (
        "user_unblocked",
        "<b>User unblocked!</b> Messages from the user are being accepted again.",
    ),
    (
        "blocked_by_user",
        "<b>Message not sent!</b> The bot has been blocked by the user.",
    ),
    (
        "user_information",
        concat!(
            "<b>ID:</b>\n",
            "- <code>{id}</code>\n",
            "<b>Name:</b>\n",
            "- {full_name}\n",
            "<b>Status:</b>\n",
            "- {state}\n",
            "<b>Username:</b>\n",
            "- {username}\n",
            "<b>Blocked:</b>\n",
            "- {is_banned}\n",
            "<b>Registration date:</b>\n",
            "- {created_at}"
        ),
    ),
    (
        "message_not_sent",
        "<b>Message not sent!</b> An unexpected error occurred.",
    ),
    ("message_sent_to_user", "<b>Message sent to user!</b>"),
    (
        "silent_mode_enabled",
        "<b>Silent mode activated!</b> Messages will not be delivered to the user.",
    ),
    (
        "silent_mode_disabled",
        "<b>Silent mode deactivated!</b> The user will receive all messages.",
    ),
];

const AR: &[(&str, &str)] = &[
    (
        "select_language",
        "👋 <b>مرحباً</b>، <b>{full_name}</b>!\n\nاختر اللغة:",
    ),
    ("change_language", "<b>اختر اللغة:</b>"),
    ("main_menu", "<b>اكتب سؤالك</b>، وسنجيبك في أقرب وقت ممكن:"),
    ("message_sent", "<b>تم إرسال الرسالة!</b> انتظر الرد."),
    (
        "message_edited",
        concat!(
            "<b>تم تعديل الرسالة في محادثتك فقط.</b> ",
            "لإرسال الرسالة المعدلة، أرسلها كرسالة جديدة."
        ),
    ),
    (
        "user_started_bot",
        concat!(
            "المستخدم <b>{name}</b> بدأ البوت!\n\n",
            "قائمة الأوامر المتاحة:\n\n",
            "• /ban\n",
            "حظر/إلغاء حظر المستخدم",
            "<blockquote>احظر المستخدم إذا كنت لا تريد استقبال رسائل منه.</blockquote>\n\n",
            "• /silent\n",
            "تفعيل/إلغاء الوضع الصامت",
            "<blockquote>عند تفعيل الوضع الصامت، لا يتم إرسال الرسائل للمستخدم.</blockquote>\n\n",
            "• /information\n",
            "معلومات المستخدم",
            "<blockquote>استلم رسالة تحتوي على المعلومات الأساسية عن المستخدم.</blockquote>"
        ),
    ),
    ("user_restarted_bot", "المستخدم <b>{name}</b> أعاد تشغيل البوت!"),
    ("user_stopped_bot", "المستخدم <b>{name}</b> أوقف البوت!"),
    (
        "user_blocked",
        "<b>تم حظر المستخدم!</b> لن يتم قبول الرسائل من هذا المستخدم.",
    ),
    (
        "user_unblocked",
        "<b>تم إلغاء حظر المستخدم!</b> سيتم قبول الرسائل من هذا المستخدم مجدداً.",
    ),
    (
        "blocked_by_user",
        "<b>لم يتم إرسال الرسالة!</b> تم حظر البوت من قبل المستخدم.",
    ),
    (
        "user_information",
        concat!(
            "<b>المعرف:</b>\n",
            "- <code>{id}</code>\n",
            "<b>الاسم:</b>\n",
            "- {full_name}\n",
            "<b>الحالة:</b>\n",
            "- {state}\n",
            "<b>اسم المستخدم:</b>\n",
            "- {username}\n",
            "<b>محظور:</b>\n",
            "- {is_banned}\n",
            "<b>تاريخ التسجيل:</b>\n",
            "- {created_at}"
        ),
    ),
    (
        "message_not_sent",
        "<b>لم يتم إرسال الرسالة!</b> حدث خطأ غير متوقع.",
    ),
    ("message_sent_to_user", "<b>تم إرسال الرسالة للمستخدم!</b>"),
    (
        "silent_mode_enabled",
        "<b>تم تفعيل الوضع الصامت!</b> لن يتم توصيل الرسائل للمستخدم.",
    ),
    (
        "silent_mode_disabled",
        "<b>تم إلغاء الوضع الصامت!</b> سيستلم المستخدم جميع الرسائل.",
    ),
];

static MESSAGES: Lazy<CatalogData> =
    Lazy::new(|| build_catalog(&[(Language::En, EN), (Language::Ar, AR)]));

/// Messages shown to users and to the support chat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMessage {
    language: Language,
}

impl TextMessage {
    /// Unsupported language codes silently fall back to english.
    #[must_use]
    pub fn new(language_code: &str) -> Self {
        Self::for_language(Language::resolve(language_code))
    }

    #[must_use]
    pub const fn for_language(language: Language) -> Self {
        Self { language }
    }
}

impl TextCatalog for TextMessage {
    fn language(&self) -> Language {
        self.language
    }

    fn data(&self) -> &'static CatalogData {
        &MESSAGES
    }
}
