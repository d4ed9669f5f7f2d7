use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::{callback::CallbackData, text::Language};

#[derive(Debug, Clone, Copy)]
pub struct Keyboard;

impl Keyboard {
    /// One button per supported language, in menu order.
    #[must_use]
    pub fn language_selection() -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::new(Language::all().map(|language| {
            vec![InlineKeyboardButton::callback(
                language.label(),
                CallbackData::Language(language),
            )]
        }))
    }
}

#[cfg(test)]
mod tests {
    use teloxide::types::InlineKeyboardButtonKind;

    use super::*;

    #[test]
    fn language_keyboard_lists_languages_in_order() {
        let keyboard = Keyboard::language_selection();
        let buttons: Vec<_> = keyboard
            .inline_keyboard
            .iter()
            .flatten()
            .map(|button| (button.text.as_str(), &button.kind))
            .collect();

        assert_eq!(buttons.len(), Language::all().count());
        assert_eq!(buttons[0].0, "🇬🇧 English");
        assert_eq!(buttons[1].0, "🇸🇾 العربية");
        assert!(matches!(
            buttons[1].1,
            InlineKeyboardButtonKind::CallbackData(data) if data == "lang;ar"
        ));
    }

    #[test]
    fn one_language_per_row() {
        let keyboard = Keyboard::language_selection();
        assert!(keyboard.inline_keyboard.iter().all(|row| row.len() == 1));
    }
}
