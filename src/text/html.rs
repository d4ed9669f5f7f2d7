use std::fmt::Display;

use teloxide::utils::html::escape;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Html(String);

impl Html {
    pub(super) fn new<T>(content: T) -> Self
    where
        T: Into<String>,
    {
        Self(content.into())
    }

    pub fn escaped<T>(content: T) -> Self
    where
        T: Into<String>,
    {
        Self(escape(&content.into()))
    }
}

impl Display for Html {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Html> for String {
    fn from(value: Html) -> Self {
        value.0
    }
}

/// Fills `{name}` placeholders of an html template with escaped values.
///
/// Placeholders without a matching value are left as they are.
#[must_use]
pub fn render(template: &str, values: &[(&str, &str)]) -> Html {
    let rendered = values.iter().fold(template.to_string(), |text, (name, value)| {
        text.replace(&format!("{{{name}}}"), &Html::escaped(*value).0)
    });
    Html::new(rendered)
}
