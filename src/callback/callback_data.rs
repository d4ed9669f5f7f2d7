use nom::bytes::complete::tag;
use nom::character::complete::alpha1;
use nom::combinator::{map, map_opt};
use nom::sequence::preceded;
use nom::IResult;
use std::fmt::Display;

use crate::text::Language;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CallbackData {
    /// A button of the language selection keyboard.
    Language(Language),
}

fn parse_language(input: &str) -> IResult<&str, Language> {
    map_opt(alpha1, Language::from_code)(input)
}

fn parse_callback_data(input: &str) -> IResult<&str, CallbackData> {
    map(preceded(tag("lang;"), parse_language), CallbackData::Language)(input)
}

impl TryFrom<String> for CallbackData {
    type Error = anyhow::Error;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        let (input, data) = parse_callback_data(&input)
            .map_err(|err| anyhow::anyhow!("invalid callback data: {}", err))?;
        if input.is_empty() {
            Ok(data)
        } else {
            Err(anyhow::anyhow!("invalid callback data: input not consumed"))
        }
    }
}

impl Display for CallbackData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Language(language) => write!(f, "lang;{}", language.code()),
        }
    }
}

impl From<CallbackData> for String {
    fn from(value: CallbackData) -> Self {
        value.to_string()
    }
}
