use serde::{Deserialize, Serialize};
use std::fmt::Display;

use inquire::validator::{StringValidator, Validation};

#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Text(pub String);

impl Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl sqlx::Type<sqlx::Sqlite> for Text {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <&String as sqlx::Type<sqlx::Sqlite>>::type_info()
    }
}

#[derive(Clone)]
pub struct ValidatorNonEmpty {}
impl StringValidator for ValidatorNonEmpty {
    fn validate(&self, input: &str) -> Result<Validation, inquire::CustomUserError> {
        if input.trim().is_empty() {
            return Ok(Validation::Invalid("Empty string not allowed".into()));
        }
        Ok(Validation::Valid)
    }
}

impl Text {
    pub fn create_by_prompt(prompt: &str) -> anyhow::Result<Self> {
        let prompt = inquire::Text::new(prompt).with_validator(ValidatorNonEmpty {});
        Ok(Text(prompt.prompt()?.trim().to_string()))
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for Text {
    fn encode_by_ref(
        &self,
        args: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> sqlx::encode::IsNull {
        args.push(sqlx::sqlite::SqliteArgumentValue::Text(
            self.0.clone().into(),
        ));

        sqlx::encode::IsNull::No
    }
}

impl<'r, DB: sqlx::Database> sqlx::Decode<'r, DB> for Text
where
    String: sqlx::Decode<'r, DB>,
{
    fn decode(
        value: <DB as sqlx::database::HasValueRef<'r>>::ValueRef,
    ) -> Result<Self, Box<dyn std::error::Error + 'static + Send + Sync>> {
        let value = <String as sqlx::Decode<DB>>::decode(value)?;
        Ok(Text(value))
    }
}
