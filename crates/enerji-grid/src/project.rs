//! Record projection: which underlying field a column key reads.
//!
//! Records carry parallel name fields, `name` (Turkish) and `nameEN` (English). Either key
//! used as a column refers to "the name" and is resolved against the active language.

use crate::language::Language;
use crate::record::FieldSource;
use crate::value::Value;

/// Name field in the primary language.
pub const PRIMARY_NAME_KEY: &str = "name";

/// Name field in the alternate language.
pub const ALTERNATE_NAME_KEY: &str = "nameEN";

/// Returns `true` if the column key is one of the name aliases.
pub fn is_name_key(key: &str) -> bool {
    key == PRIMARY_NAME_KEY || key == ALTERNATE_NAME_KEY
}

/// Resolves the raw value a column key selects from a record.
///
/// Name aliases read the active language's name, falling back to the primary name when the
/// translated one is missing or empty. Every other key is read verbatim.
///
/// ```
/// use enerji_grid::{resolve_field, Language, Record, Value};
///
/// let record = Record::new().with("name", "Kömür");
/// assert_eq!(resolve_field(&record, "nameEN", Language::En), Value::String("Kömür"));
/// ```
pub fn resolve_field<'a, T>(record: &'a T, key: &str, language: Language) -> Value<'a>
where
    T: FieldSource + ?Sized,
{
    if !is_name_key(key) {
        return record.field_value(key);
    }

    let localized = record.field_value(language.name_key());
    if localized.is_blank() {
        record.field_value(PRIMARY_NAME_KEY)
    } else {
        localized
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use crate::value::Number;

    fn fuel() -> Record {
        Record::new()
            .with("name", "Doğal Gaz")
            .with("nameEN", "Natural Gas")
            .with("value", 405299)
    }

    #[test]
    fn both_aliases_follow_active_language() {
        let record = fuel();
        for key in [PRIMARY_NAME_KEY, ALTERNATE_NAME_KEY] {
            assert_eq!(
                resolve_field(&record, key, Language::Tr),
                Value::String("Doğal Gaz")
            );
            assert_eq!(
                resolve_field(&record, key, Language::En),
                Value::String("Natural Gas")
            );
        }
    }

    #[test]
    fn missing_translation_falls_back_to_primary() {
        let record = Record::new().with("name", "Sanayi (2024)").with("value", 1);
        assert_eq!(
            resolve_field(&record, "nameEN", Language::En),
            Value::String("Sanayi (2024)")
        );
    }

    #[test]
    fn empty_translation_falls_back_to_primary() {
        let record = Record::new().with("name", "Isı").with("nameEN", "");
        assert_eq!(
            resolve_field(&record, "name", Language::En),
            Value::String("Isı")
        );
    }

    #[test]
    fn no_name_at_all_is_none() {
        let record = Record::new().with("value", 3);
        assert_eq!(resolve_field(&record, "name", Language::En), Value::None);
    }

    #[test]
    fn other_keys_are_verbatim() {
        let record = fuel();
        assert_eq!(
            resolve_field(&record, "value", Language::En),
            Value::Number(Number::I64(405299))
        );
        assert_eq!(resolve_field(&record, "code", Language::Tr), Value::None);
    }
}
