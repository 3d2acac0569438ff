//! Person-related DTOs.

use chrono::NaiveDate;
use pessoas_core::validation::rules;
use pessoas_core::{
    FieldError, PersonDraft, PersonId, PersonRecord, PessoasError, PessoasResult, ValidationLimits,
};
use serde::{Deserialize, Serialize};

/// Request to create a new person.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePersonRequest {
    pub nickname: String,

    pub name: String,

    pub birthday: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<Vec<String>>,
}

impl CreatePersonRequest {
    /// Validates the request against the configured limits.
    ///
    /// Runs at the boundary, before the save orchestrator is invoked.
    pub fn validate(&self, limits: &ValidationLimits) -> PessoasResult<()> {
        let mut errors: Vec<FieldError> = Vec::new();

        check_text(&mut errors, "nickname", &self.nickname, limits.max_nickname_len);
        check_text(&mut errors, "name", &self.name, limits.max_name_len);

        if let Some(stack) = &self.stack {
            for (index, item) in stack.iter().enumerate() {
                check_text(
                    &mut errors,
                    &format!("stack[{}]", index),
                    item,
                    limits.max_stack_item_len,
                );
            }
        }

        if errors.is_empty() {
            return Ok(());
        }

        let message = errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");

        Err(PessoasError::Validation(message))
    }
}

fn check_text(errors: &mut Vec<FieldError>, field: &str, value: &str, max: usize) {
    if rules::bounded_text(value, max).is_err() {
        errors.push(FieldError {
            field: field.to_string(),
            message: format!("must be at most {} characters", max),
            code: "text_too_long".to_string(),
        });
    }
    if rules::not_numeric(value).is_err() {
        errors.push(FieldError {
            field: field.to_string(),
            message: "must not be a numeric value".to_string(),
            code: "text_is_numeric".to_string(),
        });
    }
}

impl PersonDraft for CreatePersonRequest {
    fn build_search(&self) -> String {
        let mut parts = vec![self.nickname.to_lowercase(), self.name.to_lowercase()];
        if let Some(stack) = &self.stack {
            parts.extend(stack.iter().map(|item| item.to_lowercase()));
        }
        parts.join(" ")
    }

    fn build_person(&self, search: String) -> PersonRecord {
        PersonRecord::new(
            PersonId::new(),
            self.nickname.clone(),
            self.name.clone(),
            self.birthday,
            self.stack.clone(),
            search,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(nickname: &str, name: &str, stack: Option<Vec<&str>>) -> CreatePersonRequest {
        CreatePersonRequest {
            nickname: nickname.to_string(),
            name: name.to_string(),
            birthday: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            stack: stack.map(|s| s.iter().map(|i| (*i).to_string()).collect()),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        let req = request("zeca", "Jose Silva", Some(vec!["C#", "Java"]));
        assert!(req.validate(&ValidationLimits::default()).is_ok());
    }

    #[test]
    fn test_rejects_oversized_nickname() {
        let req = request(&"a".repeat(33), "Jose Silva", None);
        let err = req.validate(&ValidationLimits::default()).unwrap_err();
        assert!(matches!(err, PessoasError::Validation(_)));
        assert!(err.to_string().contains("nickname"));
    }

    #[test]
    fn test_rejects_numeric_nickname() {
        let req = request("12345", "Jose Silva", None);
        let err = req.validate(&ValidationLimits::default()).unwrap_err();
        assert!(matches!(err, PessoasError::Validation(_)));
    }

    #[test]
    fn test_rejects_oversized_name() {
        let req = request("zeca", &"b".repeat(101), None);
        assert!(req.validate(&ValidationLimits::default()).is_err());
    }

    #[test]
    fn test_rejects_bad_stack_entry() {
        let req = request("zeca", "Jose Silva", Some(vec!["Java", "42"]));
        let err = req.validate(&ValidationLimits::default()).unwrap_err();
        assert!(err.to_string().contains("stack[1]"));
    }

    #[test]
    fn test_custom_limits_apply() {
        let limits = ValidationLimits {
            max_nickname_len: 3,
            max_name_len: 100,
            max_stack_item_len: 32,
        };
        let req = request("zeca", "Jose Silva", None);
        assert!(req.validate(&limits).is_err());
    }

    #[test]
    fn test_build_search_lowercases_and_joins() {
        let req = request("Zeca", "Jose Silva", Some(vec!["C#", "Java"]));
        assert_eq!(req.build_search(), "zeca jose silva c# java");
    }

    #[test]
    fn test_build_search_without_stack() {
        let req = request("Zeca", "Jose Silva", None);
        assert_eq!(req.build_search(), "zeca jose silva");
    }

    #[test]
    fn test_build_person_generates_fresh_ids() {
        let req = request("zeca", "Jose Silva", Some(vec!["Java"]));
        let search = req.build_search();
        let first = req.build_person(search.clone());
        let second = req.build_person(search.clone());
        assert_ne!(first.id, second.id);
        assert_eq!(first.search, search);
        assert_eq!(first.nickname, "zeca");
    }
}
