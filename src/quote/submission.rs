use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::questions::catalog;
use crate::address::NormalizedAddress;
use crate::config::FeatureFlags;
use crate::error::{FieldError, QuoteError, Result};
use crate::phone;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl ContactDetails {
    /// Returns one error per failing field; empty when the details are acceptable.
    pub fn validate(&self, check_phone: bool) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.first_name.trim().chars().count() < 2 {
            errors.push(FieldError::new(
                "contact.firstName",
                "First name must be at least 2 characters",
            ));
        }
        if self.last_name.trim().chars().count() < 2 {
            errors.push(FieldError::new(
                "contact.lastName",
                "Last name must be at least 2 characters",
            ));
        }
        if !EMAIL.is_match(&self.email) {
            errors.push(FieldError::new(
                "contact.email",
                "Please enter a valid email address",
            ));
        }
        if check_phone && !phone::is_valid_uk(&self.phone) {
            errors.push(FieldError::new(
                "contact.phone",
                "Please enter a valid UK phone number",
            ));
        }
        errors
    }
}

/// Everything the form collected, as posted by the UI
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSubmission {
    #[serde(default)]
    pub answers: BTreeMap<String, String>,
    #[serde(default)]
    pub address: Option<NormalizedAddress>,
    #[serde(default)]
    pub contact: ContactDetails,
    #[serde(default)]
    pub phone_verified: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteAnswer {
    pub question_id: String,
    pub question: String,
    pub value: String,
    pub label: String,
}

/// A validated quote request, ready for human review
#[derive(Debug, Clone, Serialize)]
pub struct QuoteRequest {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub answers: Vec<QuoteAnswer>,
    pub address: NormalizedAddress,
    pub contact: ContactDetails,
    pub phone_verified: bool,
}

fn validate_answers(answers: &BTreeMap<String, String>) -> (Vec<QuoteAnswer>, Vec<FieldError>) {
    let questions = catalog();
    let mut resolved = Vec::with_capacity(questions.len());
    let mut errors = Vec::new();

    for question in &questions {
        let field = format!("answers.{}", question.id);
        match answers.get(question.id) {
            None => errors.push(FieldError::new(field, "An answer is required")),
            Some(value) => match question.option(value) {
                Some(option) => resolved.push(QuoteAnswer {
                    question_id: question.id.to_string(),
                    question: question.question.to_string(),
                    value: option.value.to_string(),
                    label: option.label.to_string(),
                }),
                None => errors.push(FieldError::new(field, format!("'{}' is not a valid option", value))),
            },
        }
    }

    for id in answers.keys() {
        if !questions.iter().any(|q| q.id == id.as_str()) {
            errors.push(FieldError::new(format!("answers.{}", id), "Unknown question"));
        }
    }

    (resolved, errors)
}

fn validate_address(address: Option<&NormalizedAddress>) -> Vec<FieldError> {
    let Some(address) = address else {
        return vec![FieldError::new("address", "Please select an address")];
    };
    let mut errors = Vec::new();
    if address.address_line_1.trim().is_empty() {
        errors.push(FieldError::new("address.address_line_1", "Address line 1 is required"));
    }
    if address.town_or_city.trim().is_empty() {
        errors.push(FieldError::new("address.town_or_city", "Town or city is required"));
    }
    if address.postcode.trim().is_empty() {
        errors.push(FieldError::new("address.postcode", "Postcode is required"));
    }
    errors
}

/// Validates a submission and assembles the quote request.
///
/// All failing fields are reported together in a single
/// [`QuoteError::Validation`].
pub fn assemble(
    submission: QuoteSubmission,
    features: &FeatureFlags,
    default_country_code: &str,
) -> Result<QuoteRequest> {
    let (answers, mut errors) = validate_answers(&submission.answers);
    errors.extend(validate_address(submission.address.as_ref()));
    errors.extend(submission.contact.validate(features.phone_validation_enabled));
    if features.otp_verification_enabled && !submission.phone_verified {
        errors.push(FieldError::new(
            "phoneVerified",
            "Please verify your phone number",
        ));
    }

    let address = match (errors.is_empty(), submission.address) {
        (true, Some(address)) => address,
        _ => return Err(QuoteError::Validation(errors)),
    };

    let contact = ContactDetails {
        first_name: submission.contact.first_name.trim().to_string(),
        last_name: submission.contact.last_name.trim().to_string(),
        email: submission.contact.email.trim().to_string(),
        phone: phone::to_e164(&submission.contact.phone, default_country_code),
    };

    Ok(QuoteRequest {
        reference: Uuid::new_v4(),
        submitted_at: Utc::now(),
        answers,
        address,
        contact,
        phone_verified: submission.phone_verified,
    })
}
