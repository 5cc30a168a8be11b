//! `Record` implementation that lets [`Account`] live in a [`RecordActor`](record_actor::RecordActor).

use super::AccountError;
use crate::model::{Account, AccountCreate, AccountUpdate};
use record_actor::Record;
use uuid::Uuid;

impl Record for Account {
    type Key = String;
    type Create = AccountCreate;
    type Update = AccountUpdate;
    type Error = AccountError;

    fn key_of(params: &AccountCreate) -> String {
        params.email.clone()
    }

    /// Validates the payload and assigns a fresh account number.
    fn from_create(params: AccountCreate) -> Result<Self, AccountError> {
        validate_name(&params.name)?;
        validate_email(&params.email)?;
        validate_mobile(&params.mobile_number)?;
        Ok(Self {
            account_number: Uuid::new_v4().to_string(),
            name: params.name,
            email: params.email,
            mobile_number: params.mobile_number,
        })
    }

    /// # Fields Updated
    /// - `name`
    /// - `mobile_number`
    fn apply_update(&mut self, update: AccountUpdate) -> Result<(), AccountError> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(mobile) = &update.mobile_number {
            validate_mobile(mobile)?;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(mobile) = update.mobile_number {
            self.mobile_number = mobile;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), AccountError> {
    if name.trim().is_empty() {
        return Err(AccountError::ValidationError(
            "Name can not be a null or empty".into(),
        ));
    }
    let letters_only = name.chars().all(|c| c.is_alphabetic() || c == ' ');
    if name.chars().count() <= 4 || !letters_only {
        return Err(AccountError::ValidationError(
            "Name must be longer than 4 letters and contain only letters and spaces".into(),
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), AccountError> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.contains('@') && domain.split('.').count() > 1
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    };
    if !valid {
        return Err(AccountError::ValidationError("Invalid email format".into()));
    }
    Ok(())
}

fn validate_mobile(mobile: &str) -> Result<(), AccountError> {
    if mobile.len() != 8 || !mobile.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AccountError::ValidationError(
            "Mobile number must be 8 digits".into(),
        ));
    }
    Ok(())
}
