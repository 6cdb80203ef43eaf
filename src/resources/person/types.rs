//! Person response types

use super::enums::{
    PersonDocumentDetailsCode, PersonVerificationDetailsCode, PersonVerificationStatus,
    PoliticalExposure,
};
use crate::expand::Expandable;
use crate::resources::account::{
    AccountDeclaration, AccountRequirementsAlternative, AccountRequirementsError, JapanAddress,
};
use crate::resources::refs::File;
use crate::types::{Address, Metadata};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonAdditionalTosAcceptances {
    pub account: Option<AccountDeclaration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateOfBirth {
    pub day: Option<i64>,
    pub month: Option<i64>,
    pub year: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRequirements {
    pub alternatives: Option<Vec<AccountRequirementsAlternative>>,
    pub currently_due: Option<Vec<String>>,
    pub errors: Option<Vec<AccountRequirementsError>>,
    pub eventually_due: Option<Vec<String>>,
    pub past_due: Option<Vec<String>>,
    pub pending_verification: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRelationship {
    pub authorizer: Option<bool>,
    pub director: Option<bool>,
    pub executive: Option<bool>,
    pub legal_guardian: Option<bool>,
    pub owner: Option<bool>,
    pub percent_ownership: Option<f64>,
    pub representative: Option<bool>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonVerificationDocument {
    pub back: Option<Expandable<File>>,
    pub details: Option<String>,
    pub details_code: Option<PersonDocumentDetailsCode>,
    pub front: Option<Expandable<File>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonVerification {
    pub additional_document: Option<PersonVerificationDocument>,
    pub details: Option<String>,
    pub details_code: Option<PersonVerificationDetailsCode>,
    pub document: Option<PersonVerificationDocument>,
    pub status: Option<PersonVerificationStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub account: Option<String>,
    pub additional_tos_acceptances: Option<PersonAdditionalTosAcceptances>,
    pub address: Option<Address>,
    pub address_kana: Option<JapanAddress>,
    pub address_kanji: Option<JapanAddress>,
    pub created: Option<i64>,
    pub deleted: Option<bool>,
    pub dob: Option<DateOfBirth>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub first_name_kana: Option<String>,
    pub first_name_kanji: Option<String>,
    pub full_name_aliases: Option<Vec<String>>,
    pub future_requirements: Option<PersonRequirements>,
    pub gender: Option<String>,
    #[serde(default)]
    pub id: String,
    pub id_number_provided: Option<bool>,
    pub id_number_secondary_provided: Option<bool>,
    pub last_name: Option<String>,
    pub last_name_kana: Option<String>,
    pub last_name_kanji: Option<String>,
    pub maiden_name: Option<String>,
    pub metadata: Option<Metadata>,
    pub nationality: Option<String>,
    #[serde(default)]
    pub object: String,
    pub phone: Option<String>,
    pub political_exposure: Option<PoliticalExposure>,
    pub registered_address: Option<Address>,
    pub relationship: Option<PersonRelationship>,
    pub requirements: Option<PersonRequirements>,
    pub ssn_last_4_provided: Option<bool>,
    pub verification: Option<PersonVerification>,
}
