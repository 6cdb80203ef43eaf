//! Request parameters for persons

use crate::params::Extra;
use crate::resources::account::{
    AccountDeclarationParams, DocumentFilesParams, JapanAddressParams, VerificationDocumentParams,
};
use crate::types::{AddressParams, Metadata};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_tos_acceptances: Option<PersonAdditionalTosAcceptancesParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_kana: Option<JapanAddressParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_kanji: Option<JapanAddressParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<DateOfBirthParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<PersonDocumentsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name_kana: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name_kanji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name_aliases: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number_secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name_kana: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name_kanji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maiden_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub political_exposure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_address: Option<AddressParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationship: Option<PersonRelationshipParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn_last_4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<PersonVerificationParams>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonAdditionalTosAcceptancesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountDeclarationParams>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DateOfBirthParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonDocumentsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_authorization: Option<DocumentFilesParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passport: Option<DocumentFilesParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visa: Option<DocumentFilesParams>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonRelationshipParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorizer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_guardian: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_ownership: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub representative: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonVerificationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_document: Option<VerificationDocumentParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<VerificationDocumentParams>,
}
