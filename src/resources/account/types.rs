//! Connected account response types

use super::enums::{
    AccountBusinessType, AccountCapabilityStatus, AccountType, CompanyOwnershipExemptionReason,
    CompanyStructure, ControllerFeesPayer, ControllerLossesPayments,
    ControllerRequirementCollection, ControllerStripeDashboardType, ControllerType,
    PayoutScheduleInterval, RequirementsDisabledReason, TosServiceAgreement,
    VerificationDocumentDetailsCode,
};
use crate::expand::Expandable;
use crate::resources::external_account::ExternalAccount;
use crate::resources::person::Person;
use crate::resources::refs::File;
use crate::resources::tax_id::TaxId;
use crate::types::{Address, List, Metadata};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountBusinessProfileAnnualRevenue {
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub fiscal_year_end: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountBusinessProfileMonthlyEstimatedRevenue {
    pub amount: Option<i64>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountBusinessProfile {
    pub annual_revenue: Option<AccountBusinessProfileAnnualRevenue>,
    pub estimated_worker_count: Option<i64>,
    pub mcc: Option<String>,
    pub monthly_estimated_revenue: Option<AccountBusinessProfileMonthlyEstimatedRevenue>,
    pub name: Option<String>,
    pub product_description: Option<String>,
    pub support_address: Option<Address>,
    pub support_email: Option<String>,
    pub support_phone: Option<String>,
    pub support_url: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountCapabilities {
    pub acss_debit_payments: Option<AccountCapabilityStatus>,
    pub affirm_payments: Option<AccountCapabilityStatus>,
    pub afterpay_clearpay_payments: Option<AccountCapabilityStatus>,
    pub alma_payments: Option<AccountCapabilityStatus>,
    pub amazon_pay_payments: Option<AccountCapabilityStatus>,
    pub au_becs_debit_payments: Option<AccountCapabilityStatus>,
    pub bacs_debit_payments: Option<AccountCapabilityStatus>,
    pub bancontact_payments: Option<AccountCapabilityStatus>,
    pub bank_transfer_payments: Option<AccountCapabilityStatus>,
    pub blik_payments: Option<AccountCapabilityStatus>,
    pub boleto_payments: Option<AccountCapabilityStatus>,
    pub card_issuing: Option<AccountCapabilityStatus>,
    pub card_payments: Option<AccountCapabilityStatus>,
    pub cartes_bancaires_payments: Option<AccountCapabilityStatus>,
    pub cashapp_payments: Option<AccountCapabilityStatus>,
    pub eps_payments: Option<AccountCapabilityStatus>,
    pub fpx_payments: Option<AccountCapabilityStatus>,
    pub gb_bank_transfer_payments: Option<AccountCapabilityStatus>,
    pub giropay_payments: Option<AccountCapabilityStatus>,
    pub grabpay_payments: Option<AccountCapabilityStatus>,
    pub ideal_payments: Option<AccountCapabilityStatus>,
    pub india_international_payments: Option<AccountCapabilityStatus>,
    pub jcb_payments: Option<AccountCapabilityStatus>,
    pub jp_bank_transfer_payments: Option<AccountCapabilityStatus>,
    pub kakao_pay_payments: Option<AccountCapabilityStatus>,
    pub klarna_payments: Option<AccountCapabilityStatus>,
    pub konbini_payments: Option<AccountCapabilityStatus>,
    pub kr_card_payments: Option<AccountCapabilityStatus>,
    pub legacy_payments: Option<AccountCapabilityStatus>,
    pub link_payments: Option<AccountCapabilityStatus>,
    pub mobilepay_payments: Option<AccountCapabilityStatus>,
    pub multibanco_payments: Option<AccountCapabilityStatus>,
    pub mx_bank_transfer_payments: Option<AccountCapabilityStatus>,
    pub naver_pay_payments: Option<AccountCapabilityStatus>,
    pub oxxo_payments: Option<AccountCapabilityStatus>,
    pub p24_payments: Option<AccountCapabilityStatus>,
    pub pay_by_bank_payments: Option<AccountCapabilityStatus>,
    pub payco_payments: Option<AccountCapabilityStatus>,
    pub paynow_payments: Option<AccountCapabilityStatus>,
    pub promptpay_payments: Option<AccountCapabilityStatus>,
    pub revolut_pay_payments: Option<AccountCapabilityStatus>,
    pub samsung_pay_payments: Option<AccountCapabilityStatus>,
    pub sepa_bank_transfer_payments: Option<AccountCapabilityStatus>,
    pub sepa_debit_payments: Option<AccountCapabilityStatus>,
    pub sofort_payments: Option<AccountCapabilityStatus>,
    pub swish_payments: Option<AccountCapabilityStatus>,
    pub tax_reporting_us_1099_k: Option<AccountCapabilityStatus>,
    pub tax_reporting_us_1099_misc: Option<AccountCapabilityStatus>,
    pub transfers: Option<AccountCapabilityStatus>,
    pub treasury: Option<AccountCapabilityStatus>,
    pub twint_payments: Option<AccountCapabilityStatus>,
    pub us_bank_account_ach_payments: Option<AccountCapabilityStatus>,
    pub us_bank_transfer_payments: Option<AccountCapabilityStatus>,
    pub zip_payments: Option<AccountCapabilityStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JapanAddress {
    pub city: Option<String>,
    pub country: Option<String>,
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub town: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountDeclaration {
    pub date: Option<i64>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountCompanyVerificationDocument {
    pub back: Option<Expandable<File>>,
    pub details: Option<String>,
    pub details_code: Option<VerificationDocumentDetailsCode>,
    pub front: Option<Expandable<File>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountCompanyVerification {
    pub document: Option<AccountCompanyVerificationDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountCompany {
    pub address: Option<Address>,
    pub address_kana: Option<JapanAddress>,
    pub address_kanji: Option<JapanAddress>,
    pub directorship_declaration: Option<AccountDeclaration>,
    pub directors_provided: Option<bool>,
    pub executives_provided: Option<bool>,
    pub export_license_id: Option<String>,
    pub export_purpose_code: Option<String>,
    pub name: Option<String>,
    pub name_kana: Option<String>,
    pub name_kanji: Option<String>,
    pub ownership_declaration: Option<AccountDeclaration>,
    pub ownership_exemption_reason: Option<CompanyOwnershipExemptionReason>,
    pub owners_provided: Option<bool>,
    pub phone: Option<String>,
    pub structure: Option<CompanyStructure>,
    pub tax_id_provided: Option<bool>,
    pub tax_id_registrar: Option<String>,
    pub vat_id_provided: Option<bool>,
    pub verification: Option<AccountCompanyVerification>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountControllerFees {
    pub payer: Option<ControllerFeesPayer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountControllerLosses {
    pub payments: Option<ControllerLossesPayments>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountControllerStripeDashboard {
    #[serde(rename = "type")]
    pub type_: Option<ControllerStripeDashboardType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountController {
    pub fees: Option<AccountControllerFees>,
    pub is_controller: Option<bool>,
    pub losses: Option<AccountControllerLosses>,
    pub requirement_collection: Option<ControllerRequirementCollection>,
    pub stripe_dashboard: Option<AccountControllerStripeDashboard>,
    #[serde(rename = "type")]
    pub type_: Option<ControllerType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountRequirementsAlternative {
    pub alternative_fields_due: Option<Vec<String>>,
    pub original_fields_due: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountRequirementsError {
    pub code: Option<String>,
    pub reason: Option<String>,
    pub requirement: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountRequirements {
    pub alternatives: Option<Vec<AccountRequirementsAlternative>>,
    pub current_deadline: Option<i64>,
    pub currently_due: Option<Vec<String>>,
    pub disabled_reason: Option<RequirementsDisabledReason>,
    pub errors: Option<Vec<AccountRequirementsError>>,
    pub eventually_due: Option<Vec<String>>,
    pub past_due: Option<Vec<String>>,
    pub pending_verification: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountGroups {
    pub payments_pricing: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettingsBacsDebitPayments {
    pub display_name: Option<String>,
    pub service_user_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettingsBranding {
    pub icon: Option<Expandable<File>>,
    pub logo: Option<Expandable<File>>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettingsCardIssuing {
    pub tos_acceptance: Option<AccountDeclaration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettingsCardPaymentsDeclineOn {
    pub avs_failure: Option<bool>,
    pub cvc_failure: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettingsCardPayments {
    pub decline_on: Option<AccountSettingsCardPaymentsDeclineOn>,
    pub statement_descriptor_prefix: Option<String>,
    pub statement_descriptor_prefix_kana: Option<String>,
    pub statement_descriptor_prefix_kanji: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettingsDashboard {
    pub display_name: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettingsInvoices {
    pub default_account_tax_ids: Option<Vec<Expandable<TaxId>>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettingsPayments {
    pub statement_descriptor: Option<String>,
    pub statement_descriptor_kana: Option<String>,
    pub statement_descriptor_kanji: Option<String>,
    pub statement_descriptor_prefix_kana: Option<String>,
    pub statement_descriptor_prefix_kanji: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettingsPayoutsSchedule {
    pub delay_days: Option<i64>,
    pub interval: Option<PayoutScheduleInterval>,
    pub monthly_anchor: Option<i64>,
    pub weekly_anchor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettingsPayouts {
    pub debit_negative_balances: Option<bool>,
    pub schedule: Option<AccountSettingsPayoutsSchedule>,
    pub statement_descriptor: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettingsSepaDebitPayments {
    pub creditor_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettingsTreasury {
    pub tos_acceptance: Option<AccountDeclaration>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSettings {
    pub bacs_debit_payments: Option<AccountSettingsBacsDebitPayments>,
    pub branding: Option<AccountSettingsBranding>,
    pub card_issuing: Option<AccountSettingsCardIssuing>,
    pub card_payments: Option<AccountSettingsCardPayments>,
    pub dashboard: Option<AccountSettingsDashboard>,
    pub invoices: Option<AccountSettingsInvoices>,
    pub payments: Option<AccountSettingsPayments>,
    pub payouts: Option<AccountSettingsPayouts>,
    pub sepa_debit_payments: Option<AccountSettingsSepaDebitPayments>,
    pub treasury: Option<AccountSettingsTreasury>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountTosAcceptance {
    pub date: Option<i64>,
    pub ip: Option<String>,
    pub service_agreement: Option<TosServiceAgreement>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub business_profile: Option<AccountBusinessProfile>,
    pub business_type: Option<AccountBusinessType>,
    pub capabilities: Option<AccountCapabilities>,
    pub charges_enabled: Option<bool>,
    pub company: Option<AccountCompany>,
    pub controller: Option<AccountController>,
    pub country: Option<String>,
    pub created: Option<i64>,
    pub default_currency: Option<String>,
    pub deleted: Option<bool>,
    pub details_submitted: Option<bool>,
    pub email: Option<String>,
    pub external_accounts: Option<List<ExternalAccount>>,
    pub future_requirements: Option<AccountRequirements>,
    pub groups: Option<AccountGroups>,
    #[serde(default)]
    pub id: String,
    pub individual: Option<Person>,
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub object: String,
    pub payouts_enabled: Option<bool>,
    pub requirements: Option<AccountRequirements>,
    pub settings: Option<AccountSettings>,
    pub tos_acceptance: Option<AccountTosAcceptance>,
    #[serde(rename = "type")]
    pub type_: Option<AccountType>,
}
