//! Request parameters for accounts

use super::enums::{AccountBusinessType, AccountType, PayoutScheduleInterval};
use crate::params::{Extra, ListParams, RangeQuery};
use crate::resources::external_account::ExternalAccountParams;
use crate::resources::person::PersonParams;
use crate::types::{AddressParams, Metadata};
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_profile: Option<AccountBusinessProfileParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_type: Option<AccountBusinessType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<AccountCapabilitiesParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<AccountCompanyParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller: Option<AccountControllerParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documents: Option<AccountDocumentsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_account: Option<ExternalAccountParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<AccountGroupsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub individual: Option<PersonParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<AccountSettingsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tos_acceptance: Option<AccountTosAcceptanceParams>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<AccountType>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountBusinessProfileAnnualRevenueParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_year_end: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountBusinessProfileMonthlyEstimatedRevenueParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountBusinessProfileParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_revenue: Option<AccountBusinessProfileAnnualRevenueParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_worker_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_estimated_revenue: Option<AccountBusinessProfileMonthlyEstimatedRevenueParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_address: Option<AddressParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CapabilityParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountCapabilitiesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acss_debit_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affirm_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afterpay_clearpay_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alma_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_pay_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub au_becs_debit_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bacs_debit_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bancontact_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_transfer_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blik_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boleto_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_issuing: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cartes_bancaires_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cashapp_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eps_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fpx_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gb_bank_transfer_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub giropay_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grabpay_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ideal_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub india_international_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jcb_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jp_bank_transfer_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kakao_pay_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub klarna_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub konbini_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kr_card_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legacy_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobilepay_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multibanco_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mx_bank_transfer_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub naver_pay_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oxxo_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p24_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_by_bank_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payco_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paynow_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promptpay_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revolut_pay_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samsung_pay_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sepa_bank_transfer_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sepa_debit_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sofort_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swish_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_reporting_us_1099_k: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_reporting_us_1099_misc: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfers: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treasury: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twint_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub us_bank_account_ach_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub us_bank_transfer_payments: Option<CapabilityParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_payments: Option<CapabilityParams>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct JapanAddressParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountDeclarationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct VerificationDocumentParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub front: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountCompanyVerificationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<VerificationDocumentParams>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountCompanyParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_kana: Option<JapanAddressParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_kanji: Option<JapanAddressParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directorship_declaration: Option<AccountDeclarationParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directors_provided: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executives_provided: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_license_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_purpose_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_kana: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_kanji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership_declaration: Option<AccountDeclarationParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership_declaration_shown_and_signed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ownership_exemption_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owners_provided: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id_registrar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<AccountCompanyVerificationParams>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentFilesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountDocumentsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_ownership_verification: Option<DocumentFilesParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_license: Option<DocumentFilesParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_memorandum_of_association: Option<DocumentFilesParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_ministerial_decree: Option<DocumentFilesParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_registration_verification: Option<DocumentFilesParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_tax_id_verification: Option<DocumentFilesParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_of_registration: Option<DocumentFilesParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_of_ultimate_beneficial_ownership: Option<DocumentFilesParams>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountGroupsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments_pricing: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountSettingsBacsDebitPaymentsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountSettingsBrandingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountSettingsCardIssuingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tos_acceptance: Option<AccountDeclarationParams>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountSettingsCardPaymentsDeclineOnParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avs_failure: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cvc_failure: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountSettingsCardPaymentsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decline_on: Option<AccountSettingsCardPaymentsDeclineOnParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor_prefix_kana: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor_prefix_kanji: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountSettingsInvoicesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_account_tax_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountSettingsPaymentsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor_kana: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor_kanji: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountSettingsPayoutsScheduleParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_days: Option<DelayDays>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<PayoutScheduleInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_anchor: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekly_anchor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountSettingsPayoutsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit_negative_balances: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<AccountSettingsPayoutsScheduleParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountSettingsTreasuryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tos_acceptance: Option<AccountDeclarationParams>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountSettingsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bacs_debit_payments: Option<AccountSettingsBacsDebitPaymentsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<AccountSettingsBrandingParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_issuing: Option<AccountSettingsCardIssuingParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_payments: Option<AccountSettingsCardPaymentsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoices: Option<AccountSettingsInvoicesParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<AccountSettingsPaymentsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payouts: Option<AccountSettingsPayoutsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treasury: Option<AccountSettingsTreasuryParams>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountTosAcceptanceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_agreement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountListParams {
    #[serde(flatten)]
    pub list: ListParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<RangeQuery>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountControllerFeesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountControllerLossesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payments: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountControllerStripeDashboardParams {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountControllerParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<AccountControllerFeesParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub losses: Option<AccountControllerLossesParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirement_collection: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_dashboard: Option<AccountControllerStripeDashboardParams>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AccountRejectParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

// ============================================================================
// Payout Delay
// ============================================================================

/// How long payouts are held: a fixed number of days, or the lowest delay
/// the account is eligible for
///
/// Encodes as `delay_days=7` or `delay_days=minimum`, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayDays {
    Days(u32),
    Minimum,
}

impl DelayDays {
    /// A fixed delay in days
    pub fn days(days: u32) -> Self {
        DelayDays::Days(days)
    }

    /// The lowest delay the account allows
    pub fn minimum() -> Self {
        DelayDays::Minimum
    }
}

impl Serialize for DelayDays {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DelayDays::Days(days) => serializer.serialize_u32(*days),
            DelayDays::Minimum => serializer.serialize_str("minimum"),
        }
    }
}
