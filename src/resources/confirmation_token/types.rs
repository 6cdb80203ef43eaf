//! Confirmation token response types

use super::enums::{
    BlockedNetworkCode, BlockedReason, CardPresentOfflineType, CardPresentWalletType,
    CardReadMethod, CardWalletType, EpsBank, FpxAccountHolderType, FpxBank, IdealBank, IdealBic,
    KrCardBrand, NaverPayFunding, P24Bank, PaymentMethodType, ReceiptAccountType, SetupFutureUsage,
    UsBankAccountHolderType, UsBankAccountNetwork, UsBankAccountType,
};
use crate::expand::Expandable;
use crate::resources::external_account::{AllowRedisplay, CardRegulatedStatus};
use crate::resources::person::DateOfBirth;
use crate::resources::refs::{Charge, Customer, SetupAttempt};
use crate::types::Address;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationTokenMandateDataCustomerAcceptanceOnline {
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationTokenMandateDataCustomerAcceptance {
    pub online: Option<ConfirmationTokenMandateDataCustomerAcceptanceOnline>,
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationTokenMandateData {
    pub customer_acceptance: Option<ConfirmationTokenMandateDataCustomerAcceptance>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationTokenPaymentMethodOptionsCard {
    pub cvc_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationTokenPaymentMethodOptions {
    pub card: Option<ConfirmationTokenPaymentMethodOptionsCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewAcssDebit {
    pub bank_name: Option<String>,
    pub fingerprint: Option<String>,
    pub institution_number: Option<String>,
    pub last4: Option<String>,
    pub transit_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewAuBecsDebit {
    pub bsb_number: Option<String>,
    pub fingerprint: Option<String>,
    pub last4: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewBacsDebit {
    pub fingerprint: Option<String>,
    pub last4: Option<String>,
    pub sort_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewBillingDetails {
    pub address: Option<Address>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewBoleto {
    pub tax_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewCardChecks {
    pub address_line1_check: Option<String>,
    pub address_postal_code_check: Option<String>,
    pub cvc_check: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewCardNetworks {
    pub available: Option<Vec<String>>,
    pub preferred: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewCardThreeDSecureUsage {
    pub supported: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewWalletIdentity {
    pub billing_address: Option<Address>,
    pub email: Option<String>,
    pub name: Option<String>,
    pub shipping_address: Option<Address>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewCardWallet {
    pub amex_express_checkout: Option<PaymentMethodPreviewCardWalletAmexExpressCheckout>,
    pub apple_pay: Option<PaymentMethodPreviewCardWalletApplePay>,
    pub dynamic_last4: Option<String>,
    pub google_pay: Option<PaymentMethodPreviewCardWalletGooglePay>,
    pub link: Option<PaymentMethodPreviewCardWalletLink>,
    pub masterpass: Option<PaymentMethodPreviewWalletIdentity>,
    pub samsung_pay: Option<PaymentMethodPreviewCardWalletSamsungPay>,
    #[serde(rename = "type")]
    pub type_: Option<CardWalletType>,
    pub visa_checkout: Option<PaymentMethodPreviewWalletIdentity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewCard {
    pub brand: Option<String>,
    pub checks: Option<PaymentMethodPreviewCardChecks>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub display_brand: Option<String>,
    pub exp_month: Option<i64>,
    pub exp_year: Option<i64>,
    pub fingerprint: Option<String>,
    pub funding: Option<String>,
    pub generated_from: Option<PaymentMethodPreviewCardGeneratedFrom>,
    pub iin: Option<String>,
    pub issuer: Option<String>,
    pub last4: Option<String>,
    pub networks: Option<PaymentMethodPreviewCardNetworks>,
    pub regulated_status: Option<CardRegulatedStatus>,
    pub three_d_secure_usage: Option<PaymentMethodPreviewCardThreeDSecureUsage>,
    pub wallet: Option<PaymentMethodPreviewCardWallet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewCardPresentOffline {
    pub stored_at: Option<i64>,
    #[serde(rename = "type")]
    pub type_: Option<CardPresentOfflineType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewCardPresentWallet {
    #[serde(rename = "type")]
    pub type_: Option<CardPresentWalletType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewCardPresent {
    pub brand: Option<String>,
    pub brand_product: Option<String>,
    pub cardholder_name: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub exp_month: Option<i64>,
    pub exp_year: Option<i64>,
    pub fingerprint: Option<String>,
    pub funding: Option<String>,
    pub iin: Option<String>,
    pub issuer: Option<String>,
    pub last4: Option<String>,
    pub networks: Option<PaymentMethodPreviewCardNetworks>,
    pub offline: Option<PaymentMethodPreviewCardPresentOffline>,
    pub preferred_locales: Option<Vec<String>>,
    pub read_method: Option<CardReadMethod>,
    pub wallet: Option<PaymentMethodPreviewCardPresentWallet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardPresentReceipt {
    pub account_type: Option<ReceiptAccountType>,
    pub application_cryptogram: Option<String>,
    pub application_preferred_name: Option<String>,
    pub authorization_code: Option<String>,
    pub authorization_response_code: Option<String>,
    pub cardholder_verification_method: Option<String>,
    pub dedicated_file_name: Option<String>,
    pub terminal_verification_results: Option<String>,
    pub transaction_status_information: Option<String>,
}

/// The in-person charge a `card` payment method was generated from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardGeneratedFromCardPresent {
    pub amount_authorized: Option<i64>,
    pub brand: Option<String>,
    pub brand_product: Option<String>,
    pub capture_before: Option<i64>,
    pub cardholder_name: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub emv_auth_data: Option<String>,
    pub exp_month: Option<i64>,
    pub exp_year: Option<i64>,
    pub fingerprint: Option<String>,
    pub funding: Option<String>,
    pub generated_card: Option<String>,
    pub iin: Option<String>,
    pub incremental_authorization_supported: Option<bool>,
    pub issuer: Option<String>,
    pub last4: Option<String>,
    pub network: Option<String>,
    pub network_transaction_id: Option<String>,
    pub offline: Option<PaymentMethodPreviewCardPresentOffline>,
    pub overcapture_supported: Option<bool>,
    pub preferred_locales: Option<Vec<String>>,
    pub read_method: Option<CardReadMethod>,
    pub receipt: Option<CardPresentReceipt>,
    pub wallet: Option<PaymentMethodPreviewCardPresentWallet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardGeneratedFromPaymentMethodDetails {
    pub card_present: Option<CardGeneratedFromCardPresent>,
    /// Always `card_present`
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

/// Where a `card` payment method came from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewCardGeneratedFrom {
    pub charge: Option<String>,
    pub payment_method_details: Option<CardGeneratedFromPaymentMethodDetails>,
    pub setup_attempt: Option<Expandable<SetupAttempt>>,
}

/// Where a `sepa_debit` payment method came from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewSepaDebitGeneratedFrom {
    pub charge: Option<Expandable<Charge>>,
    pub setup_attempt: Option<Expandable<SetupAttempt>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewCashApp {
    pub buyer_id: Option<String>,
    pub cashtag: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewEps {
    pub bank: Option<EpsBank>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewFpx {
    pub account_holder_type: Option<FpxAccountHolderType>,
    pub bank: Option<FpxBank>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewIdeal {
    pub bank: Option<IdealBank>,
    pub bic: Option<IdealBic>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewInteracPresent {
    pub brand: Option<String>,
    pub cardholder_name: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub exp_month: Option<i64>,
    pub exp_year: Option<i64>,
    pub fingerprint: Option<String>,
    pub funding: Option<String>,
    pub iin: Option<String>,
    pub issuer: Option<String>,
    pub last4: Option<String>,
    pub networks: Option<PaymentMethodPreviewCardNetworks>,
    pub preferred_locales: Option<Vec<String>>,
    pub read_method: Option<CardReadMethod>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewKlarna {
    pub dob: Option<DateOfBirth>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewKrCard {
    pub brand: Option<KrCardBrand>,
    pub last4: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewLink {
    pub email: Option<String>,
    pub persistent_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewNaverPay {
    pub funding: Option<NaverPayFunding>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewP24 {
    pub bank: Option<P24Bank>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewPaypal {
    pub country: Option<String>,
    pub payer_email: Option<String>,
    pub payer_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewSepaDebit {
    pub bank_code: Option<String>,
    pub branch_code: Option<String>,
    pub country: Option<String>,
    pub fingerprint: Option<String>,
    pub generated_from: Option<PaymentMethodPreviewSepaDebitGeneratedFrom>,
    pub last4: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewSofort {
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewUsBankAccountNetworks {
    pub preferred: Option<String>,
    pub supported: Option<Vec<UsBankAccountNetwork>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewUsBankAccountStatusDetailsBlocked {
    pub network_code: Option<BlockedNetworkCode>,
    pub reason: Option<BlockedReason>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewUsBankAccountStatusDetails {
    pub blocked: Option<PaymentMethodPreviewUsBankAccountStatusDetailsBlocked>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewUsBankAccount {
    pub account_holder_type: Option<UsBankAccountHolderType>,
    pub account_type: Option<UsBankAccountType>,
    pub bank_name: Option<String>,
    pub financial_connections_account: Option<String>,
    pub fingerprint: Option<String>,
    pub last4: Option<String>,
    pub networks: Option<PaymentMethodPreviewUsBankAccountNetworks>,
    pub routing_number: Option<String>,
    pub status_details: Option<PaymentMethodPreviewUsBankAccountStatusDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreview {
    pub acss_debit: Option<PaymentMethodPreviewAcssDebit>,
    pub affirm: Option<PaymentMethodPreviewAffirm>,
    pub afterpay_clearpay: Option<PaymentMethodPreviewAfterpayClearpay>,
    pub alipay: Option<PaymentMethodPreviewAlipay>,
    pub allow_redisplay: Option<AllowRedisplay>,
    pub alma: Option<PaymentMethodPreviewAlma>,
    pub amazon_pay: Option<PaymentMethodPreviewAmazonPay>,
    pub au_becs_debit: Option<PaymentMethodPreviewAuBecsDebit>,
    pub bacs_debit: Option<PaymentMethodPreviewBacsDebit>,
    pub bancontact: Option<PaymentMethodPreviewBancontact>,
    pub billing_details: Option<PaymentMethodPreviewBillingDetails>,
    pub blik: Option<PaymentMethodPreviewBlik>,
    pub boleto: Option<PaymentMethodPreviewBoleto>,
    pub card: Option<PaymentMethodPreviewCard>,
    pub card_present: Option<PaymentMethodPreviewCardPresent>,
    pub cashapp: Option<PaymentMethodPreviewCashApp>,
    pub customer: Option<Expandable<Customer>>,
    pub customer_balance: Option<PaymentMethodPreviewCustomerBalance>,
    pub eps: Option<PaymentMethodPreviewEps>,
    pub fpx: Option<PaymentMethodPreviewFpx>,
    pub giropay: Option<PaymentMethodPreviewGiropay>,
    pub grabpay: Option<PaymentMethodPreviewGrabpay>,
    pub ideal: Option<PaymentMethodPreviewIdeal>,
    pub interac_present: Option<PaymentMethodPreviewInteracPresent>,
    pub kakao_pay: Option<PaymentMethodPreviewKakaoPay>,
    pub klarna: Option<PaymentMethodPreviewKlarna>,
    pub konbini: Option<PaymentMethodPreviewKonbini>,
    pub kr_card: Option<PaymentMethodPreviewKrCard>,
    pub link: Option<PaymentMethodPreviewLink>,
    pub mobilepay: Option<PaymentMethodPreviewMobilepay>,
    pub multibanco: Option<PaymentMethodPreviewMultibanco>,
    pub naver_pay: Option<PaymentMethodPreviewNaverPay>,
    pub oxxo: Option<PaymentMethodPreviewOxxo>,
    pub p24: Option<PaymentMethodPreviewP24>,
    pub pay_by_bank: Option<PaymentMethodPreviewPayByBank>,
    pub payco: Option<PaymentMethodPreviewPayco>,
    pub paynow: Option<PaymentMethodPreviewPayNow>,
    pub paypal: Option<PaymentMethodPreviewPaypal>,
    pub pix: Option<PaymentMethodPreviewPix>,
    pub promptpay: Option<PaymentMethodPreviewPromptPay>,
    pub revolut_pay: Option<PaymentMethodPreviewRevolutPay>,
    pub samsung_pay: Option<PaymentMethodPreviewSamsungPay>,
    pub sepa_debit: Option<PaymentMethodPreviewSepaDebit>,
    pub sofort: Option<PaymentMethodPreviewSofort>,
    pub swish: Option<PaymentMethodPreviewSwish>,
    pub twint: Option<PaymentMethodPreviewTwint>,
    #[serde(rename = "type")]
    pub type_: Option<PaymentMethodType>,
    pub us_bank_account: Option<PaymentMethodPreviewUsBankAccount>,
    pub wechat_pay: Option<PaymentMethodPreviewWeChatPay>,
    pub zip: Option<PaymentMethodPreviewZip>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationTokenShipping {
    pub address: Option<Address>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfirmationToken {
    pub created: Option<i64>,
    pub expires_at: Option<i64>,
    #[serde(default)]
    pub id: String,
    pub livemode: Option<bool>,
    pub mandate_data: Option<ConfirmationTokenMandateData>,
    #[serde(default)]
    pub object: String,
    pub payment_intent: Option<String>,
    pub payment_method_options: Option<ConfirmationTokenPaymentMethodOptions>,
    pub payment_method_preview: Option<PaymentMethodPreview>,
    pub return_url: Option<String>,
    pub setup_future_usage: Option<SetupFutureUsage>,
    pub setup_intent: Option<String>,
    pub shipping: Option<ConfirmationTokenShipping>,
    pub use_stripe_sdk: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewAffirm {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewAfterpayClearpay {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewAlipay {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewAlma {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewAmazonPay {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewBancontact {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewBlik {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewCardWalletAmexExpressCheckout {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewCardWalletApplePay {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewCardWalletGooglePay {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewCardWalletLink {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewCardWalletSamsungPay {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewCustomerBalance {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewGiropay {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewGrabpay {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewKakaoPay {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewKonbini {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewMobilepay {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewMultibanco {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewOxxo {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewPayByBank {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewPayco {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewPayNow {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewPix {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewPromptPay {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewRevolutPay {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewSamsungPay {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewSwish {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewTwint {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewWeChatPay {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodPreviewZip {}
