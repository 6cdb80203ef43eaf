//! Request parameters for confirmation tokens

use super::enums::{PaymentMethodType, SetupFutureUsage};
use crate::params::Extra;
use crate::resources::external_account::AllowRedisplay;
use crate::resources::person::DateOfBirthParams;
use crate::types::{AddressParams, Metadata};
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfirmationTokenParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataAcssDebitParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_number: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataAuBecsDebitParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bsb_number: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataBacsDebitParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataBillingDetailsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataBoletoParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataEpsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataFpxParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataIdealParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataKlarnaParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<DateOfBirthParams>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataNaverPayParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funding: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataP24Params {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataRadarOptionsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataSepaDebitParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataSofortParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataUsBankAccountParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financial_connections_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acss_debit: Option<PaymentMethodDataAcssDebitParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affirm: Option<PaymentMethodDataAffirmParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub afterpay_clearpay: Option<PaymentMethodDataAfterpayClearpayParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alipay: Option<PaymentMethodDataAlipayParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_redisplay: Option<AllowRedisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alma: Option<PaymentMethodDataAlmaParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_pay: Option<PaymentMethodDataAmazonPayParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub au_becs_debit: Option<PaymentMethodDataAuBecsDebitParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bacs_debit: Option<PaymentMethodDataBacsDebitParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bancontact: Option<PaymentMethodDataBancontactParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_details: Option<PaymentMethodDataBillingDetailsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blik: Option<PaymentMethodDataBlikParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boleto: Option<PaymentMethodDataBoletoParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cashapp: Option<PaymentMethodDataCashAppParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_balance: Option<PaymentMethodDataCustomerBalanceParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eps: Option<PaymentMethodDataEpsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fpx: Option<PaymentMethodDataFpxParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub giropay: Option<PaymentMethodDataGiropayParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grabpay: Option<PaymentMethodDataGrabpayParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ideal: Option<PaymentMethodDataIdealParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interac_present: Option<PaymentMethodDataInteracPresentParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kakao_pay: Option<PaymentMethodDataKakaoPayParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub klarna: Option<PaymentMethodDataKlarnaParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub konbini: Option<PaymentMethodDataKonbiniParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kr_card: Option<PaymentMethodDataKrCardParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<PaymentMethodDataLinkParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobilepay: Option<PaymentMethodDataMobilepayParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multibanco: Option<PaymentMethodDataMultibancoParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub naver_pay: Option<PaymentMethodDataNaverPayParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oxxo: Option<PaymentMethodDataOxxoParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p24: Option<PaymentMethodDataP24Params>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_by_bank: Option<PaymentMethodDataPayByBankParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payco: Option<PaymentMethodDataPaycoParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paynow: Option<PaymentMethodDataPayNowParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paypal: Option<PaymentMethodDataPaypalParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pix: Option<PaymentMethodDataPixParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promptpay: Option<PaymentMethodDataPromptPayParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radar_options: Option<PaymentMethodDataRadarOptionsParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revolut_pay: Option<PaymentMethodDataRevolutPayParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samsung_pay: Option<PaymentMethodDataSamsungPayParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sepa_debit: Option<PaymentMethodDataSepaDebitParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sofort: Option<PaymentMethodDataSofortParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swish: Option<PaymentMethodDataSwishParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twint: Option<PaymentMethodDataTwintParams>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<PaymentMethodType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub us_bank_account: Option<PaymentMethodDataUsBankAccountParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wechat_pay: Option<PaymentMethodDataWeChatPayParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<PaymentMethodDataZipParams>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfirmationTokenShippingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<AddressParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TestHelpersConfirmationTokenParams {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_data: Option<PaymentMethodDataParams>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_future_usage: Option<SetupFutureUsage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ConfirmationTokenShippingParams>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataAffirmParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataAfterpayClearpayParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataAlipayParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataAlmaParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataAmazonPayParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataBancontactParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataBlikParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataCashAppParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataCustomerBalanceParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataGiropayParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataGrabpayParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataInteracPresentParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataKakaoPayParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataKonbiniParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataKrCardParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataLinkParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataMobilepayParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataMultibancoParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataOxxoParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataPayByBankParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataPaycoParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataPayNowParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataPaypalParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataPixParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataPromptPayParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataRevolutPayParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataSamsungPayParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataSwishParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataTwintParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataWeChatPayParams {}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PaymentMethodDataZipParams {}
