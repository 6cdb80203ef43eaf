//! Enum wire values checked against the vendor snapshot

use pretty_assertions::assert_eq;
use serde_json::Value;
use std::collections::BTreeMap;
use stripe_kit::{error, resources};

const SNAPSHOT: &str = include_str!("fixtures/enum_values.json");

macro_rules! variants {
    ($($name:ident => $($path:ident)::+,)+) => {
        BTreeMap::from([
            $((stringify!($name), stripe_kit::$($path)::+::VARIANTS),)+
        ])
    };
}

fn snapshot() -> BTreeMap<String, Vec<String>> {
    serde_json::from_str(SNAPSHOT).unwrap()
}

fn crate_enums() -> BTreeMap<&'static str, &'static [&'static str]> {
    variants! {
        AccountBusinessType => resources::account::AccountBusinessType,
        AccountCapabilityStatus => resources::account::AccountCapabilityStatus,
        CompanyOwnershipExemptionReason => resources::account::CompanyOwnershipExemptionReason,
        CompanyStructure => resources::account::CompanyStructure,
        VerificationDocumentDetailsCode => resources::account::VerificationDocumentDetailsCode,
        ControllerFeesPayer => resources::account::ControllerFeesPayer,
        ControllerLossesPayments => resources::account::ControllerLossesPayments,
        ControllerRequirementCollection => resources::account::ControllerRequirementCollection,
        ControllerStripeDashboardType => resources::account::ControllerStripeDashboardType,
        ControllerType => resources::account::ControllerType,
        RequirementsDisabledReason => resources::account::RequirementsDisabledReason,
        PayoutScheduleInterval => resources::account::PayoutScheduleInterval,
        TosServiceAgreement => resources::account::TosServiceAgreement,
        AccountType => resources::account::AccountType,
        ExternalAccountType => resources::external_account::ExternalAccountType,
        BankAccountHolderType => resources::external_account::BankAccountHolderType,
        AvailablePayoutMethod => resources::external_account::AvailablePayoutMethod,
        BankAccountStatus => resources::external_account::BankAccountStatus,
        BankAccountRequirementsErrorCode => resources::external_account::BankAccountRequirementsErrorCode,
        CardCheck => resources::external_account::CardCheck,
        AllowRedisplay => resources::external_account::AllowRedisplay,
        CardBrand => resources::external_account::CardBrand,
        CardFunding => resources::external_account::CardFunding,
        CardRegulatedStatus => resources::external_account::CardRegulatedStatus,
        CardTokenizationMethod => resources::external_account::CardTokenizationMethod,
        PoliticalExposure => resources::person::PoliticalExposure,
        PersonVerificationStatus => resources::person::PersonVerificationStatus,
        PersonVerificationDetailsCode => resources::person::PersonVerificationDetailsCode,
        PersonDocumentDetailsCode => resources::person::PersonDocumentDetailsCode,
        TaxIdOwnerType => resources::tax_id::TaxIdOwnerType,
        TaxIdType => resources::tax_id::TaxIdType,
        TaxIdVerificationStatus => resources::tax_id::TaxIdVerificationStatus,
        AccountHolderType => resources::financial_connections::AccountHolderType,
        BalanceType => resources::financial_connections::BalanceType,
        RefreshStatus => resources::financial_connections::RefreshStatus,
        AccountCategory => resources::financial_connections::AccountCategory,
        Permission => resources::financial_connections::Permission,
        AccountStatus => resources::financial_connections::AccountStatus,
        AccountSubcategory => resources::financial_connections::AccountSubcategory,
        Subscription => resources::financial_connections::Subscription,
        SupportedPaymentMethodType => resources::financial_connections::SupportedPaymentMethodType,
        CardPresentOfflineType => resources::confirmation_token::CardPresentOfflineType,
        CardReadMethod => resources::confirmation_token::CardReadMethod,
        ReceiptAccountType => resources::confirmation_token::ReceiptAccountType,
        CardPresentWalletType => resources::confirmation_token::CardPresentWalletType,
        CardWalletType => resources::confirmation_token::CardWalletType,
        EpsBank => resources::confirmation_token::EpsBank,
        FpxAccountHolderType => resources::confirmation_token::FpxAccountHolderType,
        FpxBank => resources::confirmation_token::FpxBank,
        IdealBank => resources::confirmation_token::IdealBank,
        IdealBic => resources::confirmation_token::IdealBic,
        KrCardBrand => resources::confirmation_token::KrCardBrand,
        NaverPayFunding => resources::confirmation_token::NaverPayFunding,
        P24Bank => resources::confirmation_token::P24Bank,
        PaymentMethodType => resources::confirmation_token::PaymentMethodType,
        UsBankAccountHolderType => resources::confirmation_token::UsBankAccountHolderType,
        UsBankAccountType => resources::confirmation_token::UsBankAccountType,
        UsBankAccountNetwork => resources::confirmation_token::UsBankAccountNetwork,
        BlockedNetworkCode => resources::confirmation_token::BlockedNetworkCode,
        BlockedReason => resources::confirmation_token::BlockedReason,
        SetupFutureUsage => resources::confirmation_token::SetupFutureUsage,
        ErrorType => error::ErrorType,
    }
}

#[test]
fn test_every_snapshot_enum_matches() {
    let enums = crate_enums();
    for (name, expected) in snapshot() {
        let actual = enums
            .get(name.as_str())
            .unwrap_or_else(|| panic!("{name} missing from the crate"));
        assert_eq!(actual.to_vec(), expected, "{name}");
    }
}

#[test]
fn test_no_enum_outside_snapshot() {
    let snapshot = snapshot();
    for name in crate_enums().keys() {
        assert!(snapshot.contains_key(*name), "{name} not in snapshot");
    }
}

#[test]
fn test_values_round_trip_through_serde() {
    let value: resources::tax_id::TaxIdOwnerType =
        serde_json::from_value(Value::String("self".into())).unwrap();
    assert!(value.is_known());
    assert_eq!(serde_json::to_value(&value).unwrap(), Value::String("self".into()));

    let unknown: error::ErrorType =
        serde_json::from_value(Value::String("brand_new_error".into())).unwrap();
    assert!(!unknown.is_known());
    assert_eq!(unknown.as_str(), "brand_new_error");
}
