//! Enumerations used by external accounts

use crate::enums::string_enum;

string_enum! {
    /// Discriminator of an account's external account
    pub enum ExternalAccountType {
        BankAccount => "bank_account",
        Card => "card",
    }
}

string_enum! {
    /// Type of entity that holds a bank account
    pub enum BankAccountHolderType {
        Company => "company",
        Individual => "individual",
    }
}

string_enum! {
    /// Payout speed an external account supports
    pub enum AvailablePayoutMethod {
        Instant => "instant",
        Standard => "standard",
    }
}

string_enum! {
    /// Verification status of a bank account
    pub enum BankAccountStatus {
        Errored => "errored",
        New => "new",
        Validated => "validated",
        VerificationFailed => "verification_failed",
        Verified => "verified",
    }
}

string_enum! {
    /// Code for a requirement error on a bank account
    pub enum BankAccountRequirementsErrorCode {
        InvalidAddressCityStatePostalCode => "invalid_address_city_state_postal_code",
        InvalidAddressHighwayContractBox => "invalid_address_highway_contract_box",
        InvalidAddressPrivateMailbox => "invalid_address_private_mailbox",
        InvalidBusinessProfileName => "invalid_business_profile_name",
        InvalidBusinessProfileNameDenylisted => "invalid_business_profile_name_denylisted",
        InvalidCompanyNameDenylisted => "invalid_company_name_denylisted",
        InvalidDobAgeOverMaximum => "invalid_dob_age_over_maximum",
        InvalidDobAgeUnder18 => "invalid_dob_age_under_18",
        InvalidDobAgeUnderMinimum => "invalid_dob_age_under_minimum",
        InvalidProductDescriptionLength => "invalid_product_description_length",
        InvalidProductDescriptionUrlMatch => "invalid_product_description_url_match",
        InvalidRepresentativeCountry => "invalid_representative_country",
        InvalidStatementDescriptorBusinessMismatch => "invalid_statement_descriptor_business_mismatch",
        InvalidStatementDescriptorDenylisted => "invalid_statement_descriptor_denylisted",
        InvalidStatementDescriptorLength => "invalid_statement_descriptor_length",
        InvalidStatementDescriptorPrefixDenylisted => "invalid_statement_descriptor_prefix_denylisted",
        InvalidStatementDescriptorPrefixMismatch => "invalid_statement_descriptor_prefix_mismatch",
        InvalidStreetAddress => "invalid_street_address",
        InvalidTaxId => "invalid_tax_id",
        InvalidTaxIdFormat => "invalid_tax_id_format",
        InvalidTosAcceptance => "invalid_tos_acceptance",
        InvalidUrlDenylisted => "invalid_url_denylisted",
        InvalidUrlFormat => "invalid_url_format",
        InvalidUrlLength => "invalid_url_length",
        InvalidUrlWebPresenceDetected => "invalid_url_web_presence_detected",
        InvalidUrlWebsiteBusinessInformationMismatch => "invalid_url_website_business_information_mismatch",
        InvalidUrlWebsiteEmpty => "invalid_url_website_empty",
        InvalidUrlWebsiteInaccessible => "invalid_url_website_inaccessible",
        InvalidUrlWebsiteInaccessibleGeoblocked => "invalid_url_website_inaccessible_geoblocked",
        InvalidUrlWebsiteInaccessiblePasswordProtected => "invalid_url_website_inaccessible_password_protected",
        InvalidUrlWebsiteIncomplete => "invalid_url_website_incomplete",
        InvalidUrlWebsiteIncompleteCancellationPolicy => "invalid_url_website_incomplete_cancellation_policy",
        InvalidUrlWebsiteIncompleteCustomerServiceDetails => "invalid_url_website_incomplete_customer_service_details",
        InvalidUrlWebsiteIncompleteLegalRestrictions => "invalid_url_website_incomplete_legal_restrictions",
        InvalidUrlWebsiteIncompleteRefundPolicy => "invalid_url_website_incomplete_refund_policy",
        InvalidUrlWebsiteIncompleteReturnPolicy => "invalid_url_website_incomplete_return_policy",
        InvalidUrlWebsiteIncompleteTermsAndConditions => "invalid_url_website_incomplete_terms_and_conditions",
        InvalidUrlWebsiteIncompleteUnderConstruction => "invalid_url_website_incomplete_under_construction",
        InvalidUrlWebsiteOther => "invalid_url_website_other",
        InvalidValueOther => "invalid_value_other",
        VerificationDirectorsMismatch => "verification_directors_mismatch",
        VerificationDocumentAddressMismatch => "verification_document_address_mismatch",
        VerificationDocumentAddressMissing => "verification_document_address_missing",
        VerificationDocumentCorrupt => "verification_document_corrupt",
        VerificationDocumentCountryNotSupported => "verification_document_country_not_supported",
        VerificationDocumentDirectorsMismatch => "verification_document_directors_mismatch",
        VerificationDocumentDobMismatch => "verification_document_dob_mismatch",
        VerificationDocumentDuplicateType => "verification_document_duplicate_type",
        VerificationDocumentExpired => "verification_document_expired",
        VerificationDocumentFailedCopy => "verification_document_failed_copy",
        VerificationDocumentFailedGreyscale => "verification_document_failed_greyscale",
        VerificationDocumentFailedOther => "verification_document_failed_other",
        VerificationDocumentFailedTestMode => "verification_document_failed_test_mode",
        VerificationDocumentFraudulent => "verification_document_fraudulent",
        VerificationDocumentIdNumberMismatch => "verification_document_id_number_mismatch",
        VerificationDocumentIdNumberMissing => "verification_document_id_number_missing",
        VerificationDocumentIncomplete => "verification_document_incomplete",
        VerificationDocumentInvalid => "verification_document_invalid",
        VerificationDocumentIssueOrExpiryDateMissing => "verification_document_issue_or_expiry_date_missing",
        VerificationDocumentManipulated => "verification_document_manipulated",
        VerificationDocumentMissingBack => "verification_document_missing_back",
        VerificationDocumentMissingFront => "verification_document_missing_front",
        VerificationDocumentNameMismatch => "verification_document_name_mismatch",
        VerificationDocumentNameMissing => "verification_document_name_missing",
        VerificationDocumentNationalityMismatch => "verification_document_nationality_mismatch",
        VerificationDocumentNotReadable => "verification_document_not_readable",
        VerificationDocumentNotSigned => "verification_document_not_signed",
        VerificationDocumentNotUploaded => "verification_document_not_uploaded",
        VerificationDocumentPhotoMismatch => "verification_document_photo_mismatch",
        VerificationDocumentTooLarge => "verification_document_too_large",
        VerificationDocumentTypeNotSupported => "verification_document_type_not_supported",
        VerificationExtraneousDirectors => "verification_extraneous_directors",
        VerificationFailedAddressMatch => "verification_failed_address_match",
        VerificationFailedBusinessIecNumber => "verification_failed_business_iec_number",
        VerificationFailedDocumentMatch => "verification_failed_document_match",
        VerificationFailedIdNumberMatch => "verification_failed_id_number_match",
        VerificationFailedKeyedIdentity => "verification_failed_keyed_identity",
        VerificationFailedKeyedMatch => "verification_failed_keyed_match",
        VerificationFailedNameMatch => "verification_failed_name_match",
        VerificationFailedOther => "verification_failed_other",
        VerificationFailedRepresentativeAuthority => "verification_failed_representative_authority",
        VerificationFailedResidentialAddress => "verification_failed_residential_address",
        VerificationFailedTaxIdMatch => "verification_failed_tax_id_match",
        VerificationFailedTaxIdNotIssued => "verification_failed_tax_id_not_issued",
        VerificationMissingDirectors => "verification_missing_directors",
        VerificationMissingExecutives => "verification_missing_executives",
        VerificationMissingOwners => "verification_missing_owners",
        VerificationRequiresAdditionalMemorandumOfAssociations => "verification_requires_additional_memorandum_of_associations",
        VerificationRequiresAdditionalProofOfRegistration => "verification_requires_additional_proof_of_registration",
        VerificationSupportability => "verification_supportability",
    }
}

string_enum! {
    /// Result of an address, ZIP or CVC check
    pub enum CardCheck {
        Fail => "fail",
        Pass => "pass",
        Unavailable => "unavailable",
        Unchecked => "unchecked",
    }
}

string_enum! {
    /// Whether a saved payment method may be shown again to the customer
    pub enum AllowRedisplay {
        Always => "always",
        Limited => "limited",
        Unspecified => "unspecified",
    }
}

string_enum! {
    /// Card brand
    pub enum CardBrand {
        AmericanExpress => "American Express",
        Discover => "Discover",
        DinersClub => "Diners Club",
        Jcb => "JCB",
        Mastercard => "MasterCard",
        Unknown => "Unknown",
        Unionpay => "UnionPay",
        Visa => "Visa",
    }
}

string_enum! {
    /// Card funding type
    pub enum CardFunding {
        Credit => "credit",
        Debit => "debit",
        Prepaid => "prepaid",
        Unknown => "unknown",
    }
}

string_enum! {
    /// Whether the card's issuer is regulated
    pub enum CardRegulatedStatus {
        Regulated => "regulated",
        Unregulated => "unregulated",
    }
}

string_enum! {
    /// Wallet the card was tokenized with
    pub enum CardTokenizationMethod {
        AndroidPay => "android_pay",
        ApplePay => "apple_pay",
    }
}
