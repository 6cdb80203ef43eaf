//! Enumerations used by accounts

use crate::enums::string_enum;

string_enum! {
    /// The business type of an account
    pub enum AccountBusinessType {
        Company => "company",
        GovernmentEntity => "government_entity",
        Individual => "individual",
        NonProfit => "non_profit",
    }
}

string_enum! {
    /// Status of a single capability on an account
    pub enum AccountCapabilityStatus {
        Active => "active",
        Inactive => "inactive",
        Pending => "pending",
    }
}

string_enum! {
    /// Why a company is exempt from providing ownership information
    pub enum CompanyOwnershipExemptionReason {
        QualifiedEntityExceedsOwnershipThreshold => "qualified_entity_exceeds_ownership_threshold",
        QualifiesAsFinancialInstitution => "qualifies_as_financial_institution",
    }
}

string_enum! {
    /// Legal structure of a company
    pub enum CompanyStructure {
        FreeZoneEstablishment => "free_zone_establishment",
        FreeZoneLlc => "free_zone_llc",
        GovernmentInstrumentality => "government_instrumentality",
        GovernmentalUnit => "governmental_unit",
        IncorporatedNonProfit => "incorporated_non_profit",
        IncorporatedPartnership => "incorporated_partnership",
        LimitedLiabilityPartnership => "limited_liability_partnership",
        Llc => "llc",
        MultiMemberLlc => "multi_member_llc",
        PrivateCompany => "private_company",
        PrivateCorporation => "private_corporation",
        PrivatePartnership => "private_partnership",
        PublicCompany => "public_company",
        PublicCorporation => "public_corporation",
        PublicPartnership => "public_partnership",
        RegisteredCharity => "registered_charity",
        SingleMemberLlc => "single_member_llc",
        SoleEstablishment => "sole_establishment",
        SoleProprietorship => "sole_proprietorship",
        TaxExemptGovernmentInstrumentality => "tax_exempt_government_instrumentality",
        UnincorporatedAssociation => "unincorporated_association",
        UnincorporatedNonProfit => "unincorporated_non_profit",
        UnincorporatedPartnership => "unincorporated_partnership",
    }
}

string_enum! {
    /// Machine-readable reason a verification document was rejected
    pub enum VerificationDocumentDetailsCode {
        DocumentCorrupt => "document_corrupt",
        DocumentExpired => "document_expired",
        DocumentFailedCopy => "document_failed_copy",
        DocumentFailedOther => "document_failed_other",
        DocumentFailedTestMode => "document_failed_test_mode",
        DocumentFailedGreyscale => "document_failed_greyscale",
        DocumentFraudulent => "document_fraudulent",
        DocumentInvalid => "document_invalid",
        DocumentIncomplete => "document_incomplete",
        DocumentManipulated => "document_manipulated",
        DocumentNotReadable => "document_not_readable",
        DocumentNotUploaded => "document_not_uploaded",
        DocumentTooLarge => "document_too_large",
        DocumentTypeNotSupported => "document_type_not_supported",
    }
}

string_enum! {
    /// Which party pays fees for the account
    pub enum ControllerFeesPayer {
        Account => "account",
        Application => "application",
        ApplicationCustom => "application_custom",
        ApplicationExpress => "application_express",
    }
}

string_enum! {
    /// Which party is liable for negative balances
    pub enum ControllerLossesPayments {
        Application => "application",
        Stripe => "stripe",
    }
}

string_enum! {
    /// Which party collects requirements
    pub enum ControllerRequirementCollection {
        Application => "application",
        Stripe => "stripe",
    }
}

string_enum! {
    /// Dashboard the account has access to
    pub enum ControllerStripeDashboardType {
        Express => "express",
        Full => "full",
        None => "none",
    }
}

string_enum! {
    /// Whether the account is controlled by itself or a platform application
    pub enum ControllerType {
        Account => "account",
        Application => "application",
    }
}

string_enum! {
    /// Why an account's charges or payouts are disabled
    pub enum RequirementsDisabledReason {
        ActionRequiredRequestedCapabilities => "action_required.requested_capabilities",
        Listed => "listed",
        Other => "other",
        PlatformPaused => "platform_paused",
        RejectedFraud => "rejected.fraud",
        RejectedIncompleteVerification => "rejected.incomplete_verification",
        RejectedListed => "rejected.listed",
        RejectedOther => "rejected.other",
        RejectedPlatformFraud => "rejected.platform_fraud",
        RejectedPlatformOther => "rejected.platform_other",
        RejectedPlatformTermsOfService => "rejected.platform_terms_of_service",
        RejectedTermsOfService => "rejected.terms_of_service",
        RequirementsPastDue => "requirements.past_due",
        RequirementsPendingVerification => "requirements.pending_verification",
        UnderReview => "under_review",
    }
}

string_enum! {
    /// How frequently funds are paid out
    pub enum PayoutScheduleInterval {
        Daily => "daily",
        Manual => "manual",
        Monthly => "monthly",
        Weekly => "weekly",
    }
}

string_enum! {
    /// Service agreement the account accepted
    pub enum TosServiceAgreement {
        Full => "full",
        Recipient => "recipient",
    }
}

string_enum! {
    /// The legacy account type
    pub enum AccountType {
        Custom => "custom",
        Express => "express",
        None => "none",
        Standard => "standard",
    }
}
