//! Enumerations used by persons

use crate::enums::string_enum;

string_enum! {
    /// Whether the person is a politically exposed person
    pub enum PoliticalExposure {
        Existing => "existing",
        None => "none",
    }
}

string_enum! {
    /// Identity verification state of a person
    pub enum PersonVerificationStatus {
        Pending => "pending",
        Unverified => "unverified",
        Verified => "verified",
    }
}

string_enum! {
    /// Why identity verification of a person failed
    pub enum PersonVerificationDetailsCode {
        FailedKeyedIdentity => "failed_keyed_identity",
        FailedOther => "failed_other",
        ScanNameMismatch => "scan_name_mismatch",
        DocumentAddressMismatch => "document_address_mismatch",
        DocumentDobMismatch => "document_dob_mismatch",
        DocumentDuplicateType => "document_duplicate_type",
        DocumentIdNumberMismatch => "document_id_number_mismatch",
        DocumentNameMismatch => "document_name_mismatch",
        DocumentNationalityMismatch => "document_nationality_mismatch",
    }
}

string_enum! {
    /// Why a person's identity document was rejected
    pub enum PersonDocumentDetailsCode {
        DocumentCorrupt => "document_corrupt",
        DocumentCountryNotSupported => "document_country_not_supported",
        DocumentExpired => "document_expired",
        DocumentFailedCopy => "document_failed_copy",
        DocumentFailedOther => "document_failed_other",
        DocumentFailedTestMode => "document_failed_test_mode",
        DocumentFraudulent => "document_fraudulent",
        DocumentIdTypeNotSupported => "document_id_type_not_supported",
        DocumentIdCountryNotSupported => "document_id_country_not_supported",
        DocumentFailedGreyscale => "document_failed_greyscale",
        DocumentIncomplete => "document_incomplete",
        DocumentInvalid => "document_invalid",
        DocumentManipulated => "document_manipulated",
        DocumentMissingBack => "document_missing_back",
        DocumentMissingFront => "document_missing_front",
        DocumentNotReadable => "document_not_readable",
        DocumentNotUploaded => "document_not_uploaded",
        DocumentPhotoMismatch => "document_photo_mismatch",
        DocumentTooLarge => "document_too_large",
        DocumentTypeNotSupported => "document_type_not_supported",
    }
}
