//! Enumerations used by Financial Connections accounts

use crate::enums::string_enum;

string_enum! {
    /// Type of the holder of a linked account
    pub enum AccountHolderType {
        Account => "account",
        Customer => "customer",
    }
}

string_enum! {
    /// Kind of balance reported for a linked account
    pub enum BalanceType {
        Cash => "cash",
        Credit => "credit",
    }
}

string_enum! {
    /// State of the most recent data refresh
    pub enum RefreshStatus {
        Failed => "failed",
        Pending => "pending",
        Succeeded => "succeeded",
    }
}

string_enum! {
    /// Category of a linked account
    pub enum AccountCategory {
        Cash => "cash",
        Credit => "credit",
        Investment => "investment",
        Other => "other",
    }
}

string_enum! {
    /// Data the account holder granted access to
    pub enum Permission {
        Balances => "balances",
        Ownership => "ownership",
        PaymentMethod => "payment_method",
        Transactions => "transactions",
    }
}

string_enum! {
    /// Connection status of a linked account
    pub enum AccountStatus {
        Active => "active",
        Disconnected => "disconnected",
        Inactive => "inactive",
    }
}

string_enum! {
    /// Subcategory of a linked account
    pub enum AccountSubcategory {
        Checking => "checking",
        CreditCard => "credit_card",
        LineOfCredit => "line_of_credit",
        Mortgage => "mortgage",
        Other => "other",
        Savings => "savings",
    }
}

string_enum! {
    /// Data feature the account is subscribed to
    pub enum Subscription {
        Transactions => "transactions",
    }
}

string_enum! {
    /// Payment method types a linked account can back
    pub enum SupportedPaymentMethodType {
        Link => "link",
        UsBankAccount => "us_bank_account",
    }
}
