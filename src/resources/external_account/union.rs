//! The `ExternalAccount` union and its polymorphic parameter

use super::enums::BankAccountHolderType;
use super::types::{BankAccount, Card};
use crate::types::{Identified, Metadata, Object};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

// ============================================================================
// Response Union
// ============================================================================

/// An account's payout destination, told apart by its `object` field
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalAccount {
    BankAccount(Box<BankAccount>),
    Card(Box<Card>),
    /// An unexpanded reference: the API sent only the id
    Id(String),
    /// A kind of external account this crate does not model
    Unrecognized { id: String, object: String },
}

impl ExternalAccount {
    /// The `object` discriminator, empty for a bare id
    pub fn object(&self) -> &str {
        match self {
            ExternalAccount::BankAccount(_) => BankAccount::OBJECT,
            ExternalAccount::Card(_) => Card::OBJECT,
            ExternalAccount::Id(_) => "",
            ExternalAccount::Unrecognized { object, .. } => object,
        }
    }

    pub fn bank_account(&self) -> Option<&BankAccount> {
        match self {
            ExternalAccount::BankAccount(account) => Some(account),
            _ => None,
        }
    }

    pub fn card(&self) -> Option<&Card> {
        match self {
            ExternalAccount::Card(card) => Some(card),
            _ => None,
        }
    }
}

impl Identified for ExternalAccount {
    fn id(&self) -> &str {
        match self {
            ExternalAccount::BankAccount(account) => &account.id,
            ExternalAccount::Card(card) => &card.id,
            ExternalAccount::Id(id) => id,
            ExternalAccount::Unrecognized { id, .. } => id,
        }
    }
}

impl From<BankAccount> for ExternalAccount {
    fn from(account: BankAccount) -> Self {
        ExternalAccount::BankAccount(Box::new(account))
    }
}

impl From<Card> for ExternalAccount {
    fn from(card: Card) -> Self {
        ExternalAccount::Card(Box::new(card))
    }
}

#[derive(Serialize)]
struct UnrecognizedRef<'a> {
    id: &'a str,
    object: &'a str,
}

impl Serialize for ExternalAccount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExternalAccount::BankAccount(account) => account.serialize(serializer),
            ExternalAccount::Card(card) => card.serialize(serializer),
            ExternalAccount::Id(id) => serializer.serialize_str(id),
            ExternalAccount::Unrecognized { id, object } => {
                UnrecognizedRef { id, object }.serialize(serializer)
            }
        }
    }
}

impl<'de> Deserialize<'de> for ExternalAccount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = match Value::deserialize(deserializer)? {
            Value::String(id) => return Ok(ExternalAccount::Id(id)),
            value @ Value::Object(_) => value,
            _ => {
                return Err(D::Error::custom(
                    "expected an external account id or object",
                ))
            }
        };

        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        let object = field("object");

        match object.as_str() {
            BankAccount::OBJECT => serde_json::from_value::<BankAccount>(value)
                .map(ExternalAccount::from)
                .map_err(D::Error::custom),
            Card::OBJECT => serde_json::from_value::<Card>(value)
                .map(ExternalAccount::from)
                .map_err(D::Error::custom),
            _ => Ok(ExternalAccount::Unrecognized {
                id: field("id"),
                object,
            }),
        }
    }
}

// ============================================================================
// Polymorphic Parameter
// ============================================================================

/// Bank account details sent inline instead of a token
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BankAccountDetailsParams {
    pub account_number: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_holder_type: Option<BankAccountHolderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_number: Option<String>,
}

/// `external_account` on create/update: a token or inline bank details
#[derive(Debug, Clone, PartialEq)]
pub enum ExternalAccountParams {
    /// A `btok_`/`tok_` token, sent as `external_account=<token>`
    Token(String),
    /// Sent as `external_account[object]=bank_account` plus the details
    BankAccount(BankAccountDetailsParams),
}

impl From<&str> for ExternalAccountParams {
    fn from(token: &str) -> Self {
        ExternalAccountParams::Token(token.to_string())
    }
}

impl From<BankAccountDetailsParams> for ExternalAccountParams {
    fn from(details: BankAccountDetailsParams) -> Self {
        ExternalAccountParams::BankAccount(details)
    }
}

#[derive(Serialize)]
struct TaggedDetails<'a> {
    object: &'static str,
    #[serde(flatten)]
    details: &'a BankAccountDetailsParams,
}

impl Serialize for ExternalAccountParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExternalAccountParams::Token(token) => serializer.serialize_str(token),
            ExternalAccountParams::BankAccount(details) => TaggedDetails {
                object: BankAccount::OBJECT,
                details,
            }
            .serialize(serializer),
        }
    }
}
