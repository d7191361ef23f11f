pub mod kind;

pub use self::kind::{Direction, ResourceType, State};
use crate::{
    error::Error,
    ledger::{index, timestamp, AccountAddress, Hash256, ResultCode},
    properties::HasAdditionalProperties,
};
use chrono::{DateTime, FixedOffset};
use core::str::FromStr;
use log::debug;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Wire names of the modelled fields. None of them may end up in the
/// additional properties.
pub const NAMED_FIELDS: [&str; 13] = [
    "account",
    "type",
    "direction",
    "state",
    "result",
    "ledger",
    "hash",
    "timestamp",
    "transaction_url",
    "previous_notification_url",
    "next_notification_url",
    "previous_hash",
    "next_hash",
];

/// Notification as it arrives, before any field is checked. Named fields are
/// read as raw values so a wrong JSON type is reported against its field.
#[derive(Deserialize, Debug)]
struct NotificationData {
    account: Option<Value>,

    #[serde(rename = "type")]
    resource_type: Option<Value>,

    direction: Option<Value>,

    state: Option<Value>,

    result: Option<Value>,

    // string, number, "" or null
    ledger: Option<Value>,

    hash: Option<Value>,

    timestamp: Option<Value>,

    transaction_url: Option<Value>,

    previous_notification_url: Option<Value>,

    next_notification_url: Option<Value>,

    previous_hash: Option<Value>,

    next_hash: Option<Value>,

    #[serde(flatten)]
    additional_properties: Map<String, Value>,
}

/// A notice about a payment, order, trustline or account settings change
/// that touched an account.
///
/// Notifications of one account form a chronological chain: each one links to
/// its neighbours through `previous_notification_url`/`next_notification_url`
/// and `previous_hash`/`next_hash`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Notification {
    #[serde(skip_serializing_if = "Option::is_none")]
    account: Option<AccountAddress>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    resource_type: Option<ResourceType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<Direction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<State>,

    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<ResultCode>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "index::serialize"
    )]
    ledger: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    hash: Option<Hash256>,

    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "timestamp::serialize"
    )]
    timestamp: Option<DateTime<FixedOffset>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    transaction_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    previous_notification_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    next_notification_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    previous_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    next_hash: Option<String>,

    #[serde(flatten)]
    additional_properties: Map<String, Value>,
}

impl Notification {
    pub fn from_value(value: Value) -> Result<Self, Error> {
        let data: NotificationData = serde_json::from_value(value)?;
        Notification::from_data(data)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let data: NotificationData = serde_json::from_slice(bytes)?;
        Notification::from_data(data)
    }

    pub fn to_value(&self) -> Result<Value, Error> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, Error> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string(self)?)
    }

    /// The Ripple account the notification was queried for.
    pub fn account(&self) -> Option<&AccountAddress> {
        self.account.as_ref()
    }

    pub fn resource_type(&self) -> Option<ResourceType> {
        self.resource_type
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn state(&self) -> Option<State> {
        self.state
    }

    pub fn result(&self) -> Option<&ResultCode> {
        self.result.as_ref()
    }

    /// Index of the ledger holding the validated or failed transaction.
    ///
    /// A failed payment only lands in a ledger when it fails after submission
    /// and a network fee is claimed, so failed notifications often have none.
    pub fn ledger(&self) -> Option<i64> {
        self.ledger
    }

    pub fn hash(&self) -> Option<&Hash256> {
        self.hash.as_ref()
    }

    pub fn timestamp(&self) -> Option<&DateTime<FixedOffset>> {
        self.timestamp.as_ref()
    }

    /// URL of the full resource this notification is about.
    pub fn transaction_url(&self) -> Option<&str> {
        self.transaction_url.as_deref()
    }

    /// URL of the notification that came right before this one.
    pub fn previous_notification_url(&self) -> Option<&str> {
        self.previous_notification_url.as_deref()
    }

    /// URL of the notification that came right after this one.
    pub fn next_notification_url(&self) -> Option<&str> {
        self.next_notification_url.as_deref()
    }

    pub fn previous_hash(&self) -> Option<&str> {
        self.previous_hash.as_deref()
    }

    pub fn next_hash(&self) -> Option<&str> {
        self.next_hash.as_deref()
    }

    fn from_data(data: NotificationData) -> Result<Self, Error> {
        Notification::validate(data).map_err(|e| {
            debug!("Rejected notification: {}", e);
            e
        })
    }

    fn validate(data: NotificationData) -> Result<Self, Error> {
        if !data.additional_properties.is_empty() {
            debug!(
                "Keeping unknown notification keys: {:?}",
                data.additional_properties.keys().collect::<Vec<_>>()
            );
        }
        Ok(Notification {
            account: parse_opt("account", data.account)?,
            resource_type: parse_opt("type", data.resource_type)?,
            direction: parse_opt("direction", data.direction)?,
            state: parse_opt("state", data.state)?,
            result: parse_opt("result", data.result)?,
            ledger: index::parse(data.ledger)?,
            hash: parse_opt("hash", data.hash)?,
            timestamp: string_field("timestamp", data.timestamp)?
                .as_deref()
                .map(timestamp::parse)
                .transpose()?,
            transaction_url: string_field("transaction_url", data.transaction_url)?,
            previous_notification_url: string_field(
                "previous_notification_url",
                data.previous_notification_url,
            )?,
            next_notification_url: string_field(
                "next_notification_url",
                data.next_notification_url,
            )?,
            previous_hash: string_field("previous_hash", data.previous_hash)?,
            next_hash: string_field("next_hash", data.next_hash)?,
            additional_properties: data.additional_properties,
        })
    }
}

/// Absent and `null` give `None`, any other non-string value is refused.
fn string_field(field: &'static str, value: Option<Value>) -> Result<Option<String>, Error> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(Error::format_violation(
            field,
            other.to_string(),
            "expected a string",
        )),
    }
}

fn parse_opt<T: FromStr<Err = Error>>(
    field: &'static str,
    value: Option<Value>,
) -> Result<Option<T>, Error> {
    string_field(field, value)?
        .as_deref()
        .map(T::from_str)
        .transpose()
}

impl FromStr for Notification {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Notification::from_slice(s.as_bytes())
    }
}

/// Serde compatible Deserialize
impl<'de> Deserialize<'de> for Notification {
    fn deserialize<D>(deserializer: D) -> Result<Notification, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = NotificationData::deserialize(deserializer)?;
        Notification::from_data(data).map_err(de::Error::custom)
    }
}

impl HasAdditionalProperties for Notification {
    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }

    fn set_additional_property(&mut self, name: &str, value: Value) -> Result<(), Error> {
        if NAMED_FIELDS.contains(&name) {
            return Err(Error::ReservedProperty(name.to_string()));
        }
        self.additional_properties.insert(name.to_string(), value);
        Ok(())
    }
}
