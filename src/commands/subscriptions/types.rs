use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::http::types::null_as_default;

// every field treats an explicit `null` like a missing one and keeps its zero value

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub product: Product,
    #[serde(deserialize_with = "null_as_default")]
    pub rate_plan: RatePlan,
    #[serde(deserialize_with = "null_as_default")]
    pub component_values: Vec<ComponentValue>,
    #[serde(deserialize_with = "null_as_default")]
    pub zone: Zone,
    #[serde(deserialize_with = "null_as_default")]
    pub frequency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_period_start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_period_end: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(rename = "app", deserialize_with = "null_as_default")]
    pub applied_credits: AppliedCredits,
    #[serde(deserialize_with = "null_as_default")]
    pub price: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub entitled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub cancel_at_period_end: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub period: String,
    #[serde(deserialize_with = "null_as_default")]
    pub billing: String,
    #[serde(deserialize_with = "null_as_default")]
    pub public_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RatePlan {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub public_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub scope: String,
    #[serde(deserialize_with = "null_as_default")]
    pub externally_managed: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub sets: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_contract: bool,
}

/// A named metered quantity, e.g. the seat count of a plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentValue {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Zone {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppliedCredits {
    #[serde(deserialize_with = "null_as_default")]
    pub install_id: String,
}

#[cfg(test)]
mod test {
    use chrono::TimeZone;

    use super::*;

    const SUBSCRIPTION: &str = r#"{
        "id": "506e3185e9c882d175a2d0cb0093d9f2",
        "product": {
            "name": "workers",
            "period": "monthly",
            "billing": "postpaid",
            "public_name": "Workers Paid",
            "duration": 1
        },
        "rate_plan": {
            "id": "workers_paid",
            "public_name": "Workers Paid",
            "currency": "USD",
            "scope": "user",
            "externally_managed": false,
            "sets": ["workers", "kv"],
            "is_contract": false
        },
        "component_values": [
            { "name": "requests", "value": 10000000 },
            { "name": "seats", "value": 3 }
        ],
        "zone": { "id": "023e105f4ecef8ad9ca31a8372d0c353", "name": "example.com" },
        "frequency": "monthly",
        "current_period_start": "2024-03-01T00:00:00Z",
        "current_period_end": "2024-04-01T00:00:00Z",
        "state": "Paid",
        "currency": "USD",
        "app": { "install_id": "install_0" },
        "price": 5.0,
        "entitled": true,
        "cancel_at_period_end": false
    }"#;

    #[test]
    fn test_decode_subscription() {
        let subscription: Subscription = serde_json::from_str(SUBSCRIPTION).unwrap();

        assert_eq!(subscription.id, "506e3185e9c882d175a2d0cb0093d9f2");
        assert_eq!(subscription.product.public_name, "Workers Paid");
        assert_eq!(subscription.product.duration, 1);
        assert_eq!(subscription.rate_plan.sets, vec!["workers", "kv"]);
        assert_eq!(subscription.component_values[1].name, "seats");
        assert_eq!(subscription.component_values[1].value, 3);
        assert_eq!(subscription.zone.name, "example.com");
        assert_eq!(subscription.applied_credits.install_id, "install_0");
        assert_eq!(
            subscription.current_period_end,
            Some(Utc.with_ymd_and_hms(2024, 4, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(subscription.price, 5.0);
        assert!(subscription.entitled);
        assert!(!subscription.cancel_at_period_end);
    }

    #[test]
    fn test_absent_timestamps() {
        let subscription: Subscription =
            serde_json::from_str(r#"{ "id": "sub_1", "current_period_end": null }"#).unwrap();

        assert_eq!(subscription.current_period_start, None);
        assert_eq!(subscription.current_period_end, None);
    }

    #[test]
    fn test_missing_and_null_fields() {
        let subscription: Subscription = serde_json::from_str(
            r#"{ "id": "sub_1", "zone": null, "component_values": null, "rate_plan": { "sets": null } }"#,
        )
        .unwrap();

        assert_eq!(subscription.zone, Zone::default());
        assert!(subscription.component_values.is_empty());
        assert!(subscription.rate_plan.sets.is_empty());
        assert_eq!(subscription.product, Product::default());
        assert_eq!(subscription.price, 0.0);
    }

    #[test]
    fn test_null_scalars() {
        let subscription: Subscription = serde_json::from_str(
            r#"{
                "id": "sub_1",
                "state": null,
                "price": null,
                "entitled": null,
                "zone": { "id": "z", "name": null },
                "product": { "name": "workers", "duration": null },
                "rate_plan": { "is_contract": null },
                "component_values": [{ "name": null, "value": null }],
                "app": { "install_id": null }
            }"#,
        )
        .unwrap();

        assert_eq!(subscription.id, "sub_1");
        assert_eq!(subscription.state, "");
        assert_eq!(subscription.price, 0.0);
        assert!(!subscription.entitled);
        assert_eq!(subscription.zone.id, "z");
        assert_eq!(subscription.zone.name, "");
        assert_eq!(subscription.product.name, "workers");
        assert_eq!(subscription.product.duration, 0);
        assert!(!subscription.rate_plan.is_contract);
        assert_eq!(subscription.component_values, vec![ComponentValue::default()]);
        assert_eq!(subscription.applied_credits, AppliedCredits::default());
    }

    #[test]
    fn test_type_mismatch() {
        assert!(serde_json::from_str::<Subscription>(r#"{ "price": "free" }"#).is_err());
        assert!(serde_json::from_str::<Subscription>(r#"{ "current_period_start": 5 }"#).is_err());
    }

    #[test]
    fn test_round_trip() {
        let subscription: Subscription = serde_json::from_str(SUBSCRIPTION).unwrap();
        let encoded = serde_json::to_string(&subscription).unwrap();

        assert_eq!(
            serde_json::from_str::<Subscription>(&encoded).unwrap(),
            subscription
        );

        let without_period = Subscription {
            id: "sub_2".to_string(),
            ..Default::default()
        };
        let encoded = serde_json::to_value(&without_period).unwrap();

        assert!(encoded.get("current_period_start").is_none());
        assert_eq!(encoded["app"]["install_id"], "");
        assert_eq!(
            serde_json::from_value::<Subscription>(encoded).unwrap(),
            without_period
        );
    }
}
