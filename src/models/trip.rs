use serde::{Deserialize, Deserializer, Serialize};

use crate::error::TripPlanError;

// Budget arrives either as a label ("mid-range") or as an amount (5000)
fn deserialize_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected text or number, got {}",
            other
        ))),
    }
}

fn deserialize_optional_days<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    let invalid = || <D::Error as serde::de::Error>::custom("days must be a whole number");
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .and_then(|days| u32::try_from(days).ok())
            .map(Some)
            .ok_or_else(invalid),
        Some(serde_json::Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(serde_json::Value::String(s)) => {
            s.trim().parse::<u32>().map(Some).map_err(|_| invalid())
        }
        Some(_) => Err(invalid()),
    }
}

/// Body of `POST /generate-trip-plan` as received. Every field is optional
/// here so that missing fields are reported together by [`validate`].
///
/// [`validate`]: TripPlanInput::validate
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct TripPlanInput {
    #[serde(default)]
    pub province: Option<String>,
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub budget: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_days")]
    pub days: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    pub province: String,
    pub style: String,
    pub budget: String,
    pub days: u32,
}

impl TripPlanInput {
    pub fn validate(self) -> Result<TripRequest, TripPlanError> {
        let present = |field: Option<String>| {
            field
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let province = present(self.province);
        let style = present(self.style);
        let budget = present(self.budget);

        let mut missing = Vec::new();
        if province.is_none() {
            missing.push("province");
        }
        if style.is_none() {
            missing.push("style");
        }
        if budget.is_none() {
            missing.push("budget");
        }
        if self.days.is_none() {
            missing.push("days");
        }

        match (province, style, budget, self.days) {
            (Some(province), Some(style), Some(budget), Some(days)) => {
                if days == 0 {
                    return Err(TripPlanError::MalformedRequest(
                        "days must be at least 1".to_string(),
                    ));
                }
                Ok(TripRequest {
                    province,
                    style,
                    budget,
                    days,
                })
            }
            _ => Err(TripPlanError::MalformedRequest(format!(
                "Missing required fields: {}",
                missing.join(", ")
            ))),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TripPlanResponse {
    pub plan: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
