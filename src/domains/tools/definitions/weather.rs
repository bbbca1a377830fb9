//! Weather tool (synthetic data).
//!
//! Produces a random reading for any city. There is no external weather
//! integration: the values are drawn uniformly from fixed ranges.

use std::ops::Range;

use chrono::{DateTime, Utc};
use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use super::common::{ToolContext, ToolDefinition, require_non_blank};
use crate::domains::tools::envelope::OperationPayload;
use crate::domains::tools::error::ToolError;

/// Temperature range in °C (upper bound exclusive).
pub const TEMPERATURE_RANGE: Range<i32> = 20..35;

/// Relative humidity range in % (upper bound exclusive).
pub const HUMIDITY_RANGE: Range<u32> = 40..80;

/// Sky condition of a synthetic reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    #[serde(rename = "Partly Cloudy")]
    PartlyCloudy,
}

impl WeatherCondition {
    pub const ALL: [Self; 4] = [Self::Sunny, Self::Cloudy, Self::Rainy, Self::PartlyCloudy];
}

/// A synthetic weather reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    pub temperature: i32,
    pub condition: WeatherCondition,
    pub humidity: u32,
    pub timestamp: DateTime<Utc>,
}

impl WeatherReading {
    /// Draw a reading for `city` from `rng`, stamped with the current time.
    pub fn sample<R: Rng + ?Sized>(city: impl Into<String>, rng: &mut R) -> Self {
        let conditions = WeatherCondition::ALL;
        Self {
            city: city.into(),
            temperature: rng.gen_range(TEMPERATURE_RANGE),
            condition: conditions[rng.gen_range(0..conditions.len())],
            humidity: rng.gen_range(HUMIDITY_RANGE),
            timestamp: Utc::now(),
        }
    }
}

/// Parameters for the weather tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetWeatherParams {
    #[schemars(description = "ชื่อเมือง / City name")]
    pub city: String,
}

/// Weather tool.
pub struct GetWeatherTool;

impl ToolDefinition for GetWeatherTool {
    const NAME: &'static str = "get_weather";
    const DESCRIPTION: &'static str =
        "รับข้อมูลสภาพอากาศ (ตัวอย่าง) / Get weather information (example)";

    type Params = GetWeatherParams;

    #[instrument(skip_all, fields(city = %params.city))]
    fn execute(params: GetWeatherParams, _ctx: &ToolContext) -> Result<OperationPayload, ToolError> {
        require_non_blank("city", &params.city)?;

        let weather = WeatherReading::sample(params.city, &mut rand::thread_rng());

        info!(
            "Generated weather for {}: {}°C, {:?}",
            weather.city, weather.temperature, weather.condition
        );
        Ok(OperationPayload::Weather { weather })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::test_support::{args, context};
    use super::*;
    use crate::domains::tools::error::ErrorKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    #[test]
    fn test_weather_bounds_over_many_samples() {
        let ctx = context();
        for _ in 0..1500 {
            let payload = GetWeatherTool::call(args(json!({ "city": "Bangkok" })), &ctx).unwrap();
            let weather = match payload {
                OperationPayload::Weather { weather } => weather,
                other => panic!("Expected Weather, got {:?}", other),
            };

            assert_eq!(weather.city, "Bangkok");
            assert!(TEMPERATURE_RANGE.contains(&weather.temperature));
            assert!(HUMIDITY_RANGE.contains(&weather.humidity));
            assert!(WeatherCondition::ALL.contains(&weather.condition));
        }
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let a = WeatherReading::sample("Chiang Mai", &mut StdRng::seed_from_u64(42));
        let b = WeatherReading::sample("Chiang Mai", &mut StdRng::seed_from_u64(42));

        assert_eq!(a.temperature, b.temperature);
        assert_eq!(a.condition, b.condition);
        assert_eq!(a.humidity, b.humidity);
    }

    #[test]
    fn test_every_condition_is_reachable() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = Vec::new();
        for _ in 0..500 {
            let condition = WeatherReading::sample("x", &mut rng).condition;
            if !seen.contains(&condition) {
                seen.push(condition);
            }
        }
        assert_eq!(seen.len(), WeatherCondition::ALL.len());
    }

    #[test]
    fn test_condition_wire_names() {
        let names: Vec<String> = WeatherCondition::ALL
            .iter()
            .map(|c| serde_json::to_value(c).unwrap().as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Sunny", "Cloudy", "Rainy", "Partly Cloudy"]);
    }

    #[test]
    fn test_weather_missing_city() {
        let ctx = context();
        let err = GetWeatherTool::call(args(json!({})), &ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationError);
    }
}
