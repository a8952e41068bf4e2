use serde::{Deserialize, Serialize};

use super::error::{ConfigIssue, SnapResult};

/// How far ahead (seconds) a velocity is projected when choosing a corner
pub const DEFAULT_PROJECTION_HORIZON: f32 = 0.2;
/// Natural frequency of the snap spring (rad/s); damping is always critical
pub const DEFAULT_SPRING_OMEGA: f32 = 12.0;
/// Below this speed (points/s) the resolver ignores velocity
pub const DEFAULT_MIN_PROJECTION_SPEED: f32 = 1.0;
pub const DEFAULT_REST_SPEED: f32 = 2.0;
pub const DEFAULT_REST_DISTANCE: f32 = 0.5;
pub const DEFAULT_TIME_STEP: f32 = 1.0 / 60.0;
pub const DEFAULT_CORNER_MARGIN: f32 = 16.0;
/// Air resistance on items (1/s)
pub const DEFAULT_LINEAR_DAMPING: f32 = 0.0;

/// Tunables for snapping and for the reference engine.
///
/// Every field has a default, so a partial JSON object is enough:
/// `{"spring_omega": 8.0}`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    pub projection_horizon: f32,
    pub spring_omega: f32,
    pub min_projection_speed: f32,
    pub rest_speed: f32,
    pub rest_distance: f32,
    pub time_step: f32,
    /// Gap kept between an item's edge and the container edge at rest
    pub corner_margin: f32,
    /// Bounciness against the container edges (0.0 = dead stop)
    pub restitution: f32,
    /// Velocity loss per second while an item moves
    pub linear_damping: f32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            projection_horizon: DEFAULT_PROJECTION_HORIZON,
            spring_omega: DEFAULT_SPRING_OMEGA,
            min_projection_speed: DEFAULT_MIN_PROJECTION_SPEED,
            rest_speed: DEFAULT_REST_SPEED,
            rest_distance: DEFAULT_REST_DISTANCE,
            time_step: DEFAULT_TIME_STEP,
            corner_margin: DEFAULT_CORNER_MARGIN,
            restitution: 0.0,
            linear_damping: DEFAULT_LINEAR_DAMPING,
        }
    }
}

impl SnapConfig {
    pub fn from_json(json: &str) -> SnapResult<Self> {
        let config: SnapConfig =
            serde_json::from_str(json).map_err(|e| ConfigIssue::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> SnapResult<()> {
        positive("projection_horizon", self.projection_horizon)?;
        positive("spring_omega", self.spring_omega)?;
        positive("min_projection_speed", self.min_projection_speed)?;
        positive("rest_speed", self.rest_speed)?;
        positive("rest_distance", self.rest_distance)?;
        positive("time_step", self.time_step)?;
        if !self.corner_margin.is_finite() || self.corner_margin < 0.0 {
            return Err(ConfigIssue::NegativeInset(self.corner_margin).into());
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigIssue::OutOfUnitRange {
                field: "restitution",
                value: self.restitution,
            }
            .into());
        }
        if !(self.linear_damping.is_finite() && self.linear_damping >= 0.0) {
            return Err(ConfigIssue::Negative {
                field: "linear_damping",
                value: self.linear_damping,
            }
            .into());
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> SnapResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigIssue::NonPositive { field, value }.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::SnapError;

    #[test]
    fn defaults_are_valid() {
        assert!(SnapConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SnapConfig::from_json(r#"{"spring_omega": 8.0}"#).unwrap();
        assert_eq!(cfg.spring_omega, 8.0);
        assert_eq!(cfg.projection_horizon, DEFAULT_PROJECTION_HORIZON);
    }

    #[test]
    fn rejects_zero_omega_and_bad_json() {
        let err = SnapConfig::from_json(r#"{"spring_omega": 0.0}"#).unwrap_err();
        assert_eq!(
            err,
            SnapError::InvalidConfiguration(ConfigIssue::NonPositive {
                field: "spring_omega",
                value: 0.0
            })
        );
        assert!(matches!(
            SnapConfig::from_json("{not json"),
            Err(SnapError::InvalidConfiguration(ConfigIssue::Json(_)))
        ));
    }

    #[test]
    fn restitution_must_be_unit_range() {
        let cfg = SnapConfig { restitution: 1.5, ..SnapConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn damping_may_be_zero_but_not_negative() {
        assert!(SnapConfig::from_json(r#"{"linear_damping": 0.0}"#).is_ok());
        assert_eq!(
            SnapConfig::from_json(r#"{"linear_damping": -0.5}"#).unwrap_err(),
            SnapError::InvalidConfiguration(ConfigIssue::Negative {
                field: "linear_damping",
                value: -0.5
            })
        );
    }
}
