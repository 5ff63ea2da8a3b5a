//! Supports extracting arm parameters from YAML file (optional)

use std::path::Path;
use yaml_rust2::{Yaml, YamlLoader};

use crate::kinematic_traits::Point;
use crate::parameter_error::ParameterError;
use crate::parameters::Parameters;
use crate::path_plan::sequencer::PickAndPlace;

const GEOMETRY: &str = "planar_arm_geometric_parameters";
const LIMITS: &str = "planar_arm_joint_limits";
const MOTION: &str = "planar_arm_motion";
const PICK_AND_PLACE: &str = "planar_arm_pick_and_place";

impl Parameters {
    /// Read the arm configuration from YAML file. YAML file like this is supported:
    /// ```yaml
    /// planar_arm_geometric_parameters:
    ///   l3: 1.2
    ///   l4: 0.7
    /// planar_arm_joint_limits:
    ///   phi32: [25, 80]
    ///   phi43: [45, 135]
    /// planar_arm_motion:
    ///   accel_time: 0.5
    ///   max_velocity: 0.5
    /// ```
    /// Limits are in degrees. The motion section and each of its values are optional,
    /// defaults are taken from [`Parameters::default`]. The result is validated.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let doc = load_document(contents)?;
        let defaults = Parameters::default();

        let geometry = section(&doc, GEOMETRY)?;
        let limits = section(&doc, LIMITS)?;
        let (phi32_min, phi32_max) = range(limits, "phi32")?;
        let (phi43_min, phi43_max) = range(limits, "phi43")?;

        let motion = &doc[MOTION];
        let (accel_time, max_velocity) = if motion.is_badvalue() {
            (defaults.accel_time, defaults.max_velocity)
        } else {
            (
                optional_number(motion, "accel_time")?.unwrap_or(defaults.accel_time),
                optional_number(motion, "max_velocity")?.unwrap_or(defaults.max_velocity),
            )
        };

        let parameters = Parameters {
            l3: number(geometry, "l3")?,
            l4: number(geometry, "l4")?,
            phi32_min,
            phi32_max,
            phi43_min,
            phi43_max,
            accel_time,
            max_velocity,
        };
        parameters.validate()?;
        Ok(parameters)
    }
}

impl PickAndPlace {
    /// Read pick-and-place settings from the `planar_arm_pick_and_place` section:
    /// ```yaml
    /// planar_arm_pick_and_place:
    ///   drop_off: [0.0, 1.5]
    ///   dwell_frames: 10
    /// ```
    /// Missing section or values fall back to [`PickAndPlace::default`].
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ParameterError> {
        let doc = load_document(contents)?;
        let defaults = PickAndPlace::default();
        let node = &doc[PICK_AND_PLACE];
        if node.is_badvalue() {
            return Ok(defaults);
        }

        let drop_off = if node["drop_off"].is_badvalue() {
            defaults.drop_off
        } else {
            let (x, y) = range(node, "drop_off")?;
            if !x.is_finite() || !y.is_finite() {
                return Err(ParameterError::NonFinite(format!(
                    "drop_off must be finite (got [{}, {}])",
                    x, y
                )));
            }
            Point::new(x, y)
        };

        let dwell_frames = match &node["dwell_frames"] {
            Yaml::BadValue => defaults.dwell_frames,
            Yaml::Integer(count) => usize::try_from(*count).map_err(|_| {
                ParameterError::ParseError(format!(
                    "dwell_frames must be a non-negative integer (got {})",
                    count
                ))
            })?,
            other => {
                return Err(ParameterError::ParseError(format!(
                    "dwell_frames must be a non-negative integer (got {:?})",
                    other
                )));
            }
        };

        Ok(PickAndPlace {
            drop_off,
            dwell_frames,
        })
    }
}

fn load_document(contents: &str) -> Result<Yaml, ParameterError> {
    let mut docs = YamlLoader::load_from_str(contents)
        .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
    if docs.is_empty() {
        return Err(ParameterError::ParseError("empty YAML document".to_string()));
    }
    Ok(docs.swap_remove(0))
}

fn section<'a>(doc: &'a Yaml, name: &str) -> Result<&'a Yaml, ParameterError> {
    let node = &doc[name];
    if node.is_badvalue() {
        return Err(ParameterError::MissingField(name.to_string()));
    }
    Ok(node)
}

/// Numbers may be written with or without the decimal point.
fn as_number(node: &Yaml) -> Option<f64> {
    match node {
        Yaml::Real(_) => node.as_f64(),
        Yaml::Integer(value) => Some(*value as f64),
        _ => None,
    }
}

fn number(node: &Yaml, field: &str) -> Result<f64, ParameterError> {
    optional_number(node, field)?.ok_or_else(|| ParameterError::MissingField(field.to_string()))
}

fn optional_number(node: &Yaml, field: &str) -> Result<Option<f64>, ParameterError> {
    let value = &node[field];
    if value.is_badvalue() {
        return Ok(None);
    }
    as_number(value).map(Some).ok_or_else(|| {
        ParameterError::ParseError(format!("{} must be a number (got {:?})", field, value))
    })
}

/// Two-element list such as `[25, 80]`.
fn range(node: &Yaml, field: &str) -> Result<(f64, f64), ParameterError> {
    let value = &node[field];
    let items = match value {
        Yaml::BadValue => return Err(ParameterError::MissingField(field.to_string())),
        Yaml::Array(items) => items,
        other => {
            return Err(ParameterError::ParseError(format!(
                "{} must be a list of two numbers (got {:?})",
                field, other
            )));
        }
    };
    if items.len() != 2 {
        return Err(ParameterError::ParseError(format!(
            "{} must have exactly two values, found {}",
            field,
            items.len()
        )));
    }
    match (as_number(&items[0]), as_number(&items[1])) {
        (Some(first), Some(second)) => Ok((first, second)),
        _ => Err(ParameterError::ParseError(format!(
            "{} must contain numbers only",
            field
        ))),
    }
}
