//! Enumerated option values
//!
//! Spellings are exactly what the pipeline expects on the command line and
//! in the JSON record, so every variant names itself explicitly.

use clap::builder::{EnumValueParser, PossibleValue, TypedValueParser};
use clap::ValueEnum;
use serde::Serialize;
use std::ffi::OsStr;
use std::fmt;
use std::marker::PhantomData;

use crate::error::ValueError;

macro_rules! cli_spelling {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.to_possible_value() {
                    Some(value) => f.write_str(value.get_name()),
                    None => Ok(()),
                }
            }
        }
    };
}

/// Which part of the pipeline to run
#[derive(Debug, Clone, Copy, ValueEnum, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExecMode {
    #[default]
    #[value(name = "all")]
    All,
    #[value(name = "analyze")]
    Analyze,
    #[value(name = "preprocess")]
    Preprocess,
    #[value(name = "train")]
    Train,
}

#[derive(Debug, Clone, Copy, ValueEnum, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LrScheduler {
    #[default]
    #[value(name = "constant")]
    Constant,
    #[value(name = "cosine_warm_restarts")]
    CosineWarmRestarts,
    #[value(name = "exponential")]
    Exponential,
}

#[derive(Debug, Clone, Copy, ValueEnum, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OptimizerKind {
    #[value(name = "sgd")]
    Sgd,
    #[default]
    #[value(name = "adam")]
    Adam,
    #[value(name = "adamw")]
    Adamw,
}

/// Network architecture
#[derive(Debug, Clone, Copy, ValueEnum, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    #[default]
    #[value(name = "nnunet")]
    Nnunet,
    #[value(name = "unet")]
    Unet,
    #[value(name = "fmgnet")]
    Fmgnet,
    #[value(name = "wnet")]
    Wnet,
    #[value(name = "attn_unet")]
    AttnUnet,
    #[value(name = "unetr")]
    Unetr,
}

#[derive(Debug, Clone, Copy, ValueEnum, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LossKind {
    #[default]
    #[value(name = "dice_ce")]
    DiceCe,
    #[value(name = "dice")]
    Dice,
    #[value(name = "gdl")]
    Gdl,
    #[value(name = "gdl_ce")]
    GdlCe,
}

/// Blending of overlapping sliding windows
#[derive(Debug, Clone, Copy, ValueEnum, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    #[value(name = "constant")]
    Constant,
    #[default]
    #[value(name = "gaussian")]
    Gaussian,
}

cli_spelling!(ExecMode);
cli_spelling!(LrScheduler);
cli_spelling!(OptimizerKind);
cli_spelling!(ModelKind);
cli_spelling!(LossKind);
cli_spelling!(BlendMode);

/// `EnumValueParser` that treats an empty token (`--model ""`, `--model=`)
/// as a bad choice. clap on its own reports it as a missing value.
#[derive(Debug)]
pub struct ChoiceParser<E>(PhantomData<E>);

impl<E: ValueEnum + Clone + Send + Sync + 'static> ChoiceParser<E> {
    pub fn new() -> Self {
        Self(PhantomData)
    }

    fn names() -> Vec<String> {
        E::value_variants()
            .iter()
            .filter_map(E::to_possible_value)
            .map(|v| v.get_name().to_string())
            .collect()
    }
}

impl<E: ValueEnum + Clone + Send + Sync + 'static> Default for ChoiceParser<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for ChoiceParser<E> {
    fn clone(&self) -> Self {
        Self(PhantomData)
    }
}

impl<E: ValueEnum + Clone + Send + Sync + 'static> TypedValueParser for ChoiceParser<E> {
    type Value = E;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &OsStr,
    ) -> Result<E, clap::Error> {
        if value.is_empty() {
            let choices = Self::names();
            // Routed through a fn parser so the ValueError stays attached as the source
            let reject = move |v: &str| -> Result<E, ValueError> {
                Err(ValueError::NotAChoice {
                    value: v.to_string(),
                    choices: choices.clone(),
                })
            };
            return reject.parse_ref(cmd, arg, value);
        }
        EnumValueParser::<E>::new().parse_ref(cmd, arg, value)
    }

    fn possible_values(&self) -> Option<Box<dyn Iterator<Item = PossibleValue> + '_>> {
        Some(Box::new(
            E::value_variants()
                .iter()
                .filter_map(E::to_possible_value),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<T: ValueEnum>() -> Vec<String> {
        T::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect()
    }

    #[test]
    fn test_value_sets() {
        assert_eq!(names::<ExecMode>(), ["all", "analyze", "preprocess", "train"]);
        assert_eq!(
            names::<LrScheduler>(),
            ["constant", "cosine_warm_restarts", "exponential"]
        );
        assert_eq!(names::<OptimizerKind>(), ["sgd", "adam", "adamw"]);
        assert_eq!(
            names::<ModelKind>(),
            ["nnunet", "unet", "fmgnet", "wnet", "attn_unet", "unetr"]
        );
        assert_eq!(names::<LossKind>(), ["dice_ce", "dice", "gdl", "gdl_ce"]);
        assert_eq!(names::<BlendMode>(), ["constant", "gaussian"]);
    }

    #[test]
    fn test_display_matches_serde() {
        assert_eq!(ModelKind::AttnUnet.to_string(), "attn_unet");
        assert_eq!(
            serde_json::to_string(&ModelKind::AttnUnet).unwrap(),
            "\"attn_unet\""
        );
        assert_eq!(LrScheduler::CosineWarmRestarts.to_string(), "cosine_warm_restarts");
        assert_eq!(
            serde_json::to_string(&LrScheduler::CosineWarmRestarts).unwrap(),
            "\"cosine_warm_restarts\""
        );
        assert_eq!(
            serde_json::to_string(&OptimizerKind::Adamw).unwrap(),
            "\"adamw\""
        );
        assert_eq!(serde_json::to_string(&LossKind::GdlCe).unwrap(), "\"gdl_ce\"");
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(ModelKind::from_str("unet", false).is_ok());
        assert!(ModelKind::from_str("UNet", false).is_err());
    }

    #[test]
    fn test_choice_parser_lists_possible_values() {
        let names: Vec<String> = ChoiceParser::<BlendMode>::new()
            .possible_values()
            .unwrap()
            .map(|v| v.get_name().to_string())
            .collect();
        assert_eq!(names, ["constant", "gaussian"]);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ExecMode::default(), ExecMode::All);
        assert_eq!(LrScheduler::default(), LrScheduler::Constant);
        assert_eq!(OptimizerKind::default(), OptimizerKind::Adam);
        assert_eq!(ModelKind::default(), ModelKind::Nnunet);
        assert_eq!(LossKind::default(), LossKind::DiceCe);
        assert_eq!(BlendMode::default(), BlendMode::Gaussian);
    }
}
