//! MainArgs - the full set of pipeline options

use clap::{ArgAction, Parser};
use serde::Serialize;
use std::path::PathBuf;

use super::choices::{
    BlendMode, ChoiceParser, ExecMode, LossKind, LrScheduler, ModelKind, OptimizerKind,
};
use super::validators::{float, float_0_1, integer, non_negative_int, positive_int, str2bool};

/// Medical Imaging Segmentation Toolkit
#[derive(Parser, Serialize, Debug, Clone, PartialEq)]
#[command(name = "mist", about = "MIST segmentation pipeline", long_about = None)]
#[command(args_override_self = true, infer_long_args = true)]
pub struct MainArgs {
    // Runtime
    /// Run all of the MIST pipeline or an individual component
    #[arg(
        long,
        value_parser = ChoiceParser::<ExecMode>::new(),
        default_value_t = ExecMode::All,
        help_heading = "Runtime"
    )]
    pub exec_mode: ExecMode,

    /// Path to dataset json file
    #[arg(long, allow_negative_numbers = true, help_heading = "Runtime")]
    pub data: Option<PathBuf>,

    /// Which gpu(s) to use, defaults to all available GPUs
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 1..,
        value_parser = integer,
        default_values_t = [-1],
        allow_negative_numbers = true,
        help_heading = "Runtime"
    )]
    pub gpus: Vec<i64>,

    /// Number of workers to use for data loading
    #[arg(
        long,
        value_parser = positive_int,
        default_value_t = 8,
        allow_negative_numbers = true,
        help_heading = "Runtime"
    )]
    pub num_workers: usize,

    /// Master port for multi-gpu training
    #[arg(
        long,
        default_value = "12355",
        allow_negative_numbers = true,
        help_heading = "Runtime"
    )]
    pub master_port: String,

    /// Random seed
    #[arg(
        long = "seed_val",
        value_parser = non_negative_int,
        default_value_t = 42,
        allow_negative_numbers = true,
        help_heading = "Runtime"
    )]
    pub seed_val: usize,

    /// Enable test time augmentation
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        value_parser = str2bool,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOLEAN",
        help_heading = "Runtime"
    )]
    pub tta: bool,

    // Output
    /// Path to output of MIST pipeline
    #[arg(long, allow_negative_numbers = true, help_heading = "Output")]
    pub results: Option<PathBuf>,

    /// Path to save preprocessed numpy data
    #[arg(long, allow_negative_numbers = true, help_heading = "Output")]
    pub numpy: Option<PathBuf>,

    // AMP
    /// Enable automatic mixed precision (recommended)
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        value_parser = str2bool,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOLEAN",
        help_heading = "AMP"
    )]
    pub amp: bool,

    // Training hyperparameters
    /// Batch size
    #[arg(
        long,
        value_parser = positive_int,
        default_value_t = 2,
        allow_negative_numbers = true,
        help_heading = "Training"
    )]
    pub batch_size: usize,

    /// Height, width, and depth of patch size
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 1..,
        value_parser = integer,
        allow_negative_numbers = true,
        help_heading = "Training"
    )]
    pub patch_size: Option<Vec<i64>>,

    /// Max patch size
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 1..,
        value_parser = integer,
        default_values_t = [256, 256, 128],
        allow_negative_numbers = true,
        help_heading = "Training"
    )]
    pub max_patch_size: Vec<i64>,

    /// Learning rate
    #[arg(
        long,
        value_parser = float,
        default_value_t = 0.0003,
        allow_negative_numbers = true,
        help_heading = "Training"
    )]
    pub learning_rate: f64,

    /// Exponential decay factor
    #[arg(
        long = "exp_decay",
        value_parser = float,
        default_value_t = 0.9,
        allow_negative_numbers = true,
        help_heading = "Training"
    )]
    pub exp_decay: f64,

    /// Learning rate scheduler
    #[arg(
        long,
        value_parser = ChoiceParser::<LrScheduler>::new(),
        default_value_t = LrScheduler::Constant,
        help_heading = "Training"
    )]
    pub lr_scheduler: LrScheduler,

    /// Length of a cosine decay cycle in steps, only with cosine_warm_restarts scheduler
    #[arg(
        long,
        value_parser = positive_int,
        default_value_t = 500,
        allow_negative_numbers = true,
        help_heading = "Training"
    )]
    pub cosine_first_steps: usize,

    // Optimizer
    /// Optimizer
    #[arg(
        long,
        value_parser = ChoiceParser::<OptimizerKind>::new(),
        default_value_t = OptimizerKind::Adam,
        help_heading = "Optimizer"
    )]
    pub optimizer: OptimizerKind,

    /// Use gradient clipping
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        value_parser = str2bool,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOLEAN",
        help_heading = "Optimizer"
    )]
    pub clip_norm: bool,

    /// Max threshold for global norm clipping
    #[arg(
        long,
        value_parser = float,
        default_value_t = 1.0,
        allow_negative_numbers = true,
        help_heading = "Optimizer"
    )]
    pub clip_norm_max: f64,

    // Neural network parameters
    /// Network architecture
    #[arg(
        long,
        value_parser = ChoiceParser::<ModelKind>::new(),
        default_value_t = ModelKind::Nnunet,
        help_heading = "Network"
    )]
    pub model: ModelKind,

    /// Use residual blocks for nnUNet or UNet
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        value_parser = str2bool,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOLEAN",
        help_heading = "Network"
    )]
    pub use_res_block: bool,

    /// Use pocket version of network
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        value_parser = str2bool,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOLEAN",
        help_heading = "Network"
    )]
    pub pocket: bool,

    /// Depth of U-Net or similar architecture
    #[arg(
        long,
        value_parser = non_negative_int,
        allow_negative_numbers = true,
        help_heading = "Network"
    )]
    pub depth: Option<usize>,

    /// Use deep supervision
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        value_parser = str2bool,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOLEAN",
        help_heading = "Network"
    )]
    pub deep_supervision: bool,

    /// Number of deep supervision heads
    #[arg(
        long,
        value_parser = positive_int,
        default_value_t = 2,
        allow_negative_numbers = true,
        help_heading = "Network"
    )]
    pub deep_supervision_heads: usize,

    /// Use VAE regularization
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        value_parser = str2bool,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOLEAN",
        help_heading = "Network"
    )]
    pub vae_reg: bool,

    /// Weight for VAE regularization loss
    #[arg(
        long,
        value_parser = float_0_1,
        default_value_t = 0.01,
        allow_negative_numbers = true,
        help_heading = "Network"
    )]
    pub vae_penalty: f64,

    /// Use L2 regularization
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        value_parser = str2bool,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOLEAN",
        help_heading = "Network"
    )]
    pub l2_reg: bool,

    /// L2 penalty
    #[arg(
        long,
        value_parser = float_0_1,
        default_value_t = 0.00001,
        allow_negative_numbers = true,
        help_heading = "Network"
    )]
    pub l2_penalty: f64,

    /// Use L1 regularization
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        value_parser = str2bool,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOLEAN",
        help_heading = "Network"
    )]
    pub l1_reg: bool,

    /// L1 penalty
    #[arg(
        long,
        value_parser = float_0_1,
        default_value_t = 0.00001,
        allow_negative_numbers = true,
        help_heading = "Network"
    )]
    pub l1_penalty: f64,

    // Data loading
    /// Probability of crop centered on foreground voxel
    #[arg(
        long,
        value_parser = float_0_1,
        default_value_t = 0.4,
        allow_negative_numbers = true,
        help_heading = "Data loading"
    )]
    pub oversampling: f64,

    // Preprocessing
    /// Turn off preprocessing
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        value_parser = str2bool,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOLEAN",
        help_heading = "Preprocessing"
    )]
    pub no_preprocess: bool,

    /// Use N4 bias field correction (only for MR images)
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        value_parser = str2bool,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOLEAN",
        help_heading = "Preprocessing"
    )]
    pub use_n4_bias_correction: bool,

    /// Use class weights in config file
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        value_parser = str2bool,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOLEAN",
        help_heading = "Preprocessing"
    )]
    pub use_config_class_weights: bool,

    /// Specify class weights
    #[arg(
        long,
        value_parser = float,
        action = ArgAction::Set,
        num_args = 1..,
        allow_negative_numbers = true,
        help_heading = "Preprocessing"
    )]
    pub class_weights: Option<Vec<f64>>,

    // Loss function
    /// Loss function for training
    #[arg(
        long,
        value_parser = ChoiceParser::<LossKind>::new(),
        default_value_t = LossKind::DiceCe,
        help_heading = "Loss"
    )]
    pub loss: LossKind,

    // Sliding window inference
    /// Amount of overlap between scans during sliding window inference
    #[arg(
        long,
        value_parser = float_0_1,
        default_value_t = 0.25,
        allow_negative_numbers = true,
        help_heading = "Sliding window inference"
    )]
    pub sw_overlap: f64,

    /// How to blend output of overlapping windows
    #[arg(
        long,
        value_parser = ChoiceParser::<BlendMode>::new(),
        default_value_t = BlendMode::Gaussian,
        help_heading = "Sliding window inference"
    )]
    pub blend_mode: BlendMode,

    // Postprocessing
    /// Turn off postprocessing of MIST output
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        value_parser = str2bool,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOLEAN",
        help_heading = "Postprocessing"
    )]
    pub no_postprocess: bool,

    // Validation
    /// Number of cross-validation folds
    #[arg(
        long,
        value_parser = positive_int,
        default_value_t = 5,
        allow_negative_numbers = true,
        help_heading = "Validation"
    )]
    pub nfolds: usize,

    /// Which folds to run
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 1..,
        value_parser = integer,
        default_values_t = [0, 1, 2, 3, 4],
        allow_negative_numbers = true,
        help_heading = "Validation"
    )]
    pub folds: Vec<i64>,

    /// Number of epochs
    #[arg(
        long,
        value_parser = positive_int,
        default_value_t = 1000,
        allow_negative_numbers = true,
        help_heading = "Validation"
    )]
    pub epochs: usize,

    /// Steps per epoch. By default ceil(training_dataset_size / batch_size / gpus)
    #[arg(
        long,
        value_parser = positive_int,
        allow_negative_numbers = true,
        help_heading = "Validation"
    )]
    pub steps_per_epoch: Option<usize>,

    // Evaluation
    /// Use native image spacing to compute Hausdorff distances
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        value_parser = str2bool,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOLEAN",
        help_heading = "Evaluation"
    )]
    pub use_native_spacing: bool,

    // Uncertainty
    /// Output standard deviation for ensemble predictions
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        value_parser = str2bool,
        default_value_t = false,
        default_missing_value = "true",
        value_name = "BOOLEAN",
        help_heading = "Uncertainty"
    )]
    pub output_std: bool,
}
