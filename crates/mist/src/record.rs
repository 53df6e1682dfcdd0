//! Read-only views over a parsed `MainArgs`
//!
//! The pipeline stages themselves live outside this crate; they receive the
//! configuration either in-process or as the JSON document produced here.

use tracing::info;

use crate::args::MainArgs;

fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn or_unset<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl MainArgs {
    /// Pretty JSON with every option, absent ones as `null`
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// More than one explicit GPU id. `[-1]` means "all available".
    pub fn distributed(&self) -> bool {
        self.gpus.len() > 1
    }

    /// One info line per option group
    pub fn log_summary(&self) {
        info!("--- MIST configuration ---");
        info!(
            "Runtime:    exec_mode={} data={} gpus=[{}] workers={} port={} seed={} tta={}",
            self.exec_mode,
            or_unset(self.data.as_ref().map(|p| p.display())),
            join(&self.gpus),
            self.num_workers,
            self.master_port,
            self.seed_val,
            self.tta
        );
        info!(
            "Output:     results={} numpy={} amp={}",
            or_unset(self.results.as_ref().map(|p| p.display())),
            or_unset(self.numpy.as_ref().map(|p| p.display())),
            self.amp
        );
        info!(
            "Training:   batch={} patch=[{}] max_patch=[{}] lr={} scheduler={} exp_decay={} cosine_first_steps={}",
            self.batch_size,
            self.patch_size.as_deref().map(join).unwrap_or_default(),
            join(&self.max_patch_size),
            self.learning_rate,
            self.lr_scheduler,
            self.exp_decay,
            self.cosine_first_steps
        );
        info!(
            "Optimizer:  {} clip_norm={} clip_norm_max={}",
            self.optimizer, self.clip_norm, self.clip_norm_max
        );
        info!(
            "Network:    model={} res_block={} pocket={} depth={} deep_supervision={} heads={}",
            self.model,
            self.use_res_block,
            self.pocket,
            or_unset(self.depth),
            self.deep_supervision,
            self.deep_supervision_heads
        );
        info!(
            "Regularize: vae={}({}) l2={}({}) l1={}({})",
            self.vae_reg,
            self.vae_penalty,
            self.l2_reg,
            self.l2_penalty,
            self.l1_reg,
            self.l1_penalty
        );
        info!(
            "Data:       oversampling={} no_preprocess={} n4={} config_class_weights={} class_weights=[{}]",
            self.oversampling,
            self.no_preprocess,
            self.use_n4_bias_correction,
            self.use_config_class_weights,
            self.class_weights.as_deref().map(join).unwrap_or_default()
        );
        info!(
            "Inference:  loss={} sw_overlap={} blend={} no_postprocess={}",
            self.loss, self.sw_overlap, self.blend_mode, self.no_postprocess
        );
        info!(
            "Validation: nfolds={} folds=[{}] epochs={} steps_per_epoch={} native_spacing={} output_std={}",
            self.nfolds,
            join(&self.folds),
            self.epochs,
            or_unset(self.steps_per_epoch),
            self.use_native_spacing,
            self.output_std
        );
        if self.distributed() {
            info!(
                "Multi-GPU run on {} devices (master port {})",
                self.gpus.len(),
                self.master_port
            );
        }
    }
}
