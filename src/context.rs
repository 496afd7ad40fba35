// src/context.rs
// Single source of truth for per-call configuration in hot paths.
// Tiny, Copy, and contains only 'static data.

use crate::{
    script::{Script, ScriptEntry},
    stage::strip_prefixes::PrefixMode,
};

/// Runtime context passed to every normalization stage.
///
/// Contains:
/// - `script`: the branch being normalized (for logging and dispatch)
/// - `entry`: the script's static rule tables, used by every stage
/// - `prefix_mode`: how prefix tables are walked
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub script: Script,
    pub entry: &'static ScriptEntry,
    pub prefix_mode: PrefixMode,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new(Script::Latin)
    }
}

impl Context {
    #[inline(always)]
    pub fn new(script: Script) -> Self {
        Self::with_prefix_mode(script, PrefixMode::default())
    }

    #[inline(always)]
    pub fn with_prefix_mode(script: Script, prefix_mode: PrefixMode) -> Self {
        Self {
            script,
            entry: script.entry(),
            prefix_mode,
        }
    }
}
