use crate::{context::Context, script::Script, stage::Stage};
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// Scripts whose context the stage is exercised under.
    fn scripts() -> &'static [Script] {
        &[Script::Arabic, Script::Latin]
    }

    /// General test samples (may or may not trigger changes)
    fn samples(_script: Script) -> &'static [&'static str] {
        &["Hello World 123", " مُحَمَّد ", "TEST", ""]
    }

    /// Samples that must pass through unchanged and without allocating.
    fn should_pass_through(_script: Script) -> &'static [&'static str] {
        &[""]
    }

    /// Input/output pairs that verify correct transformations.
    ///
    /// Return empty slice if stage doesn't have predictable transformations.
    fn should_transform(_script: Script) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Whether `apply(apply(x)) == apply(x)` holds for every sample.
    fn idempotent() -> bool {
        true
    }
}

/// Assert that a stage satisfies the universal stage contracts.
///
/// 1. `zero_copy_when_no_changes` → no allocation when input == output
/// 2. `stage_is_idempotent` → applying twice yields same result as once
/// 3. `needs_apply_is_accurate` → correctly predicts whether apply() would change text
/// 4. `transforms_as_declared` → declared input/output pairs hold
/// 5. `handles_empty_string` → graceful on the empty name
/// 6. `no_panic_on_mixed_scripts` → survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_is_accurate(&$stage);
        $crate::testing::stage_contract::transforms_as_declared(&$stage);
        $crate::testing::stage_contract::handles_empty_string(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
    };
}

// ============================================================================
// Universal contract tests
// ============================================================================

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    for &script in S::scripts() {
        let ctx = Context::new(script);

        for &input in S::samples(script) {
            let text = Cow::Borrowed(input);
            if stage.needs_apply(&text, &ctx) {
                let out = stage.apply(text, &ctx);
                assert_ne!(
                    out.as_ref(),
                    input,
                    "stage `{}` claimed work but returned its input ({script:?}, `{input}`)",
                    stage.name()
                );
            } else {
                let out = stage.apply(text, &ctx);
                assert!(
                    matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)),
                    "zero-copy violated for stage `{}` ({script:?}, `{input}`)",
                    stage.name()
                );
            }
        }

        for &pass_through in S::should_pass_through(script) {
            assert!(
                !stage.needs_apply(pass_through, &ctx),
                "stage `{}` wants to touch pass-through sample `{pass_through}` ({script:?})",
                stage.name()
            );
            let out = stage.apply(Cow::Borrowed(pass_through), &ctx);
            assert!(
                matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, pass_through)),
                "zero-copy violated on pass-through sample `{pass_through}` ({script:?})"
            );
        }
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    if !S::idempotent() {
        return;
    }
    for &script in S::scripts() {
        let ctx = Context::new(script);
        for &input in S::samples(script) {
            let once = stage.apply(Cow::Borrowed(input), &ctx).into_owned();
            assert!(
                !stage.needs_apply(&once, &ctx),
                "needs_apply() fires on already-processed output of `{}` ({script:?}, `{input}`)",
                stage.name()
            );
            let twice = stage.apply(Cow::Borrowed(once.as_str()), &ctx);
            assert_eq!(
                once,
                twice.as_ref(),
                "apply() not idempotent for `{}` in {script:?} on `{input}`",
                stage.name()
            );
        }
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: &S) {
    for &script in S::scripts() {
        let ctx = Context::new(script);
        let inputs = S::samples(script)
            .iter()
            .chain(S::should_pass_through(script))
            .chain(S::should_transform(script).iter().map(|(input, _)| input));
        for &input in inputs {
            check_accuracy(stage, input, &ctx);
        }
    }
}

fn check_accuracy<S: Stage>(stage: &S, input: &str, ctx: &Context) {
    let predicted = stage.needs_apply(input, ctx);
    // Owned input so that the comparison is purely semantic
    let output = stage.apply(Cow::Owned(input.to_owned()), ctx);
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` in {script:?} on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
        script = ctx.script
    );
}

pub fn transforms_as_declared<S: StageTestConfig>(stage: &S) {
    for &script in S::scripts() {
        let ctx = Context::new(script);
        for &(input, expected) in S::should_transform(script) {
            let out = stage.apply(Cow::Borrowed(input), &ctx);
            assert_eq!(
                out.as_ref(),
                expected,
                "stage `{}` in {script:?} on `{input}`",
                stage.name()
            );
        }
    }
}

pub fn handles_empty_string<S: StageTestConfig>(stage: &S) {
    for &script in S::scripts() {
        let ctx = Context::new(script);
        assert!(!stage.needs_apply("", &ctx));
        assert_eq!(stage.apply(Cow::Borrowed(""), &ctx), "");
    }
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    for &script in S::scripts() {
        let ctx = Context::new(script);
        let _ = stage.apply(
            Cow::Borrowed("  Al-Sayed عَبْد الرَّحْمٰن 世界 русский\t\u{00A0}Türkçe ßẞ  "),
            &ctx,
        );
    }
}
