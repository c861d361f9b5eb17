//! Optimization pipeline — the two generation calls, in order.
//!
//! Flow: build optimize prompt → generate → build analysis prompt (over the
//! optimized text) → generate. Strictly sequential: the analysis call depends
//! on the optimization result, so there is nothing to dispatch in parallel.
//! A failed call aborts the pipeline; the second call is never attempted
//! after the first fails.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::studio::prompts::{
    build_analysis_prompt, build_optimize_prompt, ANALYSIS_SYSTEM, OPTIMIZE_SYSTEM,
};

/// Output of one end-to-end pipeline run.
#[derive(Debug, Clone)]
pub struct StudioOutcome {
    pub optimized_text: String,
    pub analysis: String,
}

/// Runs the full optimize-then-analyze pipeline over extracted resume text.
///
/// Exactly two generation calls per invocation. Both prompts interpolate the
/// target role verbatim — an empty role is the generation service's problem,
/// not ours.
pub async fn run_pipeline(
    llm: &dyn TextGenerator,
    job_role: &str,
    resume_text: &str,
) -> Result<StudioOutcome, AppError> {
    let optimize_prompt = build_optimize_prompt(job_role, resume_text);
    let optimized_text = llm
        .generate(&optimize_prompt, OPTIMIZE_SYSTEM)
        .await
        .map_err(|e| AppError::Generation(format!("resume optimization failed: {e}")))?;
    info!(chars = optimized_text.len(), "optimization call complete");

    let analysis_prompt = build_analysis_prompt(job_role, &optimized_text);
    let analysis = llm
        .generate(&analysis_prompt, ANALYSIS_SYSTEM)
        .await
        .map_err(|e| AppError::Generation(format!("resume analysis failed: {e}")))?;
    info!(chars = analysis.len(), "analysis call complete");

    Ok(StudioOutcome {
        optimized_text,
        analysis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Scripted generator: pops one canned result per call and records the
    /// prompts it was given.
    struct ScriptedGenerator {
        script: Mutex<VecDeque<Result<String, LlmError>>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedGenerator {
        fn new(script: Vec<Result<String, LlmError>>) -> Self {
            Self {
                script: Mutex::new(script.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn recorded_calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedGenerator {
        async fn generate(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
            self.calls.lock().unwrap().push(prompt.to_string());
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .expect("generator called more times than scripted")
        }
    }

    #[tokio::test]
    async fn test_pipeline_makes_exactly_two_sequential_calls() {
        let llm = ScriptedGenerator::new(vec![
            Ok("OPTIMIZED RESUME".to_string()),
            Ok("ATS score: 92".to_string()),
        ]);

        let outcome = run_pipeline(&llm, "Backend Engineer", "original resume")
            .await
            .unwrap();

        assert_eq!(outcome.optimized_text, "OPTIMIZED RESUME");
        assert_eq!(outcome.analysis, "ATS score: 92");

        let calls = llm.recorded_calls();
        assert_eq!(calls.len(), 2, "pipeline must make exactly two calls");
        assert!(
            calls[0].contains("original resume"),
            "first call carries the extracted resume text"
        );
    }

    #[tokio::test]
    async fn test_analysis_prompt_uses_optimized_text() {
        let llm = ScriptedGenerator::new(vec![
            Ok("THE REWRITTEN RESUME".to_string()),
            Ok("report".to_string()),
        ]);

        run_pipeline(&llm, "SRE", "the original upload")
            .await
            .unwrap();

        let calls = llm.recorded_calls();
        assert!(
            calls[1].contains("THE REWRITTEN RESUME"),
            "analysis must run over the optimized text"
        );
        assert!(
            !calls[1].contains("the original upload"),
            "analysis must not see the original text"
        );
    }

    #[tokio::test]
    async fn test_first_call_failure_skips_analysis_call() {
        let llm = ScriptedGenerator::new(vec![Err(LlmError::Api {
            status: 503,
            message: "unavailable".to_string(),
        })]);

        let result = run_pipeline(&llm, "role", "resume").await;

        assert!(
            matches!(result, Err(AppError::Generation(_))),
            "a failed optimization call surfaces one generation error"
        );
        assert_eq!(
            llm.recorded_calls().len(),
            1,
            "the analysis call must never be made after the first call fails"
        );
    }

    #[tokio::test]
    async fn test_second_call_failure_surfaces_generation_error() {
        let llm = ScriptedGenerator::new(vec![
            Ok("optimized".to_string()),
            Err(LlmError::EmptyContent),
        ]);

        let result = run_pipeline(&llm, "role", "resume").await;
        assert!(matches!(result, Err(AppError::Generation(_))));
    }

    #[tokio::test]
    async fn test_empty_role_is_passed_through() {
        let llm = ScriptedGenerator::new(vec![
            Ok("optimized".to_string()),
            Ok("analysis".to_string()),
        ]);

        let outcome = run_pipeline(&llm, "", "resume body").await;
        assert!(outcome.is_ok(), "empty role must not be rejected here");
    }
}
