//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::PasswordPolicy;
use crate::sections::{RULES, denylist_section};
use crate::types::ScoreResult;

/// Delay before an async evaluation runs, so fast typing only evaluates once.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Evaluates a password against the built-in policy.
///
/// Never fails: every string, including the empty one, yields a score in
/// `0..=5` and the feedback for each rule it missed.
pub fn evaluate_password_strength(password: &SecretString) -> ScoreResult {
    evaluate_with_policy(password, PasswordPolicy::builtin())
}

/// Evaluates a password against `policy`.
///
/// A denylisted password scores 0 with a single message and no other rule is
/// run. Otherwise every rule contributes its delta and the total is floored
/// at 0.
pub fn evaluate_with_policy(password: &SecretString, policy: &PasswordPolicy) -> ScoreResult {
    let pwd = password.expose_secret();

    if let Some(reason) = denylist_section(pwd, policy) {
        #[cfg(feature = "tracing")]
        tracing::debug!("password evaluated: denylisted");
        return ScoreResult {
            score: 0,
            feedback: vec![reason.to_string()],
        };
    }

    let chars: Vec<char> = pwd.chars().collect();
    let mut total: i32 = 0;
    let mut feedback = Vec::new();

    for rule in &RULES {
        let (delta, message) = rule.apply(&chars, policy);
        total += delta;
        if let Some(message) = message {
            feedback.push(message.to_string());
        }
    }

    let score = u32::try_from(total).unwrap_or(0);

    #[cfg(feature = "tracing")]
    tracing::debug!(score, suggestions = feedback.len(), "password evaluated");

    ScoreResult { score, feedback }
}

/// Async version that sends the evaluation result via channel.
///
/// Waits [`DEBOUNCE`] first; if `token` is cancelled meanwhile nothing is
/// evaluated and nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreResult>,
) {
    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
