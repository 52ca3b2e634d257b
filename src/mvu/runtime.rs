use log::{debug, warn};
use serde_json::json;

use super::scorecard::{Deps, Msg, ScorecardModel, run_effect, update};
use crate::error::ScorecardError;
use crate::storage::PersistenceGateway;

/// Runs the MVU loop for the scorecard model: seeds with `init_msg` and drains
/// effects.
///
/// A storage failure never undoes in-memory work and never stops the loop;
/// the remaining effects still run, and the first failure is returned once
/// the queue is empty.
///
/// # Errors
///
/// Returns the first `ScorecardError` surfaced by a load or persist effect.
pub async fn run_scorecard<S>(
    model: &mut ScorecardModel,
    init_msg: Msg,
    deps: Deps<'_, S>,
) -> Result<(), ScorecardError>
where
    S: PersistenceGateway + ?Sized,
{
    let mut first_failure: Option<ScorecardError> = None;
    let mut effects = update(model, init_msg);
    while let Some(effect) = effects.pop() {
        debug!(
            "{}",
            json!({"mvu":"effect_start","effect": format!("{effect:?}")})
        );
        let msg = run_effect(effect, model, deps).await;
        debug!("{}", json!({"mvu":"effect_done","msg": format!("{msg:?}")}));

        if let Msg::Failed(e) | Msg::LoadFailed(e) = &msg {
            warn!("{}", json!({"mvu":"effect_failed","error": e.to_string()}));
            first_failure.get_or_insert_with(|| e.clone());
        }

        let next = update(model, msg);
        debug!(
            "{}",
            json!({"mvu":"update","queued_effects": next.iter().map(|x| format!("{x:?}")).collect::<Vec<_>>()})
        );
        effects.extend(next);
    }

    match first_failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
