//! Given steps for project ordering BDD scenarios.

use super::world::ProjectWorld;
use backoffice::api::Backoffice;
use backoffice::config::BackofficeConfig;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given("the seeded backoffice")]
fn the_seeded_backoffice(world: &mut ProjectWorld) -> Result<(), eyre::Report> {
    let backoffice =
        Backoffice::from_config(&BackofficeConfig::default()).wrap_err("load fixtures")?;
    world.backoffice = Some(backoffice);
    world.last_error = None;
    Ok(())
}
