//! The roster report: every record with its effective status, expiry
//! countdowns, and quota standing as of the session's reference date.

use clap::Args;

use tfa_registry::quota;
use tfa_state::Licensed;

use crate::session::Session;

/// Print the full roster with effective statuses and advisories.
#[derive(Args, Debug)]
pub struct RosterArgs {
    /// Also sweep for expired records and queue their notifications.
    #[arg(long)]
    pub sweep: bool,
}

pub fn run(session: &mut Session, args: RosterArgs) -> anyhow::Result<()> {
    let on = session.on;
    println!("roster as of {on}");

    println!("fishers:");
    for profile in session.registry.profiles() {
        let license = match &profile.license {
            Some(license) => format!("licensed through {}", license.expires_on),
            None => "no license issued".to_string(),
        };
        println!("  {} [{}] {} ({})", profile.name, profile.status, license, profile.id);
        if let Some(license) = &profile.license {
            if let Some(warning) = tfa_state::expiry_warning(license.expires_on, on) {
                println!("    renewal due in {} days", warning.days_remaining);
            }
        }
    }

    println!("boats:");
    for boat in session.registry.boats() {
        println!(
            "  {} {} [{}] licensed through {} ({})",
            boat.registration,
            boat.name,
            boat.effective_status(on),
            boat.license.expires_on,
            boat.id
        );
        if let Some(warning) = boat.expiry_warning(on) {
            println!("    license expires in {} days", warning.days_remaining);
        }
        if let Some(warning) = boat.insurance_warning(on) {
            println!("    insurance expires in {} days", warning.days_remaining);
        }
    }

    println!("permits:");
    for permit in session.registry.permits() {
        println!(
            "  {} {} in {} [{}] {} of {} lbs used ({})",
            permit.season,
            permit.fish_type,
            permit.area,
            permit.effective_status(on),
            permit.quota_used,
            permit.quota_allowed,
            permit.id
        );
        if let Ok(percentage) = quota::usage_percentage(permit) {
            if percentage > quota::NEAR_LIMIT_PERCENT {
                println!("    approaching quota limit: {percentage}% used");
            }
        }
    }

    if args.sweep {
        let expired = session.registry.sweep_expired(on);
        tracing::info!(expired, "expiry sweep complete");
    }
    session.report_events();
    Ok(())
}
