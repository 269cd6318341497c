//! Seasonal permit intake, review, and quota recording.

use clap::{Args, Subcommand};

use tfa_core::PermitId;
use tfa_registry::PermitApplication;

use crate::session::{parse_uuid, Session};

/// Seasonal permit intake, review, and quota recording.
#[derive(Args, Debug)]
pub struct PermitArgs {
    #[command(subcommand)]
    pub command: PermitCommand,
}

#[derive(Subcommand, Debug)]
pub enum PermitCommand {
    /// Submit a seasonal permit application.
    Apply {
        /// Season label from the catalog, e.g. `Fall 2025`.
        #[arg(long)]
        season: String,
        /// Species applied for.
        #[arg(long)]
        fish_type: String,
        /// Fishing area applied for.
        #[arg(long)]
        area: String,
        /// Requested catch allowance in pounds.
        #[arg(long)]
        quota: i64,
    },
    /// Approve a pending application.
    Approve {
        /// Permit id.
        id: String,
    },
    /// Deny a pending application.
    Deny {
        /// Permit id.
        id: String,
    },
    /// Record catch against a permit's quota.
    Usage {
        /// Permit id.
        id: String,
        /// Amount caught, in pounds.
        amount: u32,
    },
}

pub fn run(session: &mut Session, args: PermitArgs) -> anyhow::Result<()> {
    match args.command {
        PermitCommand::Apply {
            season,
            fish_type,
            area,
            quota,
        } => {
            let application = PermitApplication {
                season,
                fish_type,
                area,
                quota_requested: quota,
            };
            let permit =
                session
                    .office
                    .submit_permit(&mut session.registry, application, session.on)?;
            println!(
                "applied for {} in {} for {}, window {} to {} ({})",
                permit.fish_type, permit.area, permit.season, permit.starts_on, permit.ends_on,
                permit.id
            );
        }
        PermitCommand::Approve { id } => {
            let id = PermitId(parse_uuid(&id)?);
            let on = session.on;
            let permit = session.registry.update_permit(id, |p| p.approve(on))?;
            println!("approved {} permit {}", permit.season, permit.id);
        }
        PermitCommand::Deny { id } => {
            let id = PermitId(parse_uuid(&id)?);
            let on = session.on;
            let permit = session.registry.update_permit(id, |p| p.deny(on))?;
            println!("denied {} permit {}", permit.season, permit.id);
        }
        PermitCommand::Usage { id, amount } => {
            let id = PermitId(parse_uuid(&id)?);
            let remaining = session.registry.record_usage(id, amount)?;
            println!("recorded {amount} lbs, {remaining} lbs remaining");
        }
    }
    session.report_events();
    Ok(())
}
