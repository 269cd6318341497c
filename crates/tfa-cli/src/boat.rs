//! Boat registration and license approval.

use clap::{Args, Subcommand};

use tfa_core::BoatId;
use tfa_registry::BoatApplication;

use crate::session::{parse_uuid, Session};

/// Boat registration and license approval.
#[derive(Args, Debug)]
pub struct BoatArgs {
    #[command(subcommand)]
    pub command: BoatCommand,
}

#[derive(Subcommand, Debug)]
pub enum BoatCommand {
    /// Submit a new boat registration.
    Register {
        /// Vessel name.
        #[arg(long)]
        name: String,
        /// State-issued registration number, e.g. `FL-9876-AB`.
        #[arg(long)]
        registration: String,
        /// Vessel type.
        #[arg(long)]
        vessel_type: String,
        /// Hull length in feet.
        #[arg(long)]
        length_ft: i64,
        /// Home port.
        #[arg(long)]
        home_port: String,
        /// Insurance expiry date, ISO `YYYY-MM-DD`.
        #[arg(long)]
        insurance_expires_on: String,
    },
    /// Approve a pending registration.
    Approve {
        /// Boat id.
        id: String,
    },
    /// Remove a boat from the registry.
    Remove {
        /// Boat id.
        id: String,
    },
}

pub fn run(session: &mut Session, args: BoatArgs) -> anyhow::Result<()> {
    match args.command {
        BoatCommand::Register {
            name,
            registration,
            vessel_type,
            length_ft,
            home_port,
            insurance_expires_on,
        } => {
            let application = BoatApplication {
                name,
                registration,
                vessel_type,
                length_ft,
                home_port,
                insurance_expires_on,
            };
            let boat = session
                .office
                .submit_boat(&mut session.registry, application, session.on)?;
            println!(
                "registered {} ({}) licensed through {}",
                boat.name, boat.registration, boat.license.expires_on
            );
        }
        BoatCommand::Approve { id } => {
            let id = BoatId(parse_uuid(&id)?);
            let on = session.on;
            let boat = session.registry.update_boat(id, |b| b.approve(on))?;
            println!("approved {} ({})", boat.name, boat.registration);
        }
        BoatCommand::Remove { id } => {
            let id = BoatId(parse_uuid(&id)?);
            let boat = session.registry.remove_boat(id)?;
            println!("removed {} ({})", boat.name, boat.registration);
        }
    }
    session.report_events();
    Ok(())
}
