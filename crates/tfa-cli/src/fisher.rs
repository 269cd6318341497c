//! Fisher registration and standing management.

use clap::{Args, Subcommand};

use tfa_core::FisherId;
use tfa_registry::FisherApplication;

use crate::session::{parse_uuid, Session};

/// Fisher registration and standing management.
#[derive(Args, Debug)]
pub struct FisherArgs {
    #[command(subcommand)]
    pub command: FisherCommand,
}

#[derive(Subcommand, Debug)]
pub enum FisherCommand {
    /// Submit a new fisher registration.
    Register {
        /// Full legal name.
        #[arg(long)]
        name: String,
        /// Date of birth, ISO `YYYY-MM-DD`.
        #[arg(long)]
        date_of_birth: String,
        /// Email address.
        #[arg(long)]
        email: String,
        /// Phone number.
        #[arg(long)]
        phone: String,
        /// Residential address.
        #[arg(long)]
        address: String,
        /// Emergency contact name.
        #[arg(long)]
        emergency_contact_name: String,
        /// Emergency contact phone.
        #[arg(long)]
        emergency_contact_phone: String,
    },
    /// Approve a pending registration and issue the personal license.
    Approve {
        /// Fisher id.
        id: String,
    },
    /// Suspend an active fisher.
    Suspend {
        /// Fisher id.
        id: String,
    },
    /// Reinstate a suspended fisher.
    Reinstate {
        /// Fisher id.
        id: String,
    },
}

pub fn run(session: &mut Session, args: FisherArgs) -> anyhow::Result<()> {
    match args.command {
        FisherCommand::Register {
            name,
            date_of_birth,
            email,
            phone,
            address,
            emergency_contact_name,
            emergency_contact_phone,
        } => {
            let application = FisherApplication {
                name,
                date_of_birth,
                email,
                phone,
                address,
                emergency_contact_name,
                emergency_contact_phone,
            };
            let profile =
                session
                    .office
                    .submit_fisher(&mut session.registry, application, session.on)?;
            println!("registered {} ({})", profile.name, profile.id);
        }
        FisherCommand::Approve { id } => {
            let id = FisherId(parse_uuid(&id)?);
            let on = session.on;
            let profile = session.registry.update_profile(id, |p| p.approve(on))?;
            println!("approved {} ({})", profile.name, profile.id);
        }
        FisherCommand::Suspend { id } => {
            let id = FisherId(parse_uuid(&id)?);
            let profile = session.registry.update_profile(id, |p| p.suspend())?;
            println!("suspended {} ({})", profile.name, profile.id);
        }
        FisherCommand::Reinstate { id } => {
            let id = FisherId(parse_uuid(&id)?);
            let profile = session.registry.update_profile(id, |p| p.reinstate())?;
            println!("reinstated {} ({})", profile.name, profile.id);
        }
    }
    session.report_events();
    Ok(())
}
