//! Command definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Payday Picks - football tips and VIP subscriptions
#[derive(Parser, Debug)]
#[command(name = "payday")]
#[command(about = "Football tips and VIP subscriptions", long_about = None)]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Keep the session in memory only, for this run
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with email and password
    Login {
        #[arg(long)]
        email: String,
        /// Prefer omitting this and typing the password at the prompt: a
        /// value given here shows up in the process list
        #[arg(long, value_name = "PASSWORD")]
        password: Option<String>,
    },

    /// Create an account and sign in
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Prefer omitting this and typing the password at the prompt: a
        /// value given here shows up in the process list
        #[arg(long, value_name = "PASSWORD")]
        password: Option<String>,
        /// Defaults to the password
        #[arg(long, value_name = "PASSWORD")]
        confirm_password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// List subscription plans
    Plans,

    /// Show today's tips
    Tips,

    /// Request an M-Pesa STK push for a plan
    Subscribe {
        /// Plan name or handle: weekly, monthly, yearly
        plan: String,
        /// Phone number to charge; prompted for when omitted
        #[arg(long)]
        phone: Option<String>,
    },

    /// Admin panel: tip board overview and stats (read-only)
    Admin,
}
