//! One handler per subcommand.
//!
//! Handlers print their own notices and return the exit code. `Err` is kept
//! for failures outside the domain: stdin, output encoding, local storage.

use std::process::ExitCode;

use anyhow::Context;
use payday_access::{gate_tips, vip_section_locked, GatedTip};
use payday_admin::{AdminMenu, TipBoard};
use payday_client::payment::{whatsapp_link, FixedPhone};
use payday_client::{
    AuthGateway, PaymentError, PaymentInitiator, PhonePrompt, ProfileDirectory, TipsFeed,
};
use payday_core::catalog::{find_plan, PLANS};
use payday_core::{Notice, PaydayErrorCode};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::debug;

use crate::app::App;
use crate::cli::Commands;
use crate::prompt::{read_line, StdinPrompt};
use crate::render;

pub fn dispatch(app: &App, command: Commands) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Login { email, password } => login(app, &email, password),
        Commands::Signup {
            name,
            email,
            password,
            confirm_password,
        } => signup(app, &name, &email, password, confirm_password),
        Commands::Logout => logout(app),
        Commands::Whoami => whoami(app),
        Commands::Plans => plans(app),
        Commands::Tips => tips(app),
        Commands::Subscribe { plan, phone } => subscribe(app, &plan, phone),
        Commands::Admin => admin(app),
    }
}

fn login(app: &App, email: &str, password: Option<String>) -> anyhow::Result<ExitCode> {
    let password = password_or_prompt(password, "Password: ")?;
    let gateway = AuthGateway::new(app.api.clone(), app.session.clone());
    match gateway.login(email, &password) {
        Ok(outcome) => {
            say(app, &outcome.notice);
            print_output(app, &outcome.user, render::user(&outcome.user))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            debug!(code = e.error_code(), "Login failed");
            shout(&e.notice());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn signup(
    app: &App,
    name: &str,
    email: &str,
    password: Option<String>,
    confirm_password: Option<String>,
) -> anyhow::Result<ExitCode> {
    let password = password_or_prompt(password, "Password: ")?;
    let confirm = confirm_password.unwrap_or_else(|| password.clone());
    let gateway = AuthGateway::new(app.api.clone(), app.session.clone());
    match gateway.signup(name, email, &password, &confirm) {
        Ok(outcome) => {
            say(app, &outcome.notice);
            print_output(app, &outcome.user, render::user(&outcome.user))?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            debug!(code = e.error_code(), "Signup failed");
            shout(&e.notice());
            Ok(ExitCode::FAILURE)
        }
    }
}

fn logout(app: &App) -> anyhow::Result<ExitCode> {
    app.session.logout().context("cannot clear stored session")?;
    say(app, &Notice::info("Signed out."));
    Ok(ExitCode::SUCCESS)
}

fn whoami(app: &App) -> anyhow::Result<ExitCode> {
    let user = app.session.current();
    let text = match &user {
        Some(user) => render::user(user),
        None => "Not signed in.".to_string(),
    };
    print_output(app, &user, text)?;
    Ok(ExitCode::SUCCESS)
}

fn plans(app: &App) -> anyhow::Result<ExitCode> {
    if app.json {
        let plans: Vec<Value> = PLANS
            .iter()
            .map(|plan| {
                json!({
                    "plan": plan,
                    "amount": plan.amount(),
                    "whatsapp": whatsapp_link(&app.config.contact, plan),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&plans)?);
    } else {
        for plan in &PLANS {
            println!("{}", render::plan(plan, &whatsapp_link(&app.config.contact, plan)));
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn tips(app: &App) -> anyhow::Result<ExitCode> {
    let feed = TipsFeed::new(app.api.clone(), app.session.clone());
    let sections = match feed.fetch() {
        Ok(sections) => sections,
        Err(e) => {
            debug!(code = e.error_code(), "Tips unavailable");
            shout(&e.notice());
            return Ok(ExitCode::FAILURE);
        }
    };
    let user = app.session.current();
    if app.json {
        let body = json!({
            "free": gate_tips(user.as_ref(), &sections.free).iter().map(gated_json).collect::<Vec<_>>(),
            "vip": gate_tips(user.as_ref(), &sections.vip).iter().map(gated_json).collect::<Vec<_>>(),
            "vipLocked": vip_section_locked(user.as_ref()),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        print!("{}", render::tips(user.as_ref(), &sections));
    }
    Ok(ExitCode::SUCCESS)
}

/// Blurred tips carry only their gate, never their content.
fn gated_json(gated: &GatedTip<'_>) -> Value {
    let v = gated.visibility;
    if v.is_blurred() {
        json!({ "visibility": v, "isVip": gated.tip.is_vip, "prompt": v.prompt() })
    } else {
        json!({ "visibility": v, "tip": gated.tip })
    }
}

fn subscribe(app: &App, plan_name: &str, phone: Option<String>) -> anyhow::Result<ExitCode> {
    let Some(plan) = find_plan(plan_name) else {
        let names: Vec<&str> = PLANS.iter().map(|p| p.name).collect();
        shout(&Notice::error(format!(
            "Unknown plan '{plan_name}'. Choose one of: {}",
            names.join(", ")
        )));
        return Ok(ExitCode::FAILURE);
    };

    let payments = PaymentInitiator::new(app.api.clone(), app.session.clone(), &app.config.payment);
    let mut prompt: Box<dyn PhonePrompt> = match phone {
        Some(phone) => Box::new(FixedPhone(Some(phone))),
        None => Box::new(StdinPrompt),
    };
    match payments.initiate(plan, &mut *prompt) {
        Ok(outcome) => {
            say(app, &outcome.notice);
            if app.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "request": outcome.request,
                        "receipt": outcome.receipt,
                    }))?
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(PaymentError::Cancelled) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            debug!(code = e.error_code(), plan = plan.name, "Payment not started");
            if let Some(notice) = e.notice() {
                shout(&notice);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn admin(app: &App) -> anyhow::Result<ExitCode> {
    let menu = AdminMenu::new(&app.config.admin)
        .with_profiles(ProfileDirectory::new(app.api.clone(), app.session.clone()));
    let user = app.session.current();
    let allowed = match menu.is_visible(user.as_ref()) {
        Ok(allowed) => allowed,
        Err(e) => {
            debug!(code = e.error_code(), "Admin check failed");
            shout(&Notice::error(e.to_string()));
            return Ok(ExitCode::FAILURE);
        }
    };
    if !allowed {
        shout(&Notice::error("Admin access required."));
        return Ok(ExitCode::FAILURE);
    }

    let token = app.session.token();
    let fetched = match app.api.tips(token.as_deref()) {
        Ok(tips) => tips,
        Err(e) => {
            shout(&Notice::error(e.user_message()));
            return Ok(ExitCode::FAILURE);
        }
    };
    let board = TipBoard::from_tips(fetched);
    let stats = board.stats();
    if app.json {
        let body = json!({ "stats": stats, "tips": board.tips() });
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(ExitCode::SUCCESS);
    }
    println!("Admin Panel\n");
    print!("{}", render::board_stats(&stats));
    for entry in board.tips() {
        println!("\n{}", render::tip_card(&entry.tip, false, None).trim_end());
        println!("    id: {}", entry.id);
    }
    Ok(ExitCode::SUCCESS)
}

fn password_or_prompt(given: Option<String>, label: &str) -> anyhow::Result<String> {
    match given {
        Some(password) => Ok(password),
        None => read_line(label)
            .context("cannot read password")?
            .context("no password given"),
    }
}

fn print_output<T: Serialize>(app: &App, value: &T, text: String) -> anyhow::Result<()> {
    if app.json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{text}");
    }
    Ok(())
}

/// Success and info notices go to stderr in JSON mode so stdout stays parseable.
fn say(app: &App, notice: &Notice) {
    if app.json {
        eprintln!("{}", render::notice(notice));
    } else {
        println!("{}", render::notice(notice));
    }
}

fn shout(notice: &Notice) {
    eprintln!("{}", render::notice(notice));
}
