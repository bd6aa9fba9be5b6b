//! Interactive shell: a login prompt and a home view, switched on the
//! session's authenticated flag.
//!
//! This is a deliberately thin layer - all auth decisions live in
//! `gatepass::auth::Session`; the shell only prompts, displays, and relays
//! error messages.

use std::io::{self, Write};

use anyhow::Result;

use gatepass::auth::Session;
use gatepass::models::User;

/// Email prefill for the login prompt.
const EMAIL_ENV_VAR: &str = "GATEPASS_EMAIL";

pub struct App {
    session: Session,
    quitting: bool,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            quitting: false,
        }
    }

    /// Drive the two screens until the user quits.
    pub async fn run(&mut self) -> Result<()> {
        while !self.quitting {
            if self.session.is_authenticated() {
                self.home_screen().await?;
            } else {
                self.login_screen().await?;
            }
        }
        Ok(())
    }

    async fn login_screen(&mut self) -> Result<()> {
        println!("\n=== Gatepass Login ===\n");
        println!("Enter your email, or type 'register' or 'quit'.\n");

        let default_email = std::env::var(EMAIL_ENV_VAR).unwrap_or_default();
        let email = if default_email.is_empty() {
            prompt("Email: ")?
        } else {
            let input = prompt(&format!("Email [{}]: ", default_email))?;
            if input.is_empty() {
                default_email
            } else {
                input
            }
        };

        match email.as_str() {
            "quit" => {
                self.quitting = true;
                return Ok(());
            }
            "register" => return self.register_screen().await,
            "" => return Ok(()),
            _ => {}
        }

        let password = rpassword::prompt_password("Password: ")?;

        println!("\nSigning in...");
        match self.session.login(&email, &password).await {
            Ok(()) => println!("Login successful!\n"),
            Err(err) => println!("Login failed: {}\n", err),
        }
        Ok(())
    }

    async fn register_screen(&mut self) -> Result<()> {
        println!("\n=== Create account ===\n");

        let email = prompt("Email: ")?;
        let username = prompt("Username: ")?;
        let full_name = prompt("Full name: ")?;
        let password = rpassword::prompt_password("Password: ")?;

        match self
            .session
            .api()
            .register(&email, &username, &full_name, &password)
            .await
        {
            Ok(user) => println!(
                "\nAccount created for {}. You can sign in now.\n",
                user.display_name()
            ),
            Err(err) => println!("\nRegistration failed: {}\n", err),
        }
        Ok(())
    }

    async fn home_screen(&mut self) -> Result<()> {
        if let Some(user) = self.session.user() {
            print_profile(user);
        }

        let command = prompt("home> ")?;
        match command.as_str() {
            "refresh" => {
                if let Err(err) = self.session.refresh_profile().await {
                    println!("Session expired: {}\n", err);
                }
            }
            "logout" => {
                self.session.logout();
                println!("Logged out.\n");
            }
            "quit" | "q" => self.quitting = true,
            "" => {}
            other => println!("Unknown command '{}'. Commands: refresh, logout, quit.\n", other),
        }
        Ok(())
    }
}

fn print_profile(user: &User) {
    println!("\nHello, {}!", user.display_name());
    println!("  username: {}", user.username);
    println!("  email:    {}", user.email);
    println!("  active:   {}", if user.is_active { "yes" } else { "no" });
    println!("  joined:   {}", user.created_at);
    println!();
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
