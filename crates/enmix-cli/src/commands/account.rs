use std::path::Path;

use anyhow::{anyhow, Result};
use enmix_cli::cli::AccountCommands;
use enmix_session::{SessionManager, SessionStore};

fn open_manager(store: Option<&Path>) -> Result<SessionManager> {
    let store = match store {
        Some(path) => SessionStore::new(path),
        None => SessionStore::new(
            SessionStore::default_path()
                .ok_or_else(|| anyhow!("unable to determine the session store path"))?,
        ),
    };
    Ok(SessionManager::open(store)?)
}

pub fn handle(command: &AccountCommands) -> Result<()> {
    match command {
        AccountCommands::Register {
            first_name,
            email,
            password,
            confirm,
            store,
        } => {
            let mut manager = open_manager(store.as_deref())?;
            let account = manager.register(first_name, email, password, confirm)?;
            println!("Account created. Welcome, {}!", account.first_name);
            Ok(())
        }
        AccountCommands::Login {
            email,
            password,
            store,
        } => {
            let mut manager = open_manager(store.as_deref())?;
            let account = manager.login(email, password)?;
            println!("Welcome, {}!", account.first_name);
            Ok(())
        }
        AccountCommands::Logout { store } => {
            let mut manager = open_manager(store.as_deref())?;
            manager.logout()?;
            println!("Logged out");
            Ok(())
        }
        AccountCommands::Whoami { store } => {
            let manager = open_manager(store.as_deref())?;
            match manager.current_account() {
                Some(account) => println!("{} <{}>", account.first_name, account.email),
                None => println!("Nobody is logged in"),
            }
            Ok(())
        }
    }
}
