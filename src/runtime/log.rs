//! Ledger log output: Anchor-style event records, return data and error
//! messages.

use pinocchio::{ProgramResult, error::ProgramError};

use crate::{
    errors::HackathonError,
    events::{RegistryEvent, EVENT_MAX_LEN},
};

pub fn emit_event(event: &RegistryEvent) -> ProgramResult {
    let mut buffer = [0u8; EVENT_MAX_LEN];
    let len = event
        .write_to(&mut buffer)
        .map_err(|_| ProgramError::InvalidAccountData)?;
    log_data(&buffer[..len]);
    Ok(())
}

/// Publishes the id assigned by `create_hackathon` as transaction return data.
pub fn publish_hackathon_id(id: u32) {
    set_return_data(&id.to_le_bytes());
}

/// Logs the human-readable message behind a domain error code.
pub fn log_error(err: &ProgramError) {
    if let ProgramError::Custom(code) = err {
        if let Some(err) = HackathonError::from_code(*code) {
            log_message(err.message());
        }
    }
}

#[cfg(target_os = "solana")]
fn log_data(bytes: &[u8]) {
    let segments: [&[u8]; 1] = [bytes];
    unsafe {
        solana_define_syscall::definitions::sol_log_data(
            segments.as_ptr() as *const u8,
            segments.len() as u64,
        );
    }
}

#[cfg(target_os = "solana")]
fn set_return_data(bytes: &[u8]) {
    unsafe {
        solana_define_syscall::definitions::sol_set_return_data(bytes.as_ptr(), bytes.len() as u64);
    }
}

#[cfg(target_os = "solana")]
fn log_message(message: &str) {
    unsafe {
        solana_define_syscall::definitions::sol_log_(message.as_ptr(), message.len() as u64);
    }
}

#[cfg(all(not(target_os = "solana"), not(test)))]
fn log_data(_bytes: &[u8]) {}

#[cfg(all(not(target_os = "solana"), not(test)))]
fn set_return_data(_bytes: &[u8]) {}

#[cfg(all(not(target_os = "solana"), not(test)))]
fn log_message(_message: &str) {}

#[cfg(all(not(target_os = "solana"), test))]
pub(crate) use capture::{take_logged_data, take_logged_messages, take_return_data};

#[cfg(all(not(target_os = "solana"), test))]
use capture::{log_data, log_message, set_return_data};

#[cfg(all(not(target_os = "solana"), test))]
mod capture {
    use std::cell::RefCell;

    thread_local! {
        static DATA: RefCell<Vec<Vec<u8>>> = const { RefCell::new(Vec::new()) };
        static MESSAGES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
        static RETURN_DATA: RefCell<Option<Vec<u8>>> = const { RefCell::new(None) };
    }

    pub fn log_data(bytes: &[u8]) {
        DATA.with(|data| data.borrow_mut().push(bytes.to_vec()));
    }

    pub fn log_message(message: &str) {
        MESSAGES.with(|messages| messages.borrow_mut().push(message.to_string()));
    }

    pub fn set_return_data(bytes: &[u8]) {
        RETURN_DATA.with(|slot| *slot.borrow_mut() = Some(bytes.to_vec()));
    }

    pub fn take_logged_data() -> Vec<Vec<u8>> {
        DATA.with(|data| data.take())
    }

    pub fn take_logged_messages() -> Vec<String> {
        MESSAGES.with(|messages| messages.take())
    }

    pub fn take_return_data() -> Option<Vec<u8>> {
        RETURN_DATA.with(|slot| slot.take())
    }
}
