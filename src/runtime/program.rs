use pinocchio::{
    AccountView, Address, ProgramResult,
    error::ProgramError,
};

use super::{log::log_error, prizes_program, registration_program, registry_program};

#[allow(unexpected_cfgs)]
#[cfg(feature = "bpf-entrypoint")]
mod bpf_entrypoint {
    use pinocchio::entrypoint;

    entrypoint!(super::process_instruction, 16);
}

pub fn process_instruction(
    program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    let result = route(program_id, accounts, instruction_data);
    if let Err(err) = &result {
        log_error(err);
    }
    result
}

fn route(
    program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    match registry_program::process_instruction(program_id, accounts, instruction_data) {
        Ok(()) => Ok(()),
        Err(ProgramError::InvalidInstructionData) => {
            match registration_program::process_instruction(program_id, accounts, instruction_data) {
                Ok(()) => Ok(()),
                Err(ProgramError::InvalidInstructionData) => {
                    prizes_program::process_instruction(program_id, accounts, instruction_data)
                }
                Err(err) => Err(err),
            }
        }
        Err(err) => Err(err),
    }
}
