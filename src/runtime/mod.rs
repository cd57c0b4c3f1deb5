pub mod accounts;
pub mod log;
pub mod prizes_program;
pub mod program;
pub mod registration_program;
pub mod registry_program;

#[cfg(test)]
pub(crate) mod test_support;
