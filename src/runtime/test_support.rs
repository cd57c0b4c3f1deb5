//! Hand-built `AccountView`s for exercising the runtime without a validator.

use core::mem::size_of;
use std::sync::Mutex;

use pinocchio::{
    AccountView, Address,
    account::{NOT_BORROWED, RuntimeAccount},
};

pub const PROGRAM_ID: Address = Address::new_from_array([
    43, 187, 24, 179, 245, 85, 238, 77, 204, 252, 3, 113, 231, 169, 27, 207, 165, 14, 251,
    108, 242, 117, 20, 87, 30, 9, 66, 30, 58, 230, 228, 54,
]);

/// Serializes tests that touch the simulated slot.
pub static TEST_GUARD: Mutex<()> = Mutex::new(());

pub struct TestAccount {
    backing: Vec<u64>,
}

impl TestAccount {
    pub fn new(
        address: [u8; 32],
        owner: Address,
        is_signer: bool,
        is_writable: bool,
        lamports: u64,
        data: &[u8],
    ) -> Self {
        Self::new_with_capacity(address, owner, is_signer, is_writable, lamports, data, data.len())
    }

    /// Leaves room for the account to grow to `data_capacity` bytes, as
    /// freshly created PDAs do.
    pub fn new_with_capacity(
        address: [u8; 32],
        owner: Address,
        is_signer: bool,
        is_writable: bool,
        lamports: u64,
        data: &[u8],
        data_capacity: usize,
    ) -> Self {
        let bytes = size_of::<RuntimeAccount>() + data_capacity.max(data.len());
        let words = bytes.div_ceil(size_of::<u64>());
        let mut backing = vec![0u64; words.max(1)];
        let raw = backing.as_mut_ptr() as *mut RuntimeAccount;

        unsafe {
            (*raw).borrow_state = NOT_BORROWED;
            (*raw).is_signer = u8::from(is_signer);
            (*raw).is_writable = u8::from(is_writable);
            (*raw).executable = 0;
            (*raw).resize_delta = 0;
            (*raw).address = Address::from(address);
            (*raw).owner = owner;
            (*raw).lamports = lamports;
            (*raw).data_len = data.len() as u64;

            let data_ptr = (raw as *mut u8).add(size_of::<RuntimeAccount>());
            core::ptr::copy_nonoverlapping(data.as_ptr(), data_ptr, data.len());
        }

        Self { backing }
    }

    pub fn view(&mut self) -> AccountView {
        unsafe { AccountView::new_unchecked(self.backing.as_mut_ptr() as *mut RuntimeAccount) }
    }

    pub fn data(&self) -> &[u8] {
        let raw = self.backing.as_ptr() as *const RuntimeAccount;
        unsafe {
            core::slice::from_raw_parts(
                (raw as *const u8).add(size_of::<RuntimeAccount>()),
                (*raw).data_len as usize,
            )
        }
    }

    pub fn lamports(&self) -> u64 {
        let raw = self.backing.as_ptr() as *const RuntimeAccount;
        unsafe { (*raw).lamports }
    }

    pub fn is_owned_by(&self, owner: &Address) -> bool {
        let raw = self.backing.as_ptr() as *const RuntimeAccount;
        unsafe { &(*raw).owner == owner }
    }
}
