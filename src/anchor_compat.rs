/// Anchor-compatible discriminators backed by build-time precomputed constants.
///
/// Program builds resolve `instruction_discriminator()`,
/// `account_discriminator()` and `event_discriminator()` to a `match` against
/// compile-time constants, so no SHA-256 runs on chain.
///
/// `#[cfg(test)]` builds keep a `sha2` fallback so test-only names still
/// hash correctly.
mod precomputed {
    include!(concat!(env!("OUT_DIR"), "/discriminators.rs"));
}

pub const ANCHOR_DISCRIMINATOR_LEN: usize = 8;

pub use precomputed::*;

#[inline(always)]
pub fn instruction_discriminator(name: &str) -> [u8; ANCHOR_DISCRIMINATOR_LEN] {
    match name {
        "init_registry"    => precomputed::IX_INIT_REGISTRY,
        "create_hackathon" => precomputed::IX_CREATE_HACKATHON,
        "set_winner_prize" => precomputed::IX_SET_WINNER_PRIZE,
        "register"         => precomputed::IX_REGISTER,
        "announce_winner"  => precomputed::IX_ANNOUNCE_WINNER,
        "deposit"          => precomputed::IX_DEPOSIT,
        #[cfg(test)]
        unknown => runtime_discriminator("global", unknown),
        #[cfg(not(test))]
        _ => [0u8; ANCHOR_DISCRIMINATOR_LEN],
    }
}

#[inline(always)]
pub fn account_discriminator(name: &str) -> [u8; ANCHOR_DISCRIMINATOR_LEN] {
    match name {
        "Registry"    => precomputed::ACCT_REGISTRY,
        "Hackathon"   => precomputed::ACCT_HACKATHON,
        "Participant" => precomputed::ACCT_PARTICIPANT,
        "WinnerPrize" => precomputed::ACCT_WINNERPRIZE,
        #[cfg(test)]
        unknown => runtime_discriminator("account", unknown),
        #[cfg(not(test))]
        _ => [0u8; ANCHOR_DISCRIMINATOR_LEN],
    }
}

#[inline(always)]
pub fn event_discriminator(name: &str) -> [u8; ANCHOR_DISCRIMINATOR_LEN] {
    match name {
        "HackathonCreated"      => precomputed::EVENT_HACKATHONCREATED,
        "ParticipantRegistered" => precomputed::EVENT_PARTICIPANTREGISTERED,
        "WinnerPrizePaid"       => precomputed::EVENT_WINNERPRIZEPAID,
        "CustodyDeposited"      => precomputed::EVENT_CUSTODYDEPOSITED,
        #[cfg(test)]
        unknown => runtime_discriminator("event", unknown),
        #[cfg(not(test))]
        _ => [0u8; ANCHOR_DISCRIMINATOR_LEN],
    }
}

#[cfg(test)]
fn runtime_discriminator(namespace: &str, name: &str) -> [u8; ANCHOR_DISCRIMINATOR_LEN] {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_bytes());
    hasher.update(b":");
    hasher.update(name.as_bytes());
    let digest = hasher.finalize();
    let mut out = [0u8; ANCHOR_DISCRIMINATOR_LEN];
    out.copy_from_slice(&digest[..ANCHOR_DISCRIMINATOR_LEN]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precomputed_instruction_discriminators_match_sha256() {
        let names = [
            "init_registry", "create_hackathon", "set_winner_prize",
            "register", "announce_winner", "deposit",
        ];
        for name in names {
            let precomputed = instruction_discriminator(name);
            let runtime = runtime_discriminator("global", name);
            assert_eq!(precomputed, runtime, "mismatch for instruction '{name}'");
            assert_ne!(precomputed, [0u8; 8], "zero discriminator for '{name}'");
        }
    }

    #[test]
    fn precomputed_account_discriminators_match_sha256() {
        let names = ["Registry", "Hackathon", "Participant", "WinnerPrize"];
        for name in names {
            let precomputed = account_discriminator(name);
            let runtime = runtime_discriminator("account", name);
            assert_eq!(precomputed, runtime, "mismatch for account '{name}'");
            assert_ne!(precomputed, [0u8; 8], "zero discriminator for '{name}'");
        }
    }

    #[test]
    fn precomputed_event_discriminators_match_sha256() {
        let names = [
            "HackathonCreated", "ParticipantRegistered",
            "WinnerPrizePaid", "CustodyDeposited",
        ];
        for name in names {
            let precomputed = event_discriminator(name);
            let runtime = runtime_discriminator("event", name);
            assert_eq!(precomputed, runtime, "mismatch for event '{name}'");
        }
    }

    #[test]
    fn discriminators_are_distinct_across_instructions() {
        let names = [
            "init_registry", "create_hackathon", "set_winner_prize",
            "register", "announce_winner", "deposit",
        ];
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(instruction_discriminator(a), instruction_discriminator(b));
            }
        }
    }
}
