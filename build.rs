use std::{env, fmt::Write as _, fs, path::Path};

use sha2::{Digest, Sha256};

const INSTRUCTIONS: &[&str] = &[
    "init_registry",
    "create_hackathon",
    "set_winner_prize",
    "register",
    "announce_winner",
    "deposit",
];

const ACCOUNTS: &[&str] = &["Registry", "Hackathon", "Participant", "WinnerPrize"];

const EVENTS: &[&str] = &[
    "HackathonCreated",
    "ParticipantRegistered",
    "WinnerPrizePaid",
    "CustodyDeposited",
];

fn discriminator(namespace: &str, name: &str) -> [u8; 8] {
    let digest = Sha256::digest(format!("{namespace}:{name}").as_bytes());
    let mut out = [0u8; 8];
    out.copy_from_slice(&digest[..8]);
    out
}

fn emit(out: &mut String, prefix: &str, namespace: &str, names: &[&str]) {
    for name in names {
        let bytes = discriminator(namespace, name);
        let _ = writeln!(
            out,
            "pub const {prefix}_{}: [u8; 8] = {bytes:?};",
            name.to_ascii_uppercase()
        );
    }
}

fn main() {
    let mut out = String::new();
    emit(&mut out, "IX", "global", INSTRUCTIONS);
    emit(&mut out, "ACCT", "account", ACCOUNTS);
    emit(&mut out, "EVENT", "event", EVENTS);

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    fs::write(Path::new(&out_dir).join("discriminators.rs"), out)
        .expect("write discriminators.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
