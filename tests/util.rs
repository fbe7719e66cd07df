// tests/util.rs
// Shared fixtures for integration tests

/// 128-byte master secret used by the recovery fixtures.
#[allow(dead_code)]
pub const SEED_HEX: &str = "43e04e7cc735c3a4f611ead5475ad910fd2e97398d4284d99b73e69267e4c6c6ab8518ce0e93423e4de3aa4768c13eab7df39c9e13f93e531431b8f28ab3359d4c82700589f5ddd1e721a98fdf777aab8304b3f9b112aeb7c77bed76d7640404c788b2f844d1c0974fdf1697b24f435fdd89bd5bd91893a3b66ecfdb5434c5bd";

#[allow(dead_code)]
pub const ORGANIZATION_ID: &str = "e65ccfaa-01b7-4a00-aec5-0fcc25d7eba7";

#[allow(dead_code)]
pub const ETH_SUB_ID: &str = "a09d020a-1bc8-47b6-a208-0fd47cd05e66";
#[allow(dead_code)]
pub const ETH_ADDRESS: &str = "0x0D7ad5799E3DB77c8258b9700E4f94Fcb092C64B";
#[allow(dead_code)]
pub const ETH_PRIVATE_KEY: &str =
    "0x222d55b028c7896058d28af1d44c55d45264c470f2a93e7b013076e68b7bfa25";

#[allow(dead_code)]
pub const SOL_SUB_ID: &str = "21d3969c-8a56-46d9-be38-b53c21294e54";
#[allow(dead_code)]
pub const SOL_ADDRESS: &str = "4tZpnxbJbkCDFFCpbmb4y7wsH366kxeb57R8owi67qi8";
#[allow(dead_code)]
pub const SOL_PRIVATE_KEY: &str =
    "2tFuN9PCkTYsDV6rq8RauJZEmyBs7x8rLoSAFYD5JcQMCzVzStq45VeUVDDghGqXaYm8muC8YECzgoqTkyPph8gp";

/// Key map in the backup format, including fields the recovery ignores.
#[allow(dead_code)]
pub fn backup_json() -> String {
    format!(
        r#"{{
    "organization_id": "{org}",
    "encrypted_backup": "-----BEGIN PGP MESSAGE-----\n...\n-----END PGP MESSAGE-----",
    "keys": [
        {{
            "address_sub_id": "{sol}",
            "network_id": "solana-devnet",
            "curve": "ELLIPTIC_CURVE_ED25519",
            "wallet": "HOT",
            "account_name": "Solana Ops",
            "compatible_networks": ["solana-devnet"]
        }},
        {{
            "address_sub_id": "{eth}",
            "network_id": "ethereum-hardhat",
            "curve": "ELLIPTIC_CURVE_SECP256K1",
            "wallet": "HOT",
            "account_name": "Treasury",
            "compatible_networks": ["ethereum-hardhat", "base-sepolia"]
        }}
    ]
}}"#,
        org = ORGANIZATION_ID,
        sol = SOL_SUB_ID,
        eth = ETH_SUB_ID
    )
}

#[allow(dead_code)]
pub fn seed_bytes() -> Vec<u8> {
    hex::decode(SEED_HEX).expect("fixture seed is valid hex")
}
