//! Masked rendering of secrets
//!
//! Turns a secret into the multi-line display block shown by the list
//! and show commands. Sensitive fields (passwords, card numbers, CVC,
//! expiry dates, private keys, seed phrases) are replaced with a fixed
//! 8-asterisk mask; the mask deliberately ignores the real length so the
//! display leaks nothing about the value.

use crate::secret::Secret;

/// The fixed-width placeholder shown for every sensitive field
pub const MASK: &str = "********";

/// Mask a sensitive value. Always 8 asterisks, never length-preserving.
pub fn mask(_value: &str) -> &'static str {
    MASK
}

/// Render a secret as a human-readable block, one "Label: value" line
/// per field, each line newline-terminated. Field order and labels are
/// part of the observable contract.
pub fn describe(secret: &Secret) -> String {
    match secret {
        Secret::BasicPassword {
            name,
            folder,
            username,
            password,
            url,
        } => format!(
            "Type of Secret: Basic Password\n\
             Name: {name}\n\
             Folder: {folder}\n\
             Username: {username}\n\
             URL: {url}\n\
             Password: {}\n",
            mask(password)
        ),
        Secret::CreditCard {
            name,
            folder,
            full_name,
            card_number,
            cvc,
            expiry_date,
        } => format!(
            "Type of Secret: Credit Card\n\
             Name: {name}\n\
             Folder: {folder}\n\
             Full Name: {full_name}\n\
             Credit Card Number: {}\n\
             CVC Number: {}\n\
             Expiry Date: {}\n",
            mask(card_number),
            mask(cvc),
            mask(expiry_date)
        ),
        Secret::CryptoWallet {
            name,
            folder,
            username,
            private_key,
            seed_phrase,
        } => format!(
            "Type of Secret: CryptoCurrency Wallet\n\
             Name: {name}\n\
             Folder: {folder}\n\
             Username: {username}\n\
             Private Key: {}\n\
             Seed Phrase: {}\n",
            mask(private_key),
            mask(seed_phrase)
        ),
        Secret::NusNet {
            name,
            folder,
            nusnet_id,
            password,
        } => format!(
            "Type of Secret: NUSNet ID\n\
             Name: {name}\n\
             Folder: {folder}\n\
             NUSNet ID: {nusnet_id}\n\
             Password: {}\n",
            mask(password)
        ),
        Secret::StudentId {
            name,
            folder,
            student_id,
        } => format!(
            "Type of Secret: Student ID\n\
             Name: {name}\n\
             Folder: {folder}\n\
             Student ID: {student_id}\n"
        ),
        Secret::WifiPassword {
            name,
            folder,
            username,
            password,
        } => format!(
            "Type of Secret: Wifi Password\n\
             Name: {name}\n\
             Folder: {folder}\n\
             Username: {username}\n\
             Password: {}\n",
            mask(password)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_ignores_length() {
        assert_eq!(mask("a"), "********");
        assert_eq!(mask("exactly8"), "********");
        assert_eq!(mask("a very long passphrase with many words"), "********");
        assert_eq!(mask(""), "********");
    }

    #[test]
    fn test_basic_password_block() {
        let secret = Secret::basic_password(
            "basicPassword1",
            Some("FolderName"),
            "basicUsername",
            "Lorem Ipsum 112",
            "google.com",
        )
        .unwrap();

        let text = describe(&secret);
        assert_eq!(
            text,
            "Type of Secret: Basic Password\n\
             Name: basicPassword1\n\
             Folder: FolderName\n\
             Username: basicUsername\n\
             URL: google.com\n\
             Password: ********\n"
        );
        assert!(!text.contains("Lorem Ipsum 112"));
    }

    #[test]
    fn test_credit_card_block() {
        let secret = Secret::credit_card(
            "card1",
            Some("Wallets"),
            "Jane Tan",
            "4111111111111111",
            "123",
            "12/27",
        )
        .unwrap();

        let text = describe(&secret);
        assert_eq!(
            text,
            "Type of Secret: Credit Card\n\
             Name: card1\n\
             Folder: Wallets\n\
             Full Name: Jane Tan\n\
             Credit Card Number: ********\n\
             CVC Number: ********\n\
             Expiry Date: ********\n"
        );
        assert!(!text.contains("4111111111111111"));
        assert!(!text.contains("123\n"));
        assert!(!text.contains("12/27"));
    }

    #[test]
    fn test_crypto_wallet_block() {
        let secret = Secret::crypto_wallet(
            "wallet1",
            None,
            "satoshi",
            "5Kb8kLf9zgWQnogidDA76MzPL6TsZZY36hWXMssSzNydYXYB9KF",
            "legal winner thank year wave sausage worth useful legal winner thank yellow",
        )
        .unwrap();

        let text = describe(&secret);
        assert_eq!(
            text,
            "Type of Secret: CryptoCurrency Wallet\n\
             Name: wallet1\n\
             Folder: unnamed\n\
             Username: satoshi\n\
             Private Key: ********\n\
             Seed Phrase: ********\n"
        );
        assert!(!text.contains("5Kb8kLf9"));
        assert!(!text.contains("legal winner"));
    }

    #[test]
    fn test_nusnet_block() {
        let secret = Secret::nusnet(
            "NUSNetName2",
            Some("FolderName"),
            "e081888@u.nus.edu",
            "Lorem Ipsum 12",
        )
        .unwrap();

        let text = describe(&secret);
        assert_eq!(
            text,
            "Type of Secret: NUSNet ID\n\
             Name: NUSNetName2\n\
             Folder: FolderName\n\
             NUSNet ID: e081888@u.nus.edu\n\
             Password: ********\n"
        );
        assert!(!text.contains("Lorem Ipsum 12\n"));
    }

    #[test]
    fn test_student_id_block() {
        let secret =
            Secret::student_id("StudentID2Name", Some("StudentsOfNUS"), "A021313G").unwrap();

        // Nothing sensitive here, the ID renders in plaintext
        assert_eq!(
            describe(&secret),
            "Type of Secret: Student ID\n\
             Name: StudentID2Name\n\
             Folder: StudentsOfNUS\n\
             Student ID: A021313G\n"
        );
    }

    #[test]
    fn test_wifi_password_block() {
        let secret = Secret::wifi_password("home", Some("Networks"), "admin", "hunter2").unwrap();

        let text = describe(&secret);
        assert_eq!(
            text,
            "Type of Secret: Wifi Password\n\
             Name: home\n\
             Folder: Networks\n\
             Username: admin\n\
             Password: ********\n"
        );
        assert!(!text.contains("hunter2"));
    }

    #[test]
    fn test_mask_never_length_preserving() {
        // A short numeric password still masks to exactly 8 characters
        let secret = Secret::wifi_password("w", None, "u", "42").unwrap();
        let text = describe(&secret);
        assert!(text.contains("Password: ********\n"));
        assert!(!text.contains("Password: **\n"));
    }
}
