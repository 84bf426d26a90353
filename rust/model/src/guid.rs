// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC compressed GUIDs.
//!
//! An IfcGloballyUniqueId is 128 random bits rendered as 22 characters of a
//! base-64 variant alphabet (digits, letters, `_`, `$`). 22 * 6 = 132 bits
//! of capacity, so the leading character only ever covers the top 2 bits.

use uuid::Uuid;

const ALPHABET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_$";

/// Generate a fresh compressed GUID.
pub fn new_guid() -> String {
    compress(Uuid::new_v4().into_bytes())
}

fn compress(bytes: [u8; 16]) -> String {
    let mut num = u128::from_be_bytes(bytes);
    let mut out = [0u8; 22];
    for slot in out.iter_mut().rev() {
        *slot = ALPHABET[(num & 0x3f) as usize];
        num >>= 6;
    }
    // Alphabet bytes are always valid UTF-8
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guid_is_22_chars_from_the_alphabet() {
        let guid = new_guid();
        assert_eq!(guid.len(), 22);
        assert!(guid.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn leading_char_covers_only_two_bits() {
        let guid = compress([0xff; 16]);
        // Top 2 bits of 128 set -> first character encodes value 3
        assert_eq!(guid.as_bytes()[0], ALPHABET[3]);
    }

    #[test]
    fn zero_bits_compress_to_all_zero_chars() {
        assert_eq!(compress([0; 16]), "0".repeat(22));
    }

    #[test]
    fn guids_are_unique() {
        let a = new_guid();
        let b = new_guid();
        assert_ne!(a, b);
    }
}
